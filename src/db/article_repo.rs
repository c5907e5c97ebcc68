// src/db/article_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::article::{Article, ArticleRequestDto},
};

#[derive(Clone)]
pub struct ArticleRepository {
    pool: PgPool,
}

impl ArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, AppError> {
        let article = sqlx::query_as::<_, Article>("SELECT * FROM articles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(article)
    }

    pub async fn find_by_code_article(&self, code_article: &str) -> Result<Option<Article>, AppError> {
        let article =
            sqlx::query_as::<_, Article>("SELECT * FROM articles WHERE code_article = $1")
                .bind(code_article)
                .fetch_optional(&self.pool)
                .await?;
        Ok(article)
    }

    pub async fn find_all(&self) -> Result<Vec<Article>, AppError> {
        let articles =
            sqlx::query_as::<_, Article>("SELECT * FROM articles ORDER BY code_article ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(articles)
    }

    pub async fn create(&self, dto: &ArticleRequestDto) -> Result<Article, AppError> {
        let article = sqlx::query_as::<_, Article>(
            r#"
            INSERT INTO articles
                (code_article, designation, prix_unitaire_ht, taux_tva,
                 prix_unitaire_ttc, photo, categorie_id, entreprise_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(dto.code_article.as_deref())
        .bind(dto.designation.as_deref())
        .bind(dto.prix_unitaire_ht)
        .bind(dto.taux_tva)
        .bind(dto.prix_unitaire_ttc)
        .bind(dto.photo.as_deref())
        .bind(dto.categorie_id)
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(article)
    }

    pub async fn update(&self, id: i32, dto: &ArticleRequestDto) -> Result<Article, AppError> {
        let article = sqlx::query_as::<_, Article>(
            r#"
            UPDATE articles
            SET code_article = $2, designation = $3, prix_unitaire_ht = $4,
                taux_tva = $5, prix_unitaire_ttc = $6, photo = $7,
                categorie_id = $8, entreprise_id = $9, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.code_article.as_deref())
        .bind(dto.designation.as_deref())
        .bind(dto.prix_unitaire_ht)
        .bind(dto.taux_tva)
        .bind(dto.prix_unitaire_ttc)
        .bind(dto.photo.as_deref())
        .bind(dto.categorie_id)
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(article)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
