// src/db/categorie_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::categorie::{Categorie, CategorieRequestDto},
};

#[derive(Clone)]
pub struct CategorieRepository {
    pool: PgPool,
}

impl CategorieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Categorie>, AppError> {
        let categorie = sqlx::query_as::<_, Categorie>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(categorie)
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Categorie>, AppError> {
        let categorie =
            sqlx::query_as::<_, Categorie>("SELECT * FROM categories WHERE code = $1")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;
        Ok(categorie)
    }

    pub async fn find_all(&self) -> Result<Vec<Categorie>, AppError> {
        let categories =
            sqlx::query_as::<_, Categorie>("SELECT * FROM categories ORDER BY code ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    pub async fn create(&self, dto: &CategorieRequestDto) -> Result<Categorie, AppError> {
        let categorie = sqlx::query_as::<_, Categorie>(
            r#"
            INSERT INTO categories (code, designation, entreprise_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(dto.code.as_deref())
        .bind(dto.designation.as_deref())
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(categorie)
    }

    pub async fn update(&self, id: i32, dto: &CategorieRequestDto) -> Result<Categorie, AppError> {
        let categorie = sqlx::query_as::<_, Categorie>(
            r#"
            UPDATE categories
            SET code = $2, designation = $3, entreprise_id = $4, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.code.as_deref())
        .bind(dto.designation.as_deref())
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(categorie)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
