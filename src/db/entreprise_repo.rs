// src/db/entreprise_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::entreprise::{Entreprise, EntrepriseRequestDto},
};

#[derive(Clone)]
pub struct EntrepriseRepository {
    pool: PgPool,
}

impl EntrepriseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Entreprise>, AppError> {
        let entreprise =
            sqlx::query_as::<_, Entreprise>("SELECT * FROM entreprises WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(entreprise)
    }

    pub async fn find_by_nom(&self, nom: &str) -> Result<Option<Entreprise>, AppError> {
        let entreprise =
            sqlx::query_as::<_, Entreprise>("SELECT * FROM entreprises WHERE nom = $1")
                .bind(nom)
                .fetch_optional(&self.pool)
                .await?;
        Ok(entreprise)
    }

    pub async fn find_all(&self) -> Result<Vec<Entreprise>, AppError> {
        let entreprises =
            sqlx::query_as::<_, Entreprise>("SELECT * FROM entreprises ORDER BY nom ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(entreprises)
    }

    pub async fn create(&self, dto: &EntrepriseRequestDto) -> Result<Entreprise, AppError> {
        let entreprise = sqlx::query_as::<_, Entreprise>(
            r#"
            INSERT INTO entreprises (nom, description, code_fiscal, photo, email, num_tel, site_web)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(dto.nom.as_deref())
        .bind(dto.description.as_deref())
        .bind(dto.code_fiscal.as_deref())
        .bind(dto.photo.as_deref())
        .bind(dto.email.as_deref())
        .bind(dto.num_tel.as_deref())
        .bind(dto.site_web.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(entreprise)
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &EntrepriseRequestDto,
    ) -> Result<Entreprise, AppError> {
        let entreprise = sqlx::query_as::<_, Entreprise>(
            r#"
            UPDATE entreprises
            SET nom = $2, description = $3, code_fiscal = $4, photo = $5,
                email = $6, num_tel = $7, site_web = $8, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.nom.as_deref())
        .bind(dto.description.as_deref())
        .bind(dto.code_fiscal.as_deref())
        .bind(dto.photo.as_deref())
        .bind(dto.email.as_deref())
        .bind(dto.num_tel.as_deref())
        .bind(dto.site_web.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(entreprise)
    }

    // Apagar um id inexistente não é um erro: o DELETE simplesmente não
    // afeta nenhuma linha.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM entreprises WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
