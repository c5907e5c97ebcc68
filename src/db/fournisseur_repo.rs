// src/db/fournisseur_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::fournisseur::{Fournisseur, FournisseurRequestDto},
};

#[derive(Clone)]
pub struct FournisseurRepository {
    pool: PgPool,
}

impl FournisseurRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Fournisseur>, AppError> {
        let fournisseur =
            sqlx::query_as::<_, Fournisseur>("SELECT * FROM fournisseurs WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(fournisseur)
    }

    pub async fn find_by_nom(&self, nom: &str) -> Result<Option<Fournisseur>, AppError> {
        let fournisseur =
            sqlx::query_as::<_, Fournisseur>("SELECT * FROM fournisseurs WHERE nom = $1")
                .bind(nom)
                .fetch_optional(&self.pool)
                .await?;
        Ok(fournisseur)
    }

    pub async fn find_all(&self) -> Result<Vec<Fournisseur>, AppError> {
        let fournisseurs =
            sqlx::query_as::<_, Fournisseur>("SELECT * FROM fournisseurs ORDER BY nom ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(fournisseurs)
    }

    pub async fn create(&self, dto: &FournisseurRequestDto) -> Result<Fournisseur, AppError> {
        let fournisseur = sqlx::query_as::<_, Fournisseur>(
            r#"
            INSERT INTO fournisseurs
                (nom, prenom, adresse1, adresse2, ville, code_postal, pays,
                 photo, email, num_tel, entreprise_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(dto.nom.as_deref())
        .bind(dto.prenom.as_deref())
        .bind(dto.adresse1.as_deref())
        .bind(dto.adresse2.as_deref())
        .bind(dto.ville.as_deref())
        .bind(dto.code_postal.as_deref())
        .bind(dto.pays.as_deref())
        .bind(dto.photo.as_deref())
        .bind(dto.email.as_deref())
        .bind(dto.num_tel.as_deref())
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(fournisseur)
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &FournisseurRequestDto,
    ) -> Result<Fournisseur, AppError> {
        let fournisseur = sqlx::query_as::<_, Fournisseur>(
            r#"
            UPDATE fournisseurs
            SET nom = $2, prenom = $3, adresse1 = $4, adresse2 = $5, ville = $6,
                code_postal = $7, pays = $8, photo = $9, email = $10,
                num_tel = $11, entreprise_id = $12, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.nom.as_deref())
        .bind(dto.prenom.as_deref())
        .bind(dto.adresse1.as_deref())
        .bind(dto.adresse2.as_deref())
        .bind(dto.ville.as_deref())
        .bind(dto.code_postal.as_deref())
        .bind(dto.pays.as_deref())
        .bind(dto.photo.as_deref())
        .bind(dto.email.as_deref())
        .bind(dto.num_tel.as_deref())
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(fournisseur)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM fournisseurs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
