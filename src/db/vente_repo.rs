// src/db/vente_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::vente::{LigneVente, LigneVenteRequestDto, Vente, VenteRequestDto},
};

#[derive(Clone)]
pub struct VenteRepository {
    pool: PgPool,
}

impl VenteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vente>, AppError> {
        let vente = sqlx::query_as::<_, Vente>("SELECT * FROM ventes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(vente)
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Vente>, AppError> {
        let vente = sqlx::query_as::<_, Vente>("SELECT * FROM ventes WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(vente)
    }

    pub async fn find_all(&self) -> Result<Vec<Vente>, AppError> {
        let ventes = sqlx::query_as::<_, Vente>("SELECT * FROM ventes ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(ventes)
    }

    pub async fn find_lignes_by_vente_id(&self, vente_id: i32) -> Result<Vec<LigneVente>, AppError> {
        let lignes = sqlx::query_as::<_, LigneVente>(
            "SELECT * FROM lignes_ventes WHERE vente_id = $1 ORDER BY id ASC",
        )
        .bind(vente_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(lignes)
    }

    // ---
    // Escritas transacionais: cabeçalho + lignes são persistidos juntos,
    // então os métodos aceitam o executor da transação.
    // ---

    pub async fn create<'e, E>(&self, executor: E, dto: &VenteRequestDto) -> Result<Vente, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let vente = sqlx::query_as::<_, Vente>(
            r#"
            INSERT INTO ventes (code, date_vente, commentaire, entreprise_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(dto.code.as_deref())
        .bind(dto.date_vente)
        .bind(dto.commentaire.as_deref())
        .bind(dto.entreprise_id)
        .fetch_one(executor)
        .await?;
        Ok(vente)
    }

    pub async fn create_ligne<'e, E>(
        &self,
        executor: E,
        vente_id: i32,
        dto: &LigneVenteRequestDto,
    ) -> Result<LigneVente, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let ligne = sqlx::query_as::<_, LigneVente>(
            r#"
            INSERT INTO lignes_ventes (vente_id, article_id, quantite, prix_unitaire)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(vente_id)
        .bind(dto.article_id)
        .bind(dto.quantite)
        .bind(dto.prix_unitaire)
        .fetch_one(executor)
        .await?;
        Ok(ligne)
    }

    pub async fn update(&self, id: i32, dto: &VenteRequestDto) -> Result<Vente, AppError> {
        let vente = sqlx::query_as::<_, Vente>(
            r#"
            UPDATE ventes
            SET code = $2, date_vente = $3, commentaire = $4, entreprise_id = $5,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.code.as_deref())
        .bind(dto.date_vente)
        .bind(dto.commentaire.as_deref())
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(vente)
    }

    pub async fn delete_all_lignes_by_vente_id<'e, E>(
        &self,
        executor: E,
        vente_id: i32,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM lignes_ventes WHERE vente_id = $1")
            .bind(vente_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn delete_by_id<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM ventes WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
