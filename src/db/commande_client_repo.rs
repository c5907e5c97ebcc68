// src/db/commande_client_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::commande_client::{
        CommandeClient, CommandeClientRequestDto, LigneCommandeClient,
        LigneCommandeClientRequestDto,
    },
};

#[derive(Clone)]
pub struct CommandeClientRepository {
    pool: PgPool,
}

impl CommandeClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Cabeçalhos
    // ---

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CommandeClient>, AppError> {
        let commande =
            sqlx::query_as::<_, CommandeClient>("SELECT * FROM commandes_clients WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(commande)
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<CommandeClient>, AppError> {
        let commande =
            sqlx::query_as::<_, CommandeClient>("SELECT * FROM commandes_clients WHERE code = $1")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;
        Ok(commande)
    }

    pub async fn find_all(&self) -> Result<Vec<CommandeClient>, AppError> {
        let commandes =
            sqlx::query_as::<_, CommandeClient>("SELECT * FROM commandes_clients ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(commandes)
    }

    pub async fn create(
        &self,
        dto: &CommandeClientRequestDto,
    ) -> Result<CommandeClient, AppError> {
        let commande = sqlx::query_as::<_, CommandeClient>(
            r#"
            INSERT INTO commandes_clients (code, date_commande, client_id, entreprise_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(dto.code.as_deref())
        .bind(dto.date_commande)
        .bind(dto.client_id)
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(commande)
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &CommandeClientRequestDto,
    ) -> Result<CommandeClient, AppError> {
        let commande = sqlx::query_as::<_, CommandeClient>(
            r#"
            UPDATE commandes_clients
            SET code = $2, date_commande = $3, client_id = $4, entreprise_id = $5,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.code.as_deref())
        .bind(dto.date_commande)
        .bind(dto.client_id)
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(commande)
    }

    // As lignes caem junto via ON DELETE CASCADE.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM commandes_clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ---
    // Lignes (coleção possuída pelo cabeçalho)
    // ---

    pub async fn find_ligne_by_id(
        &self,
        ligne_id: i32,
    ) -> Result<Option<LigneCommandeClient>, AppError> {
        let ligne = sqlx::query_as::<_, LigneCommandeClient>(
            "SELECT * FROM lignes_commandes_clients WHERE id = $1",
        )
        .bind(ligne_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ligne)
    }

    pub async fn find_lignes_by_commande_id(
        &self,
        commande_id: i32,
    ) -> Result<Vec<LigneCommandeClient>, AppError> {
        let lignes = sqlx::query_as::<_, LigneCommandeClient>(
            "SELECT * FROM lignes_commandes_clients WHERE commande_client_id = $1 ORDER BY id ASC",
        )
        .bind(commande_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(lignes)
    }

    pub async fn create_ligne(
        &self,
        commande_id: i32,
        dto: &LigneCommandeClientRequestDto,
    ) -> Result<LigneCommandeClient, AppError> {
        let ligne = sqlx::query_as::<_, LigneCommandeClient>(
            r#"
            INSERT INTO lignes_commandes_clients
                (commande_client_id, article_id, quantite, prix_unitaire)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(commande_id)
        .bind(dto.article_id)
        .bind(dto.quantite)
        .bind(dto.prix_unitaire)
        .fetch_one(&self.pool)
        .await?;
        Ok(ligne)
    }

    pub async fn update_ligne(
        &self,
        ligne_id: i32,
        dto: &LigneCommandeClientRequestDto,
    ) -> Result<LigneCommandeClient, AppError> {
        let ligne = sqlx::query_as::<_, LigneCommandeClient>(
            r#"
            UPDATE lignes_commandes_clients
            SET article_id = $2, quantite = $3, prix_unitaire = $4, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(ligne_id)
        .bind(dto.article_id)
        .bind(dto.quantite)
        .bind(dto.prix_unitaire)
        .fetch_one(&self.pool)
        .await?;
        Ok(ligne)
    }

    pub async fn delete_ligne_by_id(&self, ligne_id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM lignes_commandes_clients WHERE id = $1")
            .bind(ligne_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete_all_lignes_by_commande_id(
        &self,
        commande_id: i32,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM lignes_commandes_clients WHERE commande_client_id = $1")
            .bind(commande_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
