// src/db/commande_fournisseur_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::commande_fournisseur::{
        CommandeFournisseur, CommandeFournisseurRequestDto, LigneCommandeFournisseur,
        LigneCommandeFournisseurRequestDto,
    },
};

#[derive(Clone)]
pub struct CommandeFournisseurRepository {
    pool: PgPool,
}

impl CommandeFournisseurRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Cabeçalhos
    // ---

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CommandeFournisseur>, AppError> {
        let commande = sqlx::query_as::<_, CommandeFournisseur>(
            "SELECT * FROM commandes_fournisseurs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(commande)
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<CommandeFournisseur>, AppError> {
        let commande = sqlx::query_as::<_, CommandeFournisseur>(
            "SELECT * FROM commandes_fournisseurs WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(commande)
    }

    pub async fn find_all(&self) -> Result<Vec<CommandeFournisseur>, AppError> {
        let commandes = sqlx::query_as::<_, CommandeFournisseur>(
            "SELECT * FROM commandes_fournisseurs ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(commandes)
    }

    pub async fn create(
        &self,
        dto: &CommandeFournisseurRequestDto,
    ) -> Result<CommandeFournisseur, AppError> {
        let commande = sqlx::query_as::<_, CommandeFournisseur>(
            r#"
            INSERT INTO commandes_fournisseurs (code, date_commande, fournisseur_id, entreprise_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(dto.code.as_deref())
        .bind(dto.date_commande)
        .bind(dto.fournisseur_id)
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(commande)
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &CommandeFournisseurRequestDto,
    ) -> Result<CommandeFournisseur, AppError> {
        let commande = sqlx::query_as::<_, CommandeFournisseur>(
            r#"
            UPDATE commandes_fournisseurs
            SET code = $2, date_commande = $3, fournisseur_id = $4, entreprise_id = $5,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.code.as_deref())
        .bind(dto.date_commande)
        .bind(dto.fournisseur_id)
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(commande)
    }

    // As lignes caem junto via ON DELETE CASCADE.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM commandes_fournisseurs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ---
    // Lignes
    // ---

    pub async fn find_ligne_by_id(
        &self,
        ligne_id: i32,
    ) -> Result<Option<LigneCommandeFournisseur>, AppError> {
        let ligne = sqlx::query_as::<_, LigneCommandeFournisseur>(
            "SELECT * FROM lignes_commandes_fournisseurs WHERE id = $1",
        )
        .bind(ligne_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ligne)
    }

    pub async fn find_lignes_by_commande_id(
        &self,
        commande_id: i32,
    ) -> Result<Vec<LigneCommandeFournisseur>, AppError> {
        let lignes = sqlx::query_as::<_, LigneCommandeFournisseur>(
            "SELECT * FROM lignes_commandes_fournisseurs WHERE commande_fournisseur_id = $1 ORDER BY id ASC",
        )
        .bind(commande_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(lignes)
    }

    pub async fn create_ligne(
        &self,
        commande_id: i32,
        dto: &LigneCommandeFournisseurRequestDto,
    ) -> Result<LigneCommandeFournisseur, AppError> {
        let ligne = sqlx::query_as::<_, LigneCommandeFournisseur>(
            r#"
            INSERT INTO lignes_commandes_fournisseurs
                (commande_fournisseur_id, article_id, quantite, prix_unitaire)
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
        dto: &LigneCommandeFournisseurRequestDto,
    ) -> Result<LigneCommandeFournisseur, AppError> {
        let ligne = sqlx::query_as::<_, LigneCommandeFournisseur>(
            r#"
            UPDATE lignes_commandes_fournisseurs
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
        sqlx::query("DELETE FROM lignes_commandes_fournisseurs WHERE id = $1")
            .bind(ligne_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete_all_lignes_by_commande_id(
        &self,
        commande_id: i32,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM lignes_commandes_fournisseurs WHERE commande_fournisseur_id = $1")
            .bind(commande_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
