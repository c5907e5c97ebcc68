// src/db/utilisateur_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::utilisateur::{Utilisateur, UtilisateurRequestDto},
};

// Repositório de utilisateurs, responsável por todas as interações com a
// tabela 'utilisateurs'.
#[derive(Clone)]
pub struct UtilisateurRepository {
    pool: PgPool,
}

impl UtilisateurRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Utilisateur>, AppError> {
        let utilisateur =
            sqlx::query_as::<_, Utilisateur>("SELECT * FROM utilisateurs WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(utilisateur)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Utilisateur>, AppError> {
        let utilisateur =
            sqlx::query_as::<_, Utilisateur>("SELECT * FROM utilisateurs WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(utilisateur)
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM utilisateurs WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists.0)
    }

    pub async fn exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM utilisateurs WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists.0)
    }

    pub async fn find_all(&self) -> Result<Vec<Utilisateur>, AppError> {
        let utilisateurs =
            sqlx::query_as::<_, Utilisateur>("SELECT * FROM utilisateurs ORDER BY username ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(utilisateurs)
    }

    // O create aceita um executor para poder rodar dentro da transação do
    // registro (utilisateur + role criados juntos). A senha chega já hasheada.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        dto: &UtilisateurRequestDto,
        mot_de_passe_hash: &str,
    ) -> Result<Utilisateur, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let utilisateur = sqlx::query_as::<_, Utilisateur>(
            r#"
            INSERT INTO utilisateurs
                (nom, prenom, email, username, mot_de_passe, date_de_naissance,
                 adresse1, adresse2, ville, code_postal, pays, photo, entreprise_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(dto.nom.as_deref())
        .bind(dto.prenom.as_deref())
        .bind(dto.email.as_deref())
        .bind(dto.username.as_deref())
        .bind(mot_de_passe_hash)
        .bind(dto.date_de_naissance)
        .bind(dto.adresse1.as_deref())
        .bind(dto.adresse2.as_deref())
        .bind(dto.ville.as_deref())
        .bind(dto.code_postal.as_deref())
        .bind(dto.pays.as_deref())
        .bind(dto.photo.as_deref())
        .bind(dto.entreprise_id)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            // Mapeia as violações de unicidade para o erro de duplicado.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    if let Some(constraint) = db_err.constraint() {
                        return match constraint {
                            "utilisateurs_email_key" => {
                                AppError::IllegalArgument("Email déjà utilisé".to_string())
                            }
                            "utilisateurs_username_key" => AppError::IllegalArgument(
                                "Nom d'utilisateur déjà utilisé".to_string(),
                            ),
                            _ => AppError::IllegalArgument(constraint.to_string()),
                        };
                    }
                }
            }
            e.into()
        })?;
        Ok(utilisateur)
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &UtilisateurRequestDto,
        mot_de_passe_hash: &str,
    ) -> Result<Utilisateur, AppError> {
        let utilisateur = sqlx::query_as::<_, Utilisateur>(
            r#"
            UPDATE utilisateurs
            SET nom = $2, prenom = $3, email = $4, username = $5, mot_de_passe = $6,
                date_de_naissance = $7, adresse1 = $8, adresse2 = $9, ville = $10,
                code_postal = $11, pays = $12, photo = $13, entreprise_id = $14,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.nom.as_deref())
        .bind(dto.prenom.as_deref())
        .bind(dto.email.as_deref())
        .bind(dto.username.as_deref())
        .bind(mot_de_passe_hash)
        .bind(dto.date_de_naissance)
        .bind(dto.adresse1.as_deref())
        .bind(dto.adresse2.as_deref())
        .bind(dto.ville.as_deref())
        .bind(dto.code_postal.as_deref())
        .bind(dto.pays.as_deref())
        .bind(dto.photo.as_deref())
        .bind(dto.entreprise_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(utilisateur)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM utilisateurs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
