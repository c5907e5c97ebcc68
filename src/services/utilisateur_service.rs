// src/services/utilisateur_service.rs

use sqlx::PgPool;
use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::{EntrepriseRepository, RolesRepository, UtilisateurRepository},
    models::utilisateur::{Utilisateur, UtilisateurRequestDto, UtilisateurResponseDto},
};

#[derive(Clone)]
pub struct UtilisateurService {
    utilisateur_repo: UtilisateurRepository,
    roles_repo: RolesRepository,
    entreprise_repo: EntrepriseRepository,
    pool: PgPool,
}

impl UtilisateurService {
    pub fn new(
        utilisateur_repo: UtilisateurRepository,
        roles_repo: RolesRepository,
        entreprise_repo: EntrepriseRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            utilisateur_repo,
            roles_repo,
            entreprise_repo,
            pool,
        }
    }

    fn check_valid(&self, dto: &UtilisateurRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Utilisateur inválido: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::UtilisateurNotValid,
                "L'utilisateur n'est pas valide",
                validation_messages(&errors),
            ));
        }
        Ok(())
    }

    async fn resolve_entreprise(&self, entreprise_id: Option<i32>) -> Result<(), AppError> {
        if let Some(entreprise_id) = entreprise_id {
            self.entreprise_repo
                .find_by_id(entreprise_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(
                        ErrorCode::EntrepriseNotFound,
                        format!(
                            "Aucune entreprise avec l'ID {entreprise_id} n'a été trouvée dans la BDD"
                        ),
                    )
                })?;
        }
        Ok(())
    }

    // O hashing roda fora do runtime assíncrono, como no login/registro.
    async fn hash_mot_de_passe(&self, mot_de_passe: &str) -> Result<String, AppError> {
        let mot_de_passe = mot_de_passe.to_owned();
        let hash =
            tokio::task::spawn_blocking(move || bcrypt::hash(&mot_de_passe, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {e}"))??;
        Ok(hash)
    }

    async fn to_response(&self, utilisateur: Utilisateur) -> Result<UtilisateurResponseDto, AppError> {
        let roles = self
            .roles_repo
            .find_all_by_utilisateur_id(utilisateur.id)
            .await?;
        Ok(UtilisateurResponseDto::from_entity(utilisateur, roles))
    }

    pub async fn save(&self, dto: UtilisateurRequestDto) -> Result<UtilisateurResponseDto, AppError> {
        self.check_valid(&dto)?;
        self.resolve_entreprise(dto.entreprise_id).await?;
        let hash = self.hash_mot_de_passe(dto.mot_de_passe.as_deref().unwrap()).await?;
        let saved = self
            .utilisateur_repo
            .create(&self.pool, &dto, &hash)
            .await?;
        self.to_response(saved).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<UtilisateurResponseDto, AppError> {
        let utilisateur = self.utilisateur_repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::error!("Nenhum utilisateur com o ID {id}");
            AppError::not_found(
                ErrorCode::UtilisateurNotFound,
                format!("Aucun utilisateur avec l'ID {id} n'a été trouvé dans la BDD"),
            )
        })?;
        self.to_response(utilisateur).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<UtilisateurResponseDto, AppError> {
        if email.trim().is_empty() {
            tracing::error!("EMAIL do utilisateur vazio na busca");
            return Err(AppError::not_found(
                ErrorCode::UtilisateurNotFound,
                "Aucun utilisateur avec l'email  n'a été trouvé dans la BDD".to_string(),
            ));
        }
        let utilisateur = self
            .utilisateur_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::UtilisateurNotFound,
                    format!("Aucun utilisateur avec l'email {email} n'a été trouvé dans la BDD"),
                )
            })?;
        self.to_response(utilisateur).await
    }

    pub async fn find_all(&self) -> Result<Vec<UtilisateurResponseDto>, AppError> {
        let utilisateurs = self.utilisateur_repo.find_all().await?;
        let mut dtos = Vec::with_capacity(utilisateurs.len());
        for utilisateur in utilisateurs {
            dtos.push(self.to_response(utilisateur).await?);
        }
        Ok(dtos)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        // Os roles do utilisateur caem junto via ON DELETE CASCADE.
        self.utilisateur_repo.delete_by_id(id).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UtilisateurRequestDto,
    ) -> Result<UtilisateurResponseDto, AppError> {
        self.check_valid(&dto)?;
        let existing = self.utilisateur_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::UtilisateurNotFound,
                format!("Aucun utilisateur avec l'ID {id} n'a été trouvé dans la BDD"),
            )
        })?;
        self.resolve_entreprise(dto.entreprise_id).await?;
        let hash = self.hash_mot_de_passe(dto.mot_de_passe.as_deref().unwrap()).await?;
        let saved = self
            .utilisateur_repo
            .update(existing.id, &dto, &hash)
            .await?;
        self.to_response(saved).await
    }
}
