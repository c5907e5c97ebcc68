// src/services/roles_service.rs

use sqlx::PgPool;
use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::{RolesRepository, UtilisateurRepository},
    models::utilisateur::{Role, RolesRequestDto, RolesResponseDto},
};

#[derive(Clone)]
pub struct RolesService {
    roles_repo: RolesRepository,
    utilisateur_repo: UtilisateurRepository,
    pool: PgPool,
}

impl RolesService {
    pub fn new(
        roles_repo: RolesRepository,
        utilisateur_repo: UtilisateurRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            roles_repo,
            utilisateur_repo,
            pool,
        }
    }

    fn check_valid(&self, dto: &RolesRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Role inválido: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::RolesNotValid,
                "Le rôle n'est pas valide",
                validation_messages(&errors),
            ));
        }
        Ok(())
    }

    // Nome livre -> enum; valor desconhecido é um erro declarado, não um panic.
    fn parse_role(&self, role_name: &str) -> Result<Role, AppError> {
        Role::parse(role_name).ok_or_else(|| {
            tracing::error!("Role desconhecido: {role_name}");
            AppError::invalid_entity(
                ErrorCode::RolesNotValid,
                "Le rôle n'est pas valide",
                vec![format!("Rôle inconnu: {role_name}")],
            )
        })
    }

    async fn resolve_utilisateur(&self, utilisateur_id: i32) -> Result<(), AppError> {
        self.utilisateur_repo
            .find_by_id(utilisateur_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::UtilisateurNotFound,
                    format!(
                        "Aucun utilisateur avec l'ID {utilisateur_id} n'a été trouvé dans la BDD"
                    ),
                )
            })?;
        Ok(())
    }

    pub async fn save(&self, dto: RolesRequestDto) -> Result<RolesResponseDto, AppError> {
        self.check_valid(&dto)?;
        let role = self.parse_role(dto.role_name.as_deref().unwrap())?;
        let utilisateur_id = dto.utilisateur_id.unwrap();
        self.resolve_utilisateur(utilisateur_id).await?;
        let saved = self
            .roles_repo
            .create(&self.pool, role, utilisateur_id, dto.entreprise_id)
            .await?;
        Ok(RolesResponseDto::from_entity(saved))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<RolesResponseDto, AppError> {
        self.roles_repo
            .find_by_id(id)
            .await?
            .map(RolesResponseDto::from_entity)
            .ok_or_else(|| {
                tracing::error!("Nenhum role com o ID {id}");
                AppError::not_found(
                    ErrorCode::RolesNotFound,
                    format!("Aucun rôle avec l'ID {id} n'a été trouvé dans la BDD"),
                )
            })
    }

    pub async fn find_by_role_name(&self, role_name: &str) -> Result<RolesResponseDto, AppError> {
        let role = self.parse_role(role_name)?;
        self.roles_repo
            .find_by_role_name(role)
            .await?
            .map(RolesResponseDto::from_entity)
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::RolesNotFound,
                    format!("Aucun rôle avec le NOM {role_name} n'a été trouvé dans la BDD"),
                )
            })
    }

    pub async fn find_all(&self) -> Result<Vec<RolesResponseDto>, AppError> {
        let roles = self.roles_repo.find_all().await?;
        Ok(roles
            .into_iter()
            .map(RolesResponseDto::from_entity)
            .collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.roles_repo.delete_by_id(id).await
    }

    pub async fn update(&self, id: i32, dto: RolesRequestDto) -> Result<RolesResponseDto, AppError> {
        self.check_valid(&dto)?;
        let role = self.parse_role(dto.role_name.as_deref().unwrap())?;
        let existing = self.roles_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::RolesNotFound,
                format!("Aucun rôle avec l'ID {id} n'a été trouvé dans la BDD"),
            )
        })?;
        let utilisateur_id = dto.utilisateur_id.unwrap();
        self.resolve_utilisateur(utilisateur_id).await?;
        let saved = self
            .roles_repo
            .update(existing.id, role, utilisateur_id, dto.entreprise_id)
            .await?;
        Ok(RolesResponseDto::from_entity(saved))
    }
}
