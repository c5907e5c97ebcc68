// src/services/entreprise_service.rs

use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::EntrepriseRepository,
    models::entreprise::{EntrepriseRequestDto, EntrepriseResponseDto},
};

// A entreprise é a raiz do escopo multi-tenant: nenhum outro id a resolver.
#[derive(Clone)]
pub struct EntrepriseService {
    entreprise_repo: EntrepriseRepository,
}

impl EntrepriseService {
    pub fn new(entreprise_repo: EntrepriseRepository) -> Self {
        Self { entreprise_repo }
    }

    fn check_valid(&self, dto: &EntrepriseRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Entreprise inválida: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::EntrepriseNotValid,
                "L'entreprise n'est pas valide",
                validation_messages(&errors),
            ));
        }
        Ok(())
    }

    pub async fn save(&self, dto: EntrepriseRequestDto) -> Result<EntrepriseResponseDto, AppError> {
        self.check_valid(&dto)?;
        let saved = self.entreprise_repo.create(&dto).await?;
        Ok(EntrepriseResponseDto::from_entity(saved))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<EntrepriseResponseDto, AppError> {
        self.entreprise_repo
            .find_by_id(id)
            .await?
            .map(EntrepriseResponseDto::from_entity)
            .ok_or_else(|| {
                tracing::error!("Nenhuma entreprise com o ID {id}");
                AppError::not_found(
                    ErrorCode::EntrepriseNotFound,
                    format!("Aucune entreprise avec l'ID {id} n'a été trouvée dans la BDD"),
                )
            })
    }

    pub async fn find_by_nom(&self, nom: &str) -> Result<EntrepriseResponseDto, AppError> {
        if nom.trim().is_empty() {
            tracing::error!("NOM da entreprise vazio na busca");
            return Err(AppError::not_found(
                ErrorCode::EntrepriseNotFound,
                "Aucune entreprise avec le NOM  n'a été trouvée dans la BDD".to_string(),
            ));
        }
        self.entreprise_repo
            .find_by_nom(nom)
            .await?
            .map(EntrepriseResponseDto::from_entity)
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::EntrepriseNotFound,
                    format!("Aucune entreprise avec le NOM {nom} n'a été trouvée dans la BDD"),
                )
            })
    }

    pub async fn find_all(&self) -> Result<Vec<EntrepriseResponseDto>, AppError> {
        let entreprises = self.entreprise_repo.find_all().await?;
        Ok(entreprises
            .into_iter()
            .map(EntrepriseResponseDto::from_entity)
            .collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.entreprise_repo.delete_by_id(id).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: EntrepriseRequestDto,
    ) -> Result<EntrepriseResponseDto, AppError> {
        self.check_valid(&dto)?;
        let existing = self.entreprise_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::EntrepriseNotFound,
                format!("Aucune entreprise avec l'ID {id} n'a été trouvée dans la BDD"),
            )
        })?;
        let saved = self.entreprise_repo.update(existing.id, &dto).await?;
        Ok(EntrepriseResponseDto::from_entity(saved))
    }
}
