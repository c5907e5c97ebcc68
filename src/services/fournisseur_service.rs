// src/services/fournisseur_service.rs

use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::{EntrepriseRepository, FournisseurRepository},
    models::fournisseur::{FournisseurRequestDto, FournisseurResponseDto},
};

#[derive(Clone)]
pub struct FournisseurService {
    fournisseur_repo: FournisseurRepository,
    entreprise_repo: EntrepriseRepository,
}

impl FournisseurService {
    pub fn new(
        fournisseur_repo: FournisseurRepository,
        entreprise_repo: EntrepriseRepository,
    ) -> Self {
        Self {
            fournisseur_repo,
            entreprise_repo,
        }
    }

    fn check_valid(&self, dto: &FournisseurRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Fournisseur inválido: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::FournisseurNotValid,
                "Le fournisseur n'est pas valide",
                validation_messages(&errors),
            ));
        }
        Ok(())
    }

    async fn resolve_entreprise(&self, entreprise_id: i32) -> Result<(), AppError> {
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
        Ok(())
    }

    pub async fn save(&self, dto: FournisseurRequestDto) -> Result<FournisseurResponseDto, AppError> {
        self.check_valid(&dto)?;
        self.resolve_entreprise(dto.entreprise_id.unwrap()).await?;
        let saved = self.fournisseur_repo.create(&dto).await?;
        Ok(FournisseurResponseDto::from_entity(saved))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<FournisseurResponseDto, AppError> {
        self.fournisseur_repo
            .find_by_id(id)
            .await?
            .map(FournisseurResponseDto::from_entity)
            .ok_or_else(|| {
                tracing::error!("Nenhum fournisseur com o ID {id}");
                AppError::not_found(
                    ErrorCode::FournisseurNotFound,
                    format!("Aucun fournisseur avec l'ID {id} n'a été trouvé dans la BDD"),
                )
            })
    }

    pub async fn find_by_nom(&self, nom: &str) -> Result<FournisseurResponseDto, AppError> {
        if nom.trim().is_empty() {
            tracing::error!("NOM do fournisseur vazio na busca");
            return Err(AppError::not_found(
                ErrorCode::FournisseurNotFound,
                "Aucun fournisseur avec le NOM  n'a été trouvé dans la BDD".to_string(),
            ));
        }
        self.fournisseur_repo
            .find_by_nom(nom)
            .await?
            .map(FournisseurResponseDto::from_entity)
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::FournisseurNotFound,
                    format!("Aucun fournisseur avec le NOM {nom} n'a été trouvé dans la BDD"),
                )
            })
    }

    pub async fn find_all(&self) -> Result<Vec<FournisseurResponseDto>, AppError> {
        let fournisseurs = self.fournisseur_repo.find_all().await?;
        Ok(fournisseurs
            .into_iter()
            .map(FournisseurResponseDto::from_entity)
            .collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.fournisseur_repo.delete_by_id(id).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: FournisseurRequestDto,
    ) -> Result<FournisseurResponseDto, AppError> {
        self.check_valid(&dto)?;
        let existing = self.fournisseur_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::FournisseurNotFound,
                format!("Aucun fournisseur avec l'ID {id} n'a été trouvé dans la BDD"),
            )
        })?;
        self.resolve_entreprise(dto.entreprise_id.unwrap()).await?;
        let saved = self.fournisseur_repo.update(existing.id, &dto).await?;
        Ok(FournisseurResponseDto::from_entity(saved))
    }
}
