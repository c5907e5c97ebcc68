// src/services/client_service.rs

use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::{ClientRepository, EntrepriseRepository},
    models::client::{ClientRequestDto, ClientResponseDto},
};

#[derive(Clone)]
pub struct ClientService {
    client_repo: ClientRepository,
    entreprise_repo: EntrepriseRepository,
}

impl ClientService {
    pub fn new(client_repo: ClientRepository, entreprise_repo: EntrepriseRepository) -> Self {
        Self {
            client_repo,
            entreprise_repo,
        }
    }

    fn check_valid(&self, dto: &ClientRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Client inválido: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::ClientNotValid,
                "Le client n'est pas valide",
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

    pub async fn save(&self, dto: ClientRequestDto) -> Result<ClientResponseDto, AppError> {
        self.check_valid(&dto)?;
        self.resolve_entreprise(dto.entreprise_id.unwrap()).await?;
        let saved = self.client_repo.create(&dto).await?;
        Ok(ClientResponseDto::from_entity(saved))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<ClientResponseDto, AppError> {
        self.client_repo
            .find_by_id(id)
            .await?
            .map(ClientResponseDto::from_entity)
            .ok_or_else(|| {
                tracing::error!("Nenhum client com o ID {id}");
                AppError::not_found(
                    ErrorCode::ClientNotFound,
                    format!("Aucun client avec l'ID {id} n'a été trouvé dans la BDD"),
                )
            })
    }

    pub async fn find_by_nom(&self, nom: &str) -> Result<ClientResponseDto, AppError> {
        if nom.trim().is_empty() {
            tracing::error!("NOM do client vazio na busca");
            return Err(AppError::not_found(
                ErrorCode::ClientNotFound,
                "Aucun client avec le NOM  n'a été trouvé dans la BDD".to_string(),
            ));
        }
        self.client_repo
            .find_by_nom(nom)
            .await?
            .map(ClientResponseDto::from_entity)
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::ClientNotFound,
                    format!("Aucun client avec le NOM {nom} n'a été trouvé dans la BDD"),
                )
            })
    }

    pub async fn find_all(&self) -> Result<Vec<ClientResponseDto>, AppError> {
        let clients = self.client_repo.find_all().await?;
        Ok(clients
            .into_iter()
            .map(ClientResponseDto::from_entity)
            .collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.client_repo.delete_by_id(id).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: ClientRequestDto,
    ) -> Result<ClientResponseDto, AppError> {
        self.check_valid(&dto)?;
        let existing = self.client_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::ClientNotFound,
                format!("Aucun client avec l'ID {id} n'a été trouvé dans la BDD"),
            )
        })?;
        self.resolve_entreprise(dto.entreprise_id.unwrap()).await?;
        let saved = self.client_repo.update(existing.id, &dto).await?;
        Ok(ClientResponseDto::from_entity(saved))
    }
}
