// src/services/commande_client_service.rs

use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::{ArticleRepository, ClientRepository, CommandeClientRepository, EntrepriseRepository},
    models::commande_client::{
        CommandeClient, CommandeClientRequestDto, CommandeClientResponseDto,
        LigneCommandeClientRequestDto, LigneCommandeClientResponseDto,
    },
};

// CRUD do cabeçalho + operações sobre a coleção de lignes possuída,
// sempre no mesmo formato valida -> resolve -> persiste.
#[derive(Clone)]
pub struct CommandeClientService {
    commande_repo: CommandeClientRepository,
    client_repo: ClientRepository,
    entreprise_repo: EntrepriseRepository,
    article_repo: ArticleRepository,
}

impl CommandeClientService {
    pub fn new(
        commande_repo: CommandeClientRepository,
        client_repo: ClientRepository,
        entreprise_repo: EntrepriseRepository,
        article_repo: ArticleRepository,
    ) -> Self {
        Self {
            commande_repo,
            client_repo,
            entreprise_repo,
            article_repo,
        }
    }

    fn check_valid(&self, dto: &CommandeClientRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Commande client inválida: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::CommandeClientNotValid,
                "La commande client n'est pas valide",
                validation_messages(&errors),
            ));
        }
        Ok(())
    }

    fn check_valid_ligne(&self, dto: &LigneCommandeClientRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Ligne de commande client inválida: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::CommandeClientNotValid,
                "La ligne de commande client n'est pas valide",
                validation_messages(&errors),
            ));
        }
        Ok(())
    }

    async fn resolve_commande(&self, commande_id: i32) -> Result<CommandeClient, AppError> {
        self.commande_repo
            .find_by_id(commande_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::CommandeClientNotFound,
                    format!(
                        "Aucune commande client avec l'ID {commande_id} n'a été trouvée dans la BDD"
                    ),
                )
            })
    }

    async fn resolve_client(&self, client_id: i32) -> Result<(), AppError> {
        self.client_repo.find_by_id(client_id).await?.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::ClientNotFound,
                format!("Aucun client avec l'ID {client_id} n'a été trouvé dans la BDD"),
            )
        })?;
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

    async fn resolve_article(&self, article_id: i32) -> Result<(), AppError> {
        self.article_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::ArticleNotFound,
                    format!("Aucun article avec l'ID {article_id} n'a été trouvé"),
                )
            })?;
        Ok(())
    }

    async fn lignes_response(
        &self,
        commande_id: i32,
    ) -> Result<Vec<LigneCommandeClientResponseDto>, AppError> {
        let lignes = self
            .commande_repo
            .find_lignes_by_commande_id(commande_id)
            .await?;
        let mut dtos = Vec::with_capacity(lignes.len());
        for ligne in lignes {
            let article = self.article_repo.find_by_id(ligne.article_id).await?;
            dtos.push(LigneCommandeClientResponseDto::from_entity(ligne, article));
        }
        Ok(dtos)
    }

    async fn to_response(
        &self,
        commande: CommandeClient,
    ) -> Result<CommandeClientResponseDto, AppError> {
        let client = self.client_repo.find_by_id(commande.client_id).await?;
        let lignes = self.lignes_response(commande.id).await?;
        Ok(CommandeClientResponseDto::from_entity(
            commande, client, lignes,
        ))
    }

    // ---
    // CRUD do cabeçalho
    // ---

    pub async fn save(
        &self,
        dto: CommandeClientRequestDto,
    ) -> Result<CommandeClientResponseDto, AppError> {
        self.check_valid(&dto)?;
        self.resolve_client(dto.client_id.unwrap()).await?;
        self.resolve_entreprise(dto.entreprise_id.unwrap()).await?;
        let saved = self.commande_repo.create(&dto).await?;
        self.to_response(saved).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<CommandeClientResponseDto, AppError> {
        let commande = self.resolve_commande(id).await?;
        self.to_response(commande).await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<CommandeClientResponseDto, AppError> {
        if code.trim().is_empty() {
            tracing::error!("CODE da commande client vazio na busca");
            return Err(AppError::not_found(
                ErrorCode::CommandeClientNotFound,
                "Aucune commande client avec le CODE  n'a été trouvée dans la BDD".to_string(),
            ));
        }
        let commande = self
            .commande_repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::CommandeClientNotFound,
                    format!(
                        "Aucune commande client avec le CODE {code} n'a été trouvée dans la BDD"
                    ),
                )
            })?;
        self.to_response(commande).await
    }

    pub async fn find_all(&self) -> Result<Vec<CommandeClientResponseDto>, AppError> {
        let commandes = self.commande_repo.find_all().await?;
        let mut dtos = Vec::with_capacity(commandes.len());
        for commande in commandes {
            dtos.push(self.to_response(commande).await?);
        }
        Ok(dtos)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.commande_repo.delete_by_id(id).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: CommandeClientRequestDto,
    ) -> Result<CommandeClientResponseDto, AppError> {
        self.check_valid(&dto)?;
        let existing = self.resolve_commande(id).await?;
        self.resolve_client(dto.client_id.unwrap()).await?;
        self.resolve_entreprise(dto.entreprise_id.unwrap()).await?;
        let saved = self.commande_repo.update(existing.id, &dto).await?;
        self.to_response(saved).await
    }

    // ---
    // Operações sobre as lignes, sempre escopadas pelo id da commande pai
    // ---

    pub async fn add_ligne(
        &self,
        commande_id: i32,
        dto: LigneCommandeClientRequestDto,
    ) -> Result<CommandeClientResponseDto, AppError> {
        let commande = self.resolve_commande(commande_id).await?;
        self.check_valid_ligne(&dto)?;
        self.resolve_article(dto.article_id.unwrap()).await?;
        self.commande_repo.create_ligne(commande.id, &dto).await?;
        self.to_response(commande).await
    }

    pub async fn update_ligne(
        &self,
        commande_id: i32,
        ligne_id: i32,
        dto: LigneCommandeClientRequestDto,
    ) -> Result<CommandeClientResponseDto, AppError> {
        let commande = self.resolve_commande(commande_id).await?;
        self.check_valid_ligne(&dto)?;
        let ligne = self
            .commande_repo
            .find_ligne_by_id(ligne_id)
            .await?
            // Uma ligne de outra commande é tratada como inexistente.
            .filter(|l| l.commande_client_id == commande_id)
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::LigneCommandeClientNotFound,
                    format!(
                        "Aucune ligne de commande client avec l'ID {ligne_id} n'a été trouvée dans la BDD"
                    ),
                )
            })?;
        self.resolve_article(dto.article_id.unwrap()).await?;
        self.commande_repo.update_ligne(ligne.id, &dto).await?;
        self.to_response(commande).await
    }

    pub async fn remove_ligne(
        &self,
        commande_id: i32,
        ligne_id: i32,
    ) -> Result<CommandeClientResponseDto, AppError> {
        let commande = self.resolve_commande(commande_id).await?;
        let ligne = self
            .commande_repo
            .find_ligne_by_id(ligne_id)
            .await?
            .filter(|l| l.commande_client_id == commande_id)
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::LigneCommandeClientNotFound,
                    format!(
                        "Aucune ligne de commande client avec l'ID {ligne_id} n'a été trouvée dans la BDD"
                    ),
                )
            })?;
        self.commande_repo.delete_ligne_by_id(ligne.id).await?;
        self.to_response(commande).await
    }

    pub async fn remove_all_lignes(
        &self,
        commande_id: i32,
    ) -> Result<CommandeClientResponseDto, AppError> {
        let commande = self.resolve_commande(commande_id).await?;
        self.commande_repo
            .delete_all_lignes_by_commande_id(commande.id)
            .await?;
        self.to_response(commande).await
    }

    pub async fn find_all_lignes_by_commande_id(
        &self,
        commande_id: i32,
    ) -> Result<Vec<LigneCommandeClientResponseDto>, AppError> {
        let commande = self.resolve_commande(commande_id).await?;
        self.lignes_response(commande.id).await
    }
}
