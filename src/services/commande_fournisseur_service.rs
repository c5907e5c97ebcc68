// src/services/commande_fournisseur_service.rs

use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::{
        ArticleRepository, CommandeFournisseurRepository, EntrepriseRepository,
        FournisseurRepository,
    },
    models::commande_fournisseur::{
        CommandeFournisseur, CommandeFournisseurRequestDto, CommandeFournisseurResponseDto,
        LigneCommandeFournisseurRequestDto, LigneCommandeFournisseurResponseDto,
    },
};

// Espelho do serviço de commande client, do lado compras.
#[derive(Clone)]
pub struct CommandeFournisseurService {
    commande_repo: CommandeFournisseurRepository,
    fournisseur_repo: FournisseurRepository,
    entreprise_repo: EntrepriseRepository,
    article_repo: ArticleRepository,
}

impl CommandeFournisseurService {
    pub fn new(
        commande_repo: CommandeFournisseurRepository,
        fournisseur_repo: FournisseurRepository,
        entreprise_repo: EntrepriseRepository,
        article_repo: ArticleRepository,
    ) -> Self {
        Self {
            commande_repo,
            fournisseur_repo,
            entreprise_repo,
            article_repo,
        }
    }

    fn check_valid(&self, dto: &CommandeFournisseurRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Commande fournisseur inválida: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::CommandeFournisseurNotValid,
                "La commande fournisseur n'est pas valide",
                validation_messages(&errors),
            ));
        }
        Ok(())
    }

    fn check_valid_ligne(&self, dto: &LigneCommandeFournisseurRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Ligne de commande fournisseur inválida: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::CommandeFournisseurNotValid,
                "La ligne de commande fournisseur n'est pas valide",
                validation_messages(&errors),
            ));
        }
        Ok(())
    }

    async fn resolve_commande(&self, commande_id: i32) -> Result<CommandeFournisseur, AppError> {
        self.commande_repo
            .find_by_id(commande_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::CommandeFournisseurNotFound,
                    format!(
                        "Aucune commande fournisseur avec l'ID {commande_id} n'a été trouvée dans la BDD"
                    ),
                )
            })
    }

    async fn resolve_fournisseur(&self, fournisseur_id: i32) -> Result<(), AppError> {
        self.fournisseur_repo
            .find_by_id(fournisseur_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::FournisseurNotFound,
                    format!(
                        "Aucun fournisseur avec l'ID {fournisseur_id} n'a été trouvé dans la BDD"
                    ),
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
    ) -> Result<Vec<LigneCommandeFournisseurResponseDto>, AppError> {
        let lignes = self
            .commande_repo
            .find_lignes_by_commande_id(commande_id)
            .await?;
        let mut dtos = Vec::with_capacity(lignes.len());
        for ligne in lignes {
            let article = self.article_repo.find_by_id(ligne.article_id).await?;
            dtos.push(LigneCommandeFournisseurResponseDto::from_entity(
                ligne, article,
            ));
        }
        Ok(dtos)
    }

    async fn to_response(
        &self,
        commande: CommandeFournisseur,
    ) -> Result<CommandeFournisseurResponseDto, AppError> {
        let fournisseur = self
            .fournisseur_repo
            .find_by_id(commande.fournisseur_id)
            .await?;
        let lignes = self.lignes_response(commande.id).await?;
        Ok(CommandeFournisseurResponseDto::from_entity(
            commande,
            fournisseur,
            lignes,
        ))
    }

    // ---
    // CRUD do cabeçalho
    // ---

    pub async fn save(
        &self,
        dto: CommandeFournisseurRequestDto,
    ) -> Result<CommandeFournisseurResponseDto, AppError> {
        self.check_valid(&dto)?;
        self.resolve_fournisseur(dto.fournisseur_id.unwrap()).await?;
        self.resolve_entreprise(dto.entreprise_id.unwrap()).await?;
        let saved = self.commande_repo.create(&dto).await?;
        self.to_response(saved).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<CommandeFournisseurResponseDto, AppError> {
        let commande = self.resolve_commande(id).await?;
        self.to_response(commande).await
    }

    pub async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<CommandeFournisseurResponseDto, AppError> {
        if code.trim().is_empty() {
            tracing::error!("CODE da commande fournisseur vazio na busca");
            return Err(AppError::not_found(
                ErrorCode::CommandeFournisseurNotFound,
                "Aucune commande fournisseur avec le CODE  n'a été trouvée dans la BDD".to_string(),
            ));
        }
        let commande = self
            .commande_repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::CommandeFournisseurNotFound,
                    format!(
                        "Aucune commande fournisseur avec le CODE {code} n'a été trouvée dans la BDD"
                    ),
                )
            })?;
        self.to_response(commande).await
    }

    pub async fn find_all(&self) -> Result<Vec<CommandeFournisseurResponseDto>, AppError> {
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
        dto: CommandeFournisseurRequestDto,
    ) -> Result<CommandeFournisseurResponseDto, AppError> {
        self.check_valid(&dto)?;
        let existing = self.resolve_commande(id).await?;
        self.resolve_fournisseur(dto.fournisseur_id.unwrap()).await?;
        self.resolve_entreprise(dto.entreprise_id.unwrap()).await?;
        let saved = self.commande_repo.update(existing.id, &dto).await?;
        self.to_response(saved).await
    }

    // ---
    // Operações sobre as lignes
    // ---

    pub async fn add_ligne(
        &self,
        commande_id: i32,
        dto: LigneCommandeFournisseurRequestDto,
    ) -> Result<CommandeFournisseurResponseDto, AppError> {
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
        dto: LigneCommandeFournisseurRequestDto,
    ) -> Result<CommandeFournisseurResponseDto, AppError> {
        let commande = self.resolve_commande(commande_id).await?;
        self.check_valid_ligne(&dto)?;
        let ligne = self
            .commande_repo
            .find_ligne_by_id(ligne_id)
            .await?
            .filter(|l| l.commande_fournisseur_id == commande_id)
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::LigneCommandeFournisseurNotFound,
                    format!(
                        "Aucune ligne de commande fournisseur avec l'ID {ligne_id} n'a été trouvée dans la BDD"
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
    ) -> Result<CommandeFournisseurResponseDto, AppError> {
        let commande = self.resolve_commande(commande_id).await?;
        let ligne = self
            .commande_repo
            .find_ligne_by_id(ligne_id)
            .await?
            .filter(|l| l.commande_fournisseur_id == commande_id)
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::LigneCommandeFournisseurNotFound,
                    format!(
                        "Aucune ligne de commande fournisseur avec l'ID {ligne_id} n'a été trouvée dans la BDD"
                    ),
                )
            })?;
        self.commande_repo.delete_ligne_by_id(ligne.id).await?;
        self.to_response(commande).await
    }

    pub async fn remove_all_lignes(
        &self,
        commande_id: i32,
    ) -> Result<CommandeFournisseurResponseDto, AppError> {
        let commande = self.resolve_commande(commande_id).await?;
        self.commande_repo
            .delete_all_lignes_by_commande_id(commande.id)
            .await?;
        self.to_response(commande).await
    }

    pub async fn find_all_lignes_by_commande_id(
        &self,
        commande_id: i32,
    ) -> Result<Vec<LigneCommandeFournisseurResponseDto>, AppError> {
        let commande = self.resolve_commande(commande_id).await?;
        self.lignes_response(commande.id).await
    }
}
