// src/services/vente_service.rs

use sqlx::PgPool;
use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::{ArticleRepository, EntrepriseRepository, VenteRepository},
    models::vente::{LigneVenteResponseDto, Vente, VenteRequestDto, VenteResponseDto},
};

// A vente chega com as suas lignes; cabeçalho + lignes são persistidos na
// mesma transação.
#[derive(Clone)]
pub struct VenteService {
    vente_repo: VenteRepository,
    article_repo: ArticleRepository,
    entreprise_repo: EntrepriseRepository,
    pool: PgPool,
}

impl VenteService {
    pub fn new(
        vente_repo: VenteRepository,
        article_repo: ArticleRepository,
        entreprise_repo: EntrepriseRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            vente_repo,
            article_repo,
            entreprise_repo,
            pool,
        }
    }

    // Valida o cabeçalho e cada ligne, acumulando as mensagens numa lista só.
    fn check_valid(&self, dto: &VenteRequestDto) -> Result<(), AppError> {
        let mut messages = Vec::new();
        if let Err(errors) = dto.validate() {
            messages.extend(validation_messages(&errors));
        }
        for ligne in &dto.lignes_ventes {
            if let Err(errors) = ligne.validate() {
                messages.extend(validation_messages(&errors));
            }
        }
        if !messages.is_empty() {
            tracing::error!("Vente inválida: {:?}", messages);
            return Err(AppError::invalid_entity(
                ErrorCode::VentesNotValid,
                "La vente n'est pas valide",
                messages,
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

    async fn resolve_articles(&self, dto: &VenteRequestDto) -> Result<(), AppError> {
        for ligne in &dto.lignes_ventes {
            let article_id = ligne.article_id.unwrap();
            self.article_repo
                .find_by_id(article_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(
                        ErrorCode::ArticleNotFound,
                        format!("Aucun article avec l'ID {article_id} n'a été trouvé"),
                    )
                })?;
        }
        Ok(())
    }

    async fn to_response(&self, vente: Vente) -> Result<VenteResponseDto, AppError> {
        let lignes = self.vente_repo.find_lignes_by_vente_id(vente.id).await?;
        let mut dtos = Vec::with_capacity(lignes.len());
        for ligne in lignes {
            let article = self.article_repo.find_by_id(ligne.article_id).await?;
            dtos.push(LigneVenteResponseDto::from_entity(ligne, article));
        }
        Ok(VenteResponseDto::from_entity(vente, dtos))
    }

    pub async fn save(&self, dto: VenteRequestDto) -> Result<VenteResponseDto, AppError> {
        self.check_valid(&dto)?;
        self.resolve_entreprise(dto.entreprise_id).await?;
        // Todas as referências são resolvidas antes de abrir a transação.
        self.resolve_articles(&dto).await?;

        let mut tx = self.pool.begin().await?;
        let vente = self.vente_repo.create(&mut *tx, &dto).await?;
        for ligne in &dto.lignes_ventes {
            self.vente_repo.create_ligne(&mut *tx, vente.id, ligne).await?;
        }
        tx.commit().await?;

        self.to_response(vente).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<VenteResponseDto, AppError> {
        let vente = self.vente_repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::error!("Nenhuma vente com o ID {id}");
            AppError::not_found(
                ErrorCode::VentesNotFound,
                format!("Aucune vente avec l'ID {id} n'a été trouvée dans la BDD"),
            )
        })?;
        self.to_response(vente).await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<VenteResponseDto, AppError> {
        if code.trim().is_empty() {
            tracing::error!("CODE da vente vazio na busca");
            return Err(AppError::not_found(
                ErrorCode::VentesNotFound,
                "Aucune vente avec le CODE  n'a été trouvée dans la BDD".to_string(),
            ));
        }
        let vente = self.vente_repo.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::VentesNotFound,
                format!("Aucune vente avec le CODE {code} n'a été trouvée dans la BDD"),
            )
        })?;
        self.to_response(vente).await
    }

    pub async fn find_all(&self) -> Result<Vec<VenteResponseDto>, AppError> {
        let ventes = self.vente_repo.find_all().await?;
        let mut dtos = Vec::with_capacity(ventes.len());
        for vente in ventes {
            dtos.push(self.to_response(vente).await?);
        }
        Ok(dtos)
    }

    // As lignes são removidas antes do cabeçalho, na mesma transação.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        self.vente_repo
            .delete_all_lignes_by_vente_id(&mut *tx, id)
            .await?;
        self.vente_repo.delete_by_id(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(())
    }

    // O update substitui apenas o cabeçalho; as lignes existentes ficam.
    pub async fn update(&self, id: i32, dto: VenteRequestDto) -> Result<VenteResponseDto, AppError> {
        self.check_valid(&dto)?;
        let existing = self.vente_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::VentesNotFound,
                format!("Aucune vente avec l'ID {id} n'a été trouvée dans la BDD"),
            )
        })?;
        self.resolve_entreprise(dto.entreprise_id).await?;
        let saved = self.vente_repo.update(existing.id, &dto).await?;
        self.to_response(saved).await
    }
}
