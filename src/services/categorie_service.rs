// src/services/categorie_service.rs

use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::{CategorieRepository, EntrepriseRepository},
    models::categorie::{CategorieRequestDto, CategorieResponseDto},
};

#[derive(Clone)]
pub struct CategorieService {
    categorie_repo: CategorieRepository,
    entreprise_repo: EntrepriseRepository,
}

impl CategorieService {
    pub fn new(categorie_repo: CategorieRepository, entreprise_repo: EntrepriseRepository) -> Self {
        Self {
            categorie_repo,
            entreprise_repo,
        }
    }

    fn check_valid(&self, dto: &CategorieRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Catégorie inválida: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::CategorieNotValid,
                "La catégorie n'est pas valide",
                validation_messages(&errors),
            ));
        }
        Ok(())
    }

    // A entreprise é a única referência declarada, e é opcional.
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

    pub async fn save(&self, dto: CategorieRequestDto) -> Result<CategorieResponseDto, AppError> {
        self.check_valid(&dto)?;
        self.resolve_entreprise(dto.entreprise_id).await?;
        let saved = self.categorie_repo.create(&dto).await?;
        Ok(CategorieResponseDto::from_entity(saved))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<CategorieResponseDto, AppError> {
        self.categorie_repo
            .find_by_id(id)
            .await?
            .map(CategorieResponseDto::from_entity)
            .ok_or_else(|| {
                tracing::error!("Nenhuma catégorie com o ID {id}");
                AppError::not_found(
                    ErrorCode::CategorieNotFound,
                    format!("Aucune catégorie avec l'ID {id} n'a été trouvée dans la BDD"),
                )
            })
    }

    pub async fn find_by_code(&self, code: &str) -> Result<CategorieResponseDto, AppError> {
        if code.trim().is_empty() {
            tracing::error!("CODE da catégorie vazio na busca");
            return Err(AppError::not_found(
                ErrorCode::CategorieNotFound,
                "Aucune catégorie avec le CODE  n'a été trouvée dans la BDD".to_string(),
            ));
        }
        self.categorie_repo
            .find_by_code(code)
            .await?
            .map(CategorieResponseDto::from_entity)
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::CategorieNotFound,
                    format!("Aucune catégorie avec le CODE {code} n'a été trouvée dans la BDD"),
                )
            })
    }

    pub async fn find_all(&self) -> Result<Vec<CategorieResponseDto>, AppError> {
        let categories = self.categorie_repo.find_all().await?;
        Ok(categories
            .into_iter()
            .map(CategorieResponseDto::from_entity)
            .collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.categorie_repo.delete_by_id(id).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: CategorieRequestDto,
    ) -> Result<CategorieResponseDto, AppError> {
        self.check_valid(&dto)?;
        let existing = self.categorie_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::CategorieNotFound,
                format!("Aucune catégorie avec l'ID {id} n'a été trouvée dans la BDD"),
            )
        })?;
        self.resolve_entreprise(dto.entreprise_id).await?;
        let saved = self.categorie_repo.update(existing.id, &dto).await?;
        Ok(CategorieResponseDto::from_entity(saved))
    }
}
