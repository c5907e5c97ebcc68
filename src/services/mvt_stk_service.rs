// src/services/mvt_stk_service.rs

use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::{ArticleRepository, MvtStkRepository},
    models::{
        article::Article,
        mvt_stk::{MvtStkRequestDto, MvtStkResponseDto},
    },
};

// Um único passo a mais em relação ao pipeline genérico: o article
// referenciado precisa existir antes de gravar o movimento. Nenhum saldo é
// calculado aqui.
#[derive(Clone)]
pub struct MvtStkService {
    mvt_stk_repo: MvtStkRepository,
    article_repo: ArticleRepository,
}

impl MvtStkService {
    pub fn new(mvt_stk_repo: MvtStkRepository, article_repo: ArticleRepository) -> Self {
        Self {
            mvt_stk_repo,
            article_repo,
        }
    }

    fn check_valid(&self, dto: &MvtStkRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("MvtStk inválido: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::MvtStkNotValid,
                "Le mouvement de stock n'est pas valide",
                validation_messages(&errors),
            ));
        }
        Ok(())
    }

    async fn resolve_article(&self, article_id: i32) -> Result<Article, AppError> {
        self.article_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::ArticleNotFound,
                    format!("Aucun article avec l'ID {article_id} n'a été trouvé"),
                )
            })
    }

    pub async fn save(&self, dto: MvtStkRequestDto) -> Result<MvtStkResponseDto, AppError> {
        self.check_valid(&dto)?;
        let article = self.resolve_article(dto.article_id.unwrap()).await?;
        let saved = self.mvt_stk_repo.create(&dto).await?;
        Ok(MvtStkResponseDto::from_entity(saved, Some(article)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<MvtStkResponseDto, AppError> {
        let mvt_stk = self.mvt_stk_repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::error!("Nenhum mouvement de stock com o ID {id}");
            AppError::not_found(
                ErrorCode::MvtStkNotFound,
                format!("Aucun mouvement de stock avec l'ID {id} n'a été trouvé dans la BDD"),
            )
        })?;
        let article = self.article_repo.find_by_id(mvt_stk.article_id).await?;
        Ok(MvtStkResponseDto::from_entity(mvt_stk, article))
    }

    pub async fn find_all(&self) -> Result<Vec<MvtStkResponseDto>, AppError> {
        let mvts = self.mvt_stk_repo.find_all().await?;
        let mut dtos = Vec::with_capacity(mvts.len());
        for mvt_stk in mvts {
            let article = self.article_repo.find_by_id(mvt_stk.article_id).await?;
            dtos.push(MvtStkResponseDto::from_entity(mvt_stk, article));
        }
        Ok(dtos)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.mvt_stk_repo.delete_by_id(id).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: MvtStkRequestDto,
    ) -> Result<MvtStkResponseDto, AppError> {
        self.check_valid(&dto)?;
        let existing = self.mvt_stk_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::MvtStkNotFound,
                format!("Aucun mouvement de stock avec l'ID {id} n'a été trouvé dans la BDD"),
            )
        })?;
        let article = self.resolve_article(dto.article_id.unwrap()).await?;
        let saved = self.mvt_stk_repo.update(existing.id, &dto).await?;
        Ok(MvtStkResponseDto::from_entity(saved, Some(article)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{CategorieRepository, EntrepriseRepository};
    use crate::models::mvt_stk::TypeMvtStk;
    use crate::models::{
        article::ArticleRequestDto, categorie::CategorieRequestDto,
        entreprise::EntrepriseRequestDto,
    };
    use rust_decimal::Decimal;

    async fn pool_de_teste() -> sqlx::PgPool {
        let url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL deve apontar para um Postgres de teste");
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        pool
    }

    async fn article_de_teste(pool: &sqlx::PgPool) -> i32 {
        let m = chrono::Utc::now().timestamp_micros();
        let entreprise = EntrepriseRepository::new(pool.clone())
            .create(&EntrepriseRequestDto {
                nom: Some(format!("Entreprise {m}")),
                ..Default::default()
            })
            .await
            .unwrap();
        let categorie = CategorieRepository::new(pool.clone())
            .create(&CategorieRequestDto {
                code: Some(format!("CAT-{m}")),
                designation: None,
                entreprise_id: Some(entreprise.id),
            })
            .await
            .unwrap();
        let article = ArticleRepository::new(pool.clone())
            .create(&ArticleRequestDto {
                code_article: Some(format!("ART-{m}")),
                designation: Some("Souris".into()),
                prix_unitaire_ht: Some(Decimal::new(500, 2)),
                taux_tva: Some(Decimal::new(20, 0)),
                prix_unitaire_ttc: Some(Decimal::new(600, 2)),
                photo: None,
                categorie_id: Some(categorie.id),
                entreprise_id: Some(entreprise.id),
            })
            .await
            .unwrap();
        article.id
    }

    fn dto(article_id: i32) -> MvtStkRequestDto {
        MvtStkRequestDto {
            date_mvt: Some(chrono::Utc::now()),
            quantite: Some(Decimal::new(10, 0)),
            type_mvt: Some(TypeMvtStk::Entree),
            article_id: Some(article_id),
        }
    }

    #[tokio::test]
    #[ignore = "requer DATABASE_URL apontando para um Postgres"]
    async fn save_com_article_desconhecido_da_article_not_found() {
        let pool = pool_de_teste().await;
        let service = MvtStkService::new(
            MvtStkRepository::new(pool.clone()),
            ArticleRepository::new(pool),
        );

        let err = service.save(dto(999_999_999)).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::EntityNotFound {
                code: ErrorCode::ArticleNotFound,
                ..
            }
        ));
    }

    #[tokio::test]
    #[ignore = "requer DATABASE_URL apontando para um Postgres"]
    async fn save_grava_o_movimento_e_embute_o_article() {
        let pool = pool_de_teste().await;
        let article_id = article_de_teste(&pool).await;
        let service = MvtStkService::new(
            MvtStkRepository::new(pool.clone()),
            ArticleRepository::new(pool),
        );

        let saved = service.save(dto(article_id)).await.unwrap();
        assert_eq!(saved.type_mvt, TypeMvtStk::Entree);
        assert_eq!(saved.article.as_ref().map(|a| a.id), Some(article_id));

        let found = service.find_by_id(saved.id).await.unwrap();
        assert_eq!(found.quantite, Decimal::new(10, 0));
    }
}
