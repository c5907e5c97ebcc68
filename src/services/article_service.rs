// src/services/article_service.rs

use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::{ArticleRepository, CategorieRepository, EntrepriseRepository},
    models::{
        article::{ArticleRequestDto, ArticleResponseDto},
        categorie::Categorie,
    },
};

// Pipeline uniforme: valida -> resolve as referências -> persiste -> projeta.
#[derive(Clone)]
pub struct ArticleService {
    article_repo: ArticleRepository,
    categorie_repo: CategorieRepository,
    entreprise_repo: EntrepriseRepository,
}

impl ArticleService {
    pub fn new(
        article_repo: ArticleRepository,
        categorie_repo: CategorieRepository,
        entreprise_repo: EntrepriseRepository,
    ) -> Self {
        Self {
            article_repo,
            categorie_repo,
            entreprise_repo,
        }
    }

    fn check_valid(&self, dto: &ArticleRequestDto) -> Result<(), AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Article inválido: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::ArticleNotValid,
                "L'article n'est pas valide",
                validation_messages(&errors),
            ));
        }
        Ok(())
    }

    async fn resolve_categorie(&self, categorie_id: i32) -> Result<Categorie, AppError> {
        self.categorie_repo
            .find_by_id(categorie_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::CategorieNotFound,
                    format!(
                        "Aucune catégorie avec l'ID {categorie_id} n'a été trouvée dans la BDD"
                    ),
                )
            })
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

    pub async fn save(&self, dto: ArticleRequestDto) -> Result<ArticleResponseDto, AppError> {
        self.check_valid(&dto)?;
        // Pós-validação os campos obrigatórios estão garantidamente presentes.
        let categorie = self.resolve_categorie(dto.categorie_id.unwrap()).await?;
        self.resolve_entreprise(dto.entreprise_id.unwrap()).await?;
        let saved = self.article_repo.create(&dto).await?;
        Ok(ArticleResponseDto::from_entity(saved, Some(categorie)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<ArticleResponseDto, AppError> {
        let article = self.article_repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::error!("Nenhum article com o ID {id}");
            AppError::not_found(
                ErrorCode::ArticleNotFound,
                format!("Aucun article avec l'ID {id} n'a été trouvé dans la BDD"),
            )
        })?;
        let categorie = self.categorie_repo.find_by_id(article.categorie_id).await?;
        Ok(ArticleResponseDto::from_entity(article, categorie))
    }

    pub async fn find_by_code_article(
        &self,
        code_article: &str,
    ) -> Result<ArticleResponseDto, AppError> {
        // Entrada em branco falha imediatamente, como qualquer code desconhecido.
        if code_article.trim().is_empty() {
            tracing::error!("CODE do article vazio na busca");
            return Err(AppError::not_found(
                ErrorCode::ArticleNotFound,
                "Aucun article avec le CODE  n'a été trouvé dans la BDD".to_string(),
            ));
        }
        let article = self
            .article_repo
            .find_by_code_article(code_article)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::ArticleNotFound,
                    format!("Aucun article avec le CODE {code_article} n'a été trouvé dans la BDD"),
                )
            })?;
        let categorie = self.categorie_repo.find_by_id(article.categorie_id).await?;
        Ok(ArticleResponseDto::from_entity(article, categorie))
    }

    pub async fn find_all(&self) -> Result<Vec<ArticleResponseDto>, AppError> {
        let articles = self.article_repo.find_all().await?;
        let mut dtos = Vec::with_capacity(articles.len());
        for article in articles {
            let categorie = self.categorie_repo.find_by_id(article.categorie_id).await?;
            dtos.push(ArticleResponseDto::from_entity(article, categorie));
        }
        Ok(dtos)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.article_repo.delete_by_id(id).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: ArticleRequestDto,
    ) -> Result<ArticleResponseDto, AppError> {
        self.check_valid(&dto)?;
        let existing = self.article_repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                ErrorCode::ArticleNotFound,
                format!("Aucun article avec l'ID {id} n'a été trouvé dans la BDD"),
            )
        })?;
        let categorie = self.resolve_categorie(dto.categorie_id.unwrap()).await?;
        self.resolve_entreprise(dto.entreprise_id.unwrap()).await?;
        // Substituição completa dos campos mutáveis, mantendo o id existente.
        let saved = self.article_repo.update(existing.id, &dto).await?;
        Ok(ArticleResponseDto::from_entity(saved, Some(categorie)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{categorie::CategorieRequestDto, entreprise::EntrepriseRequestDto};
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

    fn service(pool: sqlx::PgPool) -> ArticleService {
        ArticleService::new(
            ArticleRepository::new(pool.clone()),
            CategorieRepository::new(pool.clone()),
            EntrepriseRepository::new(pool),
        )
    }

    // Cria a entreprise + categorie de que um article precisa.
    async fn contexto(pool: &sqlx::PgPool, marqueur: &str) -> (i32, i32) {
        let entreprise = EntrepriseRepository::new(pool.clone())
            .create(&EntrepriseRequestDto {
                nom: Some(format!("Entreprise {marqueur}")),
                ..Default::default()
            })
            .await
            .unwrap();
        let categorie = CategorieRepository::new(pool.clone())
            .create(&CategorieRequestDto {
                code: Some(format!("CAT-{marqueur}")),
                designation: Some("Catégorie de test".into()),
                entreprise_id: Some(entreprise.id),
            })
            .await
            .unwrap();
        (entreprise.id, categorie.id)
    }

    fn marqueur() -> String {
        format!("{}", chrono::Utc::now().timestamp_micros())
    }

    fn dto(code: &str, categorie_id: i32, entreprise_id: i32) -> ArticleRequestDto {
        ArticleRequestDto {
            code_article: Some(code.into()),
            designation: Some("Clavier mécanique".into()),
            prix_unitaire_ht: Some(Decimal::new(10000, 2)),
            taux_tva: Some(Decimal::new(20, 0)),
            prix_unitaire_ttc: Some(Decimal::new(12000, 2)),
            photo: None,
            categorie_id: Some(categorie_id),
            entreprise_id: Some(entreprise_id),
        }
    }

    #[tokio::test]
    #[ignore = "requer DATABASE_URL apontando para um Postgres"]
    async fn save_e_find_by_code_article() {
        let pool = pool_de_teste().await;
        let m = marqueur();
        let (entreprise_id, categorie_id) = contexto(&pool, &m).await;
        let service = service(pool);

        let code = format!("ART-{m}");
        let saved = service
            .save(dto(&code, categorie_id, entreprise_id))
            .await
            .unwrap();
        assert_eq!(saved.code_article, code);

        let found = service.find_by_code_article(&code).await.unwrap();
        assert_eq!(found.id, saved.id);

        let err = service.find_by_code_article("unknown").await.unwrap_err();
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
    async fn update_preserva_o_id_e_find_by_id_devolve_os_novos_campos() {
        let pool = pool_de_teste().await;
        let m = marqueur();
        let (entreprise_id, categorie_id) = contexto(&pool, &m).await;
        let service = service(pool);

        let saved = service
            .save(dto(&format!("ART-{m}"), categorie_id, entreprise_id))
            .await
            .unwrap();

        let mut updated_dto = dto(&format!("ART-{m}-v2"), categorie_id, entreprise_id);
        updated_dto.designation = Some("Clavier sans fil".into());
        let updated = service.update(saved.id, updated_dto).await.unwrap();
        assert_eq!(updated.id, saved.id);

        let found = service.find_by_id(saved.id).await.unwrap();
        assert_eq!(found.designation, "Clavier sans fil");
        assert_eq!(found.code_article, format!("ART-{m}-v2"));
    }

    #[tokio::test]
    #[ignore = "requer DATABASE_URL apontando para um Postgres"]
    async fn delete_seguido_de_find_by_id_da_entity_not_found() {
        let pool = pool_de_teste().await;
        let m = marqueur();
        let (entreprise_id, categorie_id) = contexto(&pool, &m).await;
        let service = service(pool);

        let saved = service
            .save(dto(&format!("ART-{m}"), categorie_id, entreprise_id))
            .await
            .unwrap();
        service.delete(saved.id).await.unwrap();

        let err = service.find_by_id(saved.id).await.unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound { .. }));

        // Apagar de novo não é um erro.
        service.delete(saved.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requer DATABASE_URL apontando para um Postgres"]
    async fn save_com_referencias_desconhecidas_nao_persiste() {
        let pool = pool_de_teste().await;
        let m = marqueur();
        let (entreprise_id, _) = contexto(&pool, &m).await;
        let service = service(pool);

        let code = format!("ART-{m}-orphelin");
        let err = service
            .save(dto(&code, 999_999_999, entreprise_id))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::EntityNotFound {
                code: ErrorCode::CategorieNotFound,
                ..
            }
        ));

        let err = service.find_by_code_article(&code).await.unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requer DATABASE_URL apontando para um Postgres"]
    async fn save_invalido_devolve_as_mensagens_do_validador() {
        let pool = pool_de_teste().await;
        let service = service(pool);

        let err = service.save(ArticleRequestDto::default()).await.unwrap_err();
        match err {
            AppError::InvalidEntity { code, errors, .. } => {
                assert_eq!(code, ErrorCode::ArticleNotValid);
                assert!(
                    errors.contains(&"Veillez renseigner le code de l'article".to_string())
                );
            }
            other => panic!("esperava InvalidEntity, veio {other:?}"),
        }
    }
}
