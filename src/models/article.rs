// src/models/article.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::categorie::{Categorie, CategorieResponseDto};

// O "catálogo" de produtos vendáveis/estocáveis.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i32,
    pub code_article: String,
    pub designation: String,
    pub prix_unitaire_ht: Decimal,
    pub taux_tva: Decimal,
    pub prix_unitaire_ttc: Decimal,
    pub photo: Option<String>,
    pub categorie_id: i32,
    pub entreprise_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Campos todos opcionais: a presença é verificada pelo validador, que devolve
// a lista de mensagens carregada pelo erro InvalidEntity.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRequestDto {
    #[validate(
        required(message = "Veillez renseigner le code de l'article"),
        length(min = 1, message = "Veillez renseigner le code de l'article")
    )]
    pub code_article: Option<String>,

    #[validate(
        required(message = "Veillez renseigner la désignation de l'article"),
        length(min = 1, message = "Veillez renseigner la désignation de l'article")
    )]
    pub designation: Option<String>,

    #[validate(required(message = "Veillez renseigner le prix unitaire HT de l'article"))]
    pub prix_unitaire_ht: Option<Decimal>,

    #[validate(required(message = "Veillez renseigner le taux TVA de l'article"))]
    pub taux_tva: Option<Decimal>,

    #[validate(required(message = "Veillez renseigner le prix unitaire TTC de l'article"))]
    pub prix_unitaire_ttc: Option<Decimal>,

    pub photo: Option<String>,

    #[validate(required(message = "Veillez sélectionner une catégorie"))]
    pub categorie_id: Option<i32>,

    #[validate(required(message = "Veillez renseigner l'entreprise de l'article"))]
    pub entreprise_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponseDto {
    pub id: i32,
    pub code_article: String,
    pub designation: String,
    pub prix_unitaire_ht: Decimal,
    pub taux_tva: Decimal,
    pub prix_unitaire_ttc: Decimal,
    pub photo: Option<String>,
    pub categorie: Option<CategorieResponseDto>,
    pub entreprise_id: i32,
}

impl ArticleResponseDto {
    pub fn from_entity(article: Article, categorie: Option<Categorie>) -> Self {
        Self {
            id: article.id,
            code_article: article.code_article,
            designation: article.designation,
            prix_unitaire_ht: article.prix_unitaire_ht,
            taux_tva: article.taux_tva,
            prix_unitaire_ttc: article.prix_unitaire_ttc,
            photo: article.photo,
            categorie: categorie.map(CategorieResponseDto::from_entity),
            entreprise_id: article.entreprise_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::validation_messages;
    use validator::Validate;

    fn dto_completo() -> ArticleRequestDto {
        ArticleRequestDto {
            code_article: Some("ART-1".into()),
            designation: Some("Clavier".into()),
            prix_unitaire_ht: Some(Decimal::new(10000, 2)),
            taux_tva: Some(Decimal::new(20, 0)),
            prix_unitaire_ttc: Some(Decimal::new(12000, 2)),
            photo: None,
            categorie_id: Some(1),
            entreprise_id: Some(1),
        }
    }

    #[test]
    fn dto_completo_passa_na_validacao() {
        assert!(dto_completo().validate().is_ok());
    }

    #[test]
    fn code_ausente_gera_a_mensagem_correspondente() {
        let dto = ArticleRequestDto {
            code_article: None,
            ..dto_completo()
        };
        let errors = dto.validate().unwrap_err();
        assert!(
            validation_messages(&errors)
                .contains(&"Veillez renseigner le code de l'article".to_string())
        );
    }

    #[test]
    fn dto_vazio_lista_todos_os_campos_obrigatorios() {
        let errors = ArticleRequestDto::default().validate().unwrap_err();
        let messages = validation_messages(&errors);
        assert_eq!(messages.len(), 7);
        assert!(messages.contains(&"Veillez sélectionner une catégorie".to_string()));
        assert!(messages.contains(&"Veillez renseigner l'entreprise de l'article".to_string()));
    }

    #[test]
    fn payload_json_em_camel_case() {
        let dto: ArticleRequestDto = serde_json::from_str(
            r#"{
                "codeArticle": "ART-1",
                "designation": "Clavier",
                "prixUnitaireHt": 100.0,
                "tauxTva": 20.0,
                "prixUnitaireTtc": 120.0,
                "categorieId": 1,
                "entrepriseId": 1
            }"#,
        )
        .unwrap();
        assert_eq!(dto.code_article.as_deref(), Some("ART-1"));
        assert!(dto.validate().is_ok());
    }
}
