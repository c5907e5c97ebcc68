// src/models/vente.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::article::{Article, ArticleResponseDto};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vente {
    pub id: i32,
    pub code: String,
    pub date_vente: DateTime<Utc>,
    pub commentaire: Option<String>,
    pub entreprise_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LigneVente {
    pub id: i32,
    pub vente_id: i32,
    pub article_id: i32,
    pub quantite: Decimal,
    pub prix_unitaire: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// A vente chega com as suas lignes: o save valida e persiste tudo numa
// única transação.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VenteRequestDto {
    #[validate(
        required(message = "Veillez renseigner le code de la vente"),
        length(min = 1, message = "Veillez renseigner le code de la vente")
    )]
    pub code: Option<String>,

    #[validate(required(message = "Veillez renseigner la date de la vente"))]
    pub date_vente: Option<DateTime<Utc>>,

    pub commentaire: Option<String>,
    pub entreprise_id: Option<i32>,

    #[serde(default)]
    pub lignes_ventes: Vec<LigneVenteRequestDto>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LigneVenteRequestDto {
    #[validate(required(
        message = "Veillez renseigner l'identifiant de l'article de la ligne de vente"
    ))]
    pub article_id: Option<i32>,

    #[validate(required(message = "Veillez renseigner la quantité de la ligne de vente"))]
    pub quantite: Option<Decimal>,

    pub prix_unitaire: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LigneVenteResponseDto {
    pub id: i32,
    pub vente_id: i32,
    pub article: Option<ArticleResponseDto>,
    pub quantite: Decimal,
    pub prix_unitaire: Option<Decimal>,
}

impl LigneVenteResponseDto {
    pub fn from_entity(ligne: LigneVente, article: Option<Article>) -> Self {
        Self {
            id: ligne.id,
            vente_id: ligne.vente_id,
            article: article.map(|a| ArticleResponseDto::from_entity(a, None)),
            quantite: ligne.quantite,
            prix_unitaire: ligne.prix_unitaire,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenteResponseDto {
    pub id: i32,
    pub code: String,
    pub date_vente: DateTime<Utc>,
    pub commentaire: Option<String>,
    pub entreprise_id: Option<i32>,
    pub lignes_ventes: Vec<LigneVenteResponseDto>,
}

impl VenteResponseDto {
    pub fn from_entity(vente: Vente, lignes_ventes: Vec<LigneVenteResponseDto>) -> Self {
        Self {
            id: vente.id,
            code: vente.code,
            date_vente: vente.date_vente,
            commentaire: vente.commentaire,
            entreprise_id: vente.entreprise_id,
            lignes_ventes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::validation_messages;
    use validator::Validate;

    #[test]
    fn vente_sans_code_ni_date_lista_as_mensagens() {
        let errors = VenteRequestDto::default().validate().unwrap_err();
        let messages = validation_messages(&errors);
        assert!(messages.contains(&"Veillez renseigner le code de la vente".to_string()));
        assert!(messages.contains(&"Veillez renseigner la date de la vente".to_string()));
    }

    #[test]
    fn lignes_ventes_ausentes_deserializam_como_vazio() {
        let dto: VenteRequestDto = serde_json::from_str(
            r#"{"code": "V-1", "dateVente": "2026-02-01T08:00:00Z"}"#,
        )
        .unwrap();
        assert!(dto.lignes_ventes.is_empty());
        assert!(dto.validate().is_ok());
    }
}
