// src/models/mvt_stk.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::article::{Article, ArticleResponseDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "type_mvt_stk", rename_all = "SCREAMING_SNAKE_CASE")] // Banco
#[serde(rename_all = "SCREAMING_SNAKE_CASE")] // JSON
pub enum TypeMvtStk {
    Entree,
    Sortie,
    CorrectionPos,
    CorrectionNeg,
}

// --- MVT STK (livro-razão) ---
// Registro append-only: nenhum saldo corrente é mantido a partir daqui.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MvtStk {
    pub id: i32,
    pub date_mvt: DateTime<Utc>,
    pub quantite: Decimal,
    pub type_mvt: TypeMvtStk,
    pub article_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MvtStkRequestDto {
    #[validate(required(message = "Veillez renseigner la date du mouvement"))]
    pub date_mvt: Option<DateTime<Utc>>,

    #[validate(required(message = "Veillez renseigner la quantité du mouvement"))]
    pub quantite: Option<Decimal>,

    #[validate(required(message = "Veillez renseigner le type du mouvement"))]
    pub type_mvt: Option<TypeMvtStk>,

    #[validate(required(message = "Veillez renseigner l'article du mouvement"))]
    pub article_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MvtStkResponseDto {
    pub id: i32,
    pub date_mvt: DateTime<Utc>,
    pub quantite: Decimal,
    pub type_mvt: TypeMvtStk,
    pub article: Option<ArticleResponseDto>,
}

impl MvtStkResponseDto {
    pub fn from_entity(mvt_stk: MvtStk, article: Option<Article>) -> Self {
        Self {
            id: mvt_stk.id,
            date_mvt: mvt_stk.date_mvt,
            quantite: mvt_stk.quantite,
            type_mvt: mvt_stk.type_mvt,
            article: article.map(|a| ArticleResponseDto::from_entity(a, None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::validation_messages;
    use validator::Validate;

    #[test]
    fn type_mvt_serializa_em_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&TypeMvtStk::CorrectionPos).unwrap(),
            "\"CORRECTION_POS\""
        );
        let t: TypeMvtStk = serde_json::from_str("\"SORTIE\"").unwrap();
        assert_eq!(t, TypeMvtStk::Sortie);
    }

    #[test]
    fn dto_vazio_lista_os_quatro_campos_obrigatorios() {
        let errors = MvtStkRequestDto::default().validate().unwrap_err();
        let messages = validation_messages(&errors);
        assert_eq!(messages.len(), 4);
        assert!(messages.contains(&"Veillez renseigner l'article du mouvement".to_string()));
    }

    #[test]
    fn payload_json_completo_deserializa() {
        let dto: MvtStkRequestDto = serde_json::from_str(
            r#"{
                "dateMvt": "2026-01-15T10:00:00Z",
                "quantite": 5.0,
                "typeMvt": "ENTREE",
                "articleId": 42
            }"#,
        )
        .unwrap();
        assert_eq!(dto.type_mvt, Some(TypeMvtStk::Entree));
        assert_eq!(dto.article_id, Some(42));
        assert!(dto.validate().is_ok());
    }
}
