// src/models/categorie.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Categorie {
    pub id: i32,
    pub code: String,
    pub designation: Option<String>,
    pub entreprise_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategorieRequestDto {
    #[validate(
        required(message = "Veillez renseigner le code de la catégorie"),
        length(min = 1, message = "Veillez renseigner le code de la catégorie")
    )]
    pub code: Option<String>,
    pub designation: Option<String>,
    pub entreprise_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorieResponseDto {
    pub id: i32,
    pub code: String,
    pub designation: Option<String>,
    pub entreprise_id: Option<i32>,
}

impl CategorieResponseDto {
    pub fn from_entity(categorie: Categorie) -> Self {
        Self {
            id: categorie.id,
            code: categorie.code,
            designation: categorie.designation,
            entreprise_id: categorie.entreprise_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::validation_messages;
    use validator::Validate;

    #[test]
    fn code_ausente_gera_mensagem_do_validador() {
        let dto = CategorieRequestDto {
            designation: Some("Informatique".into()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            vec!["Veillez renseigner le code de la catégorie".to_string()]
        );
    }
}
