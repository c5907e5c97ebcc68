// src/models/entreprise.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// A entreprise é o escopo "tenant" raiz: quase todas as outras entidades
// referenciam uma linha desta tabela.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Entreprise {
    pub id: i32,
    pub nom: String,
    pub description: Option<String>,
    pub code_fiscal: Option<String>,
    pub photo: Option<String>,
    pub email: Option<String>,
    pub num_tel: Option<String>,
    pub site_web: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntrepriseRequestDto {
    #[validate(
        required(message = "Veillez renseigner le nom de l'entreprise"),
        length(min = 1, message = "Veillez renseigner le nom de l'entreprise")
    )]
    pub nom: Option<String>,
    pub description: Option<String>,
    pub code_fiscal: Option<String>,
    pub photo: Option<String>,
    pub email: Option<String>,
    pub num_tel: Option<String>,
    pub site_web: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrepriseResponseDto {
    pub id: i32,
    pub nom: String,
    pub description: Option<String>,
    pub code_fiscal: Option<String>,
    pub photo: Option<String>,
    pub email: Option<String>,
    pub num_tel: Option<String>,
    pub site_web: Option<String>,
}

impl EntrepriseResponseDto {
    pub fn from_entity(entreprise: Entreprise) -> Self {
        Self {
            id: entreprise.id,
            nom: entreprise.nom,
            description: entreprise.description,
            code_fiscal: entreprise.code_fiscal,
            photo: entreprise.photo,
            email: entreprise.email,
            num_tel: entreprise.num_tel,
            site_web: entreprise.site_web,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::validation_messages;
    use validator::Validate;

    #[test]
    fn nom_ausente_gera_mensagem_do_validador() {
        let dto = EntrepriseRequestDto::default();
        let errors = dto.validate().unwrap_err();
        assert!(
            validation_messages(&errors)
                .contains(&"Veillez renseigner le nom de l'entreprise".to_string())
        );
    }

    #[test]
    fn payload_json_em_camel_case() {
        let dto: EntrepriseRequestDto = serde_json::from_str(
            r#"{"nom": "Team48", "codeFiscal": "FR-123", "numTel": "0600000000"}"#,
        )
        .unwrap();
        assert_eq!(dto.nom.as_deref(), Some("Team48"));
        assert_eq!(dto.code_fiscal.as_deref(), Some("FR-123"));
        assert!(dto.validate().is_ok());
    }
}
