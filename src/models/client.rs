// src/models/client.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    pub nom: String,
    pub prenom: Option<String>,
    pub adresse1: Option<String>,
    pub adresse2: Option<String>,
    pub ville: Option<String>,
    pub code_postal: Option<String>,
    pub pays: Option<String>,
    pub photo: Option<String>,
    pub email: Option<String>,
    pub num_tel: Option<String>,
    pub entreprise_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequestDto {
    #[validate(
        required(message = "Veillez renseigner le nom du client"),
        length(min = 1, message = "Veillez renseigner le nom du client")
    )]
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub adresse1: Option<String>,
    pub adresse2: Option<String>,
    pub ville: Option<String>,
    pub code_postal: Option<String>,
    pub pays: Option<String>,
    pub photo: Option<String>,
    pub email: Option<String>,
    pub num_tel: Option<String>,

    #[validate(required(message = "Veillez renseigner l'entreprise du client"))]
    pub entreprise_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponseDto {
    pub id: i32,
    pub nom: String,
    pub prenom: Option<String>,
    pub adresse1: Option<String>,
    pub adresse2: Option<String>,
    pub ville: Option<String>,
    pub code_postal: Option<String>,
    pub pays: Option<String>,
    pub photo: Option<String>,
    pub email: Option<String>,
    pub num_tel: Option<String>,
    pub entreprise_id: i32,
}

impl ClientResponseDto {
    pub fn from_entity(client: Client) -> Self {
        Self {
            id: client.id,
            nom: client.nom,
            prenom: client.prenom,
            adresse1: client.adresse1,
            adresse2: client.adresse2,
            ville: client.ville,
            code_postal: client.code_postal,
            pays: client.pays,
            photo: client.photo,
            email: client.email,
            num_tel: client.num_tel,
            entreprise_id: client.entreprise_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::validation_messages;
    use validator::Validate;

    #[test]
    fn nom_e_entreprise_sao_obrigatorios() {
        let errors = ClientRequestDto::default().validate().unwrap_err();
        let messages = validation_messages(&errors);
        assert_eq!(
            messages,
            vec![
                "Veillez renseigner l'entreprise du client".to_string(),
                "Veillez renseigner le nom du client".to_string(),
            ]
        );
    }
}
