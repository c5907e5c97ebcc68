// src/models/fournisseur.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Fournisseur {
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
pub struct FournisseurRequestDto {
    #[validate(
        required(message = "Veillez renseigner le nom du fournisseur"),
        length(min = 1, message = "Veillez renseigner le nom du fournisseur")
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

    #[validate(required(message = "Veillez renseigner l'entreprise du fournisseur"))]
    pub entreprise_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FournisseurResponseDto {
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

impl FournisseurResponseDto {
    pub fn from_entity(fournisseur: Fournisseur) -> Self {
        Self {
            id: fournisseur.id,
            nom: fournisseur.nom,
            prenom: fournisseur.prenom,
            adresse1: fournisseur.adresse1,
            adresse2: fournisseur.adresse2,
            ville: fournisseur.ville,
            code_postal: fournisseur.code_postal,
            pays: fournisseur.pays,
            photo: fournisseur.photo,
            email: fournisseur.email,
            num_tel: fournisseur.num_tel,
            entreprise_id: fournisseur.entreprise_id,
        }
    }
}
