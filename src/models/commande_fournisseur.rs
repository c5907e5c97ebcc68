// src/models/commande_fournisseur.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::article::{Article, ArticleResponseDto};
use crate::models::fournisseur::{Fournisseur, FournisseurResponseDto};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommandeFournisseur {
    pub id: i32,
    pub code: String,
    pub date_commande: DateTime<Utc>,
    pub fournisseur_id: i32,
    pub entreprise_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LigneCommandeFournisseur {
    pub id: i32,
    pub commande_fournisseur_id: i32,
    pub article_id: i32,
    pub quantite: Decimal,
    pub prix_unitaire: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommandeFournisseurRequestDto {
    #[validate(
        required(message = "Veillez renseigner le code de la commande fournisseur"),
        length(min = 1, message = "Veillez renseigner le code de la commande fournisseur")
    )]
    pub code: Option<String>,

    #[validate(required(message = "Veillez renseigner la date de la commande fournisseur"))]
    pub date_commande: Option<DateTime<Utc>>,

    #[validate(required(message = "Veillez renseigner le fournisseur de la commande"))]
    pub fournisseur_id: Option<i32>,

    #[validate(required(
        message = "Veillez renseigner l'entreprise de la commande fournisseur"
    ))]
    pub entreprise_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LigneCommandeFournisseurRequestDto {
    #[validate(required(
        message = "Veillez renseigner l'identifiant de l'article de la ligne de commande fournisseur"
    ))]
    pub article_id: Option<i32>,

    #[validate(required(
        message = "Veillez renseigner la quantité de la ligne de commande fournisseur"
    ))]
    pub quantite: Option<Decimal>,

    pub prix_unitaire: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LigneCommandeFournisseurResponseDto {
    pub id: i32,
    pub commande_fournisseur_id: i32,
    pub article: Option<ArticleResponseDto>,
    pub quantite: Decimal,
    pub prix_unitaire: Option<Decimal>,
}

impl LigneCommandeFournisseurResponseDto {
    pub fn from_entity(ligne: LigneCommandeFournisseur, article: Option<Article>) -> Self {
        Self {
            id: ligne.id,
            commande_fournisseur_id: ligne.commande_fournisseur_id,
            article: article.map(|a| ArticleResponseDto::from_entity(a, None)),
            quantite: ligne.quantite,
            prix_unitaire: ligne.prix_unitaire,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandeFournisseurResponseDto {
    pub id: i32,
    pub code: String,
    pub date_commande: DateTime<Utc>,
    pub fournisseur: Option<FournisseurResponseDto>,
    pub entreprise_id: i32,
    pub lignes: Vec<LigneCommandeFournisseurResponseDto>,
}

impl CommandeFournisseurResponseDto {
    pub fn from_entity(
        commande: CommandeFournisseur,
        fournisseur: Option<Fournisseur>,
        lignes: Vec<LigneCommandeFournisseurResponseDto>,
    ) -> Self {
        Self {
            id: commande.id,
            code: commande.code,
            date_commande: commande.date_commande,
            fournisseur: fournisseur.map(FournisseurResponseDto::from_entity),
            entreprise_id: commande.entreprise_id,
            lignes,
        }
    }
}
