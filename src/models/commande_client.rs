// src/models/commande_client.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::article::{Article, ArticleResponseDto};
use crate::models::client::{Client, ClientResponseDto};

// Cabeçalho da commande; as lignes são a coleção "possuída" gerida pelas
// operações de ligne do serviço.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommandeClient {
    pub id: i32,
    pub code: String,
    pub date_commande: DateTime<Utc>,
    pub client_id: i32,
    pub entreprise_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LigneCommandeClient {
    pub id: i32,
    pub commande_client_id: i32,
    pub article_id: i32,
    pub quantite: Decimal,
    pub prix_unitaire: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommandeClientRequestDto {
    #[validate(
        required(message = "Veillez renseigner le code de la commande client"),
        length(min = 1, message = "Veillez renseigner le code de la commande client")
    )]
    pub code: Option<String>,

    #[validate(required(message = "Veillez renseigner la date de la commande client"))]
    pub date_commande: Option<DateTime<Utc>>,

    #[validate(required(message = "Veillez renseigner le client de la commande"))]
    pub client_id: Option<i32>,

    #[validate(required(message = "Veillez renseigner l'entreprise de la commande client"))]
    pub entreprise_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LigneCommandeClientRequestDto {
    #[validate(required(
        message = "Veillez renseigner l'identifiant de l'article de la ligne de commande client"
    ))]
    pub article_id: Option<i32>,

    #[validate(required(
        message = "Veillez renseigner la quantité de la ligne de commande client"
    ))]
    pub quantite: Option<Decimal>,

    pub prix_unitaire: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LigneCommandeClientResponseDto {
    pub id: i32,
    pub commande_client_id: i32,
    pub article: Option<ArticleResponseDto>,
    pub quantite: Decimal,
    pub prix_unitaire: Option<Decimal>,
}

impl LigneCommandeClientResponseDto {
    pub fn from_entity(ligne: LigneCommandeClient, article: Option<Article>) -> Self {
        Self {
            id: ligne.id,
            commande_client_id: ligne.commande_client_id,
            article: article.map(|a| ArticleResponseDto::from_entity(a, None)),
            quantite: ligne.quantite,
            prix_unitaire: ligne.prix_unitaire,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandeClientResponseDto {
    pub id: i32,
    pub code: String,
    pub date_commande: DateTime<Utc>,
    pub client: Option<ClientResponseDto>,
    pub entreprise_id: i32,
    pub lignes: Vec<LigneCommandeClientResponseDto>,
}

impl CommandeClientResponseDto {
    pub fn from_entity(
        commande: CommandeClient,
        client: Option<Client>,
        lignes: Vec<LigneCommandeClientResponseDto>,
    ) -> Self {
        Self {
            id: commande.id,
            code: commande.code,
            date_commande: commande.date_commande,
            client: client.map(ClientResponseDto::from_entity),
            entreprise_id: commande.entreprise_id,
            lignes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::validation_messages;
    use validator::Validate;

    #[test]
    fn ligne_sans_article_ni_quantite_lista_as_duas_mensagens() {
        let errors = LigneCommandeClientRequestDto::default()
            .validate()
            .unwrap_err();
        let messages = validation_messages(&errors);
        assert_eq!(
            messages,
            vec![
                "Veillez renseigner l'identifiant de l'article de la ligne de commande client"
                    .to_string(),
                "Veillez renseigner la quantité de la ligne de commande client".to_string(),
            ]
        );
    }

    #[test]
    fn commande_sans_code_gera_mensagem() {
        let dto = CommandeClientRequestDto {
            date_commande: Some(Utc::now()),
            client_id: Some(1),
            entreprise_id: Some(1),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            vec!["Veillez renseigner le code de la commande client".to_string()]
        );
    }
}
