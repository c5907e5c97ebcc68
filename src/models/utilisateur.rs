// src/models/utilisateur.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---
// 1. Rôles
// ---

// O conjunto fechado de papéis aceitos no registro e na atribuição de rôles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "role_name", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    /// Converte o nome livre enviado pelo chamador; `None` para valores
    /// desconhecidos (o serviço transforma isso num InvalidEntity declarado,
    /// nunca num panic).
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim() {
            "ADMIN" => Some(Role::Admin),
            "MANAGER" => Some(Role::Manager),
            "USER" => Some(Role::User),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::User => "USER",
        }
    }
}

// Entidade de ligação (papel, utilisateur, entreprise); nenhuma unicidade
// composta é imposta.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Roles {
    pub id: i32,
    pub role_name: Role,
    pub utilisateur_id: i32,
    pub entreprise_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RolesRequestDto {
    #[validate(required(message = "Veillez renseigner le nom du rôle"))]
    pub role_name: Option<String>,

    #[validate(required(message = "Veillez renseigner l'utilisateur du rôle"))]
    pub utilisateur_id: Option<i32>,

    pub entreprise_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolesResponseDto {
    pub id: i32,
    pub role_name: Role,
    pub utilisateur_id: i32,
    pub entreprise_id: Option<i32>,
}

impl RolesResponseDto {
    pub fn from_entity(roles: Roles) -> Self {
        Self {
            id: roles.id,
            role_name: roles.role_name,
            utilisateur_id: roles.utilisateur_id,
            entreprise_id: roles.entreprise_id,
        }
    }
}

// ---
// 2. Utilisateur
// ---

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Utilisateur {
    pub id: i32,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: String,
    pub username: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub mot_de_passe: String,

    pub date_de_naissance: Option<NaiveDate>,
    pub adresse1: Option<String>,
    pub adresse2: Option<String>,
    pub ville: Option<String>,
    pub code_postal: Option<String>,
    pub pays: Option<String>,
    pub photo: Option<String>,
    pub enabled: bool,
    pub account_non_expired: bool,
    pub credentials_non_expired: bool,
    pub account_non_locked: bool,
    pub entreprise_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UtilisateurRequestDto {
    pub nom: Option<String>,
    pub prenom: Option<String>,

    #[validate(
        required(message = "Veillez renseigner l'email de l'utilisateur"),
        email(message = "L'email de l'utilisateur est invalide")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Veillez renseigner le nom d'utilisateur"),
        length(min = 1, message = "Veillez renseigner le nom d'utilisateur")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Veillez renseigner le mot de passe de l'utilisateur"),
        length(min = 6, message = "Le mot de passe doit contenir au moins 6 caractères")
    )]
    pub mot_de_passe: Option<String>,

    pub date_de_naissance: Option<NaiveDate>,
    pub adresse1: Option<String>,
    pub adresse2: Option<String>,
    pub ville: Option<String>,
    pub code_postal: Option<String>,
    pub pays: Option<String>,
    pub photo: Option<String>,
    pub entreprise_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilisateurResponseDto {
    pub id: i32,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: String,
    pub username: String,
    pub date_de_naissance: Option<NaiveDate>,
    pub adresse1: Option<String>,
    pub adresse2: Option<String>,
    pub ville: Option<String>,
    pub code_postal: Option<String>,
    pub pays: Option<String>,
    pub photo: Option<String>,
    pub enabled: bool,
    pub entreprise_id: Option<i32>,
    pub roles: Vec<RolesResponseDto>,
}

impl UtilisateurResponseDto {
    pub fn from_entity(utilisateur: Utilisateur, roles: Vec<Roles>) -> Self {
        Self {
            id: utilisateur.id,
            nom: utilisateur.nom,
            prenom: utilisateur.prenom,
            email: utilisateur.email,
            username: utilisateur.username,
            date_de_naissance: utilisateur.date_de_naissance,
            adresse1: utilisateur.adresse1,
            adresse2: utilisateur.adresse2,
            ville: utilisateur.ville,
            code_postal: utilisateur.code_postal,
            pays: utilisateur.pays,
            photo: utilisateur.photo,
            enabled: utilisateur.enabled,
            entreprise_id: utilisateur.entreprise_id,
            roles: roles.into_iter().map(RolesResponseDto::from_entity).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::validation_messages;
    use validator::Validate;

    #[test]
    fn parse_de_role_aceita_somente_o_enum() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse(" MANAGER "), Some(Role::Manager));
        assert_eq!(Role::parse("SUPERADMIN"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_serializa_em_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn email_invalido_gera_mensagem() {
        let dto = UtilisateurRequestDto {
            email: Some("pas-un-email".into()),
            username: Some("alice".into()),
            mot_de_passe: Some("secret123".into()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(
            validation_messages(&errors)
                .contains(&"L'email de l'utilisateur est invalide".to_string())
        );
    }

    #[test]
    fn mot_de_passe_curto_gera_mensagem() {
        let dto = UtilisateurRequestDto {
            email: Some("a@b.com".into()),
            username: Some("alice".into()),
            mot_de_passe: Some("123".into()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(
            validation_messages(&errors)
                .contains(&"Le mot de passe doit contenir au moins 6 caractères".to_string())
        );
    }
}
