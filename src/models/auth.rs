// src/models/auth.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::utilisateur::UtilisateurResponseDto;

// Dados para registro de um novo utilisateur
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestDto {
    pub nom: Option<String>,
    pub prenom: Option<String>,

    #[validate(
        required(message = "Veillez renseigner l'email"),
        email(message = "L'email fourni est invalide")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Veillez renseigner le nom d'utilisateur"),
        length(min = 1, message = "Veillez renseigner le nom d'utilisateur")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Veillez renseigner le mot de passe"),
        length(min = 6, message = "Le mot de passe doit contenir au moins 6 caractères")
    )]
    pub password: Option<String>,

    #[validate(required(message = "Veillez renseigner le rôle"))]
    pub role: Option<String>,

    pub entreprise_id: Option<i32>,
}

// Dados para login
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestDto {
    #[validate(
        required(message = "Veillez renseigner l'email"),
        email(message = "L'email fourni est invalide")
    )]
    pub email: Option<String>,

    #[validate(required(message = "Veillez renseigner le mot de passe"))]
    pub password: Option<String>,
}

// Resposta de autenticação: o token assinado + a projeção do utilisateur.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UtilisateurResponseDto,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,   // ID do utilisateur
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::validation_messages;
    use validator::Validate;

    #[test]
    fn register_sans_role_gera_mensagem() {
        let dto = RegisterRequestDto {
            email: Some("a@b.com".into()),
            username: Some("alice".into()),
            password: Some("secret123".into()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            vec!["Veillez renseigner le rôle".to_string()]
        );
    }

    #[test]
    fn login_payload_camel_case() {
        let dto: LoginRequestDto =
            serde_json::from_str(r#"{"email": "a@b.com", "password": "secret123"}"#).unwrap();
        assert!(dto.validate().is_ok());
    }
}
