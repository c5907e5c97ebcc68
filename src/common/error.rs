use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

// Códigos de erro de negócio expostos no corpo JSON das respostas de erro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ArticleNotFound,
    ArticleNotValid,
    CategorieNotFound,
    CategorieNotValid,
    ClientNotFound,
    ClientNotValid,
    FournisseurNotFound,
    FournisseurNotValid,
    EntrepriseNotFound,
    EntrepriseNotValid,
    UtilisateurNotFound,
    UtilisateurNotValid,
    RolesNotFound,
    RolesNotValid,
    MvtStkNotFound,
    MvtStkNotValid,
    CommandeClientNotFound,
    CommandeClientNotValid,
    CommandeFournisseurNotFound,
    CommandeFournisseurNotValid,
    LigneCommandeClientNotFound,
    LigneCommandeFournisseurNotFound,
    VentesNotFound,
    VentesNotValid,
    InvalidCredentials,
}

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As mensagens de negócio são em francês (idioma da API); as variantes de
// infraestrutura seguem o tratamento padrão de erro interno.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidEntity {
        code: ErrorCode,
        message: String,
        errors: Vec<String>,
    },

    #[error("{message}")]
    EntityNotFound { code: ErrorCode, message: String },

    #[error("Identifiants invalides")]
    BadCredentials,

    #[error("Token inválido")]
    InvalidToken,

    // Casos de registro duplicado (e-mail / nome de usuário já em uso).
    #[error("{0}")]
    IllegalArgument(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    Database(#[from] sqlx::Error),

    #[error("Erro de Bcrypt: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno do servidor")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn invalid_entity(
        code: ErrorCode,
        message: impl Into<String>,
        errors: Vec<String>,
    ) -> Self {
        AppError::InvalidEntity {
            code,
            message: message.into(),
            errors,
        }
    }

    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::EntityNotFound {
            code,
            message: message.into(),
        }
    }
}

/// Achata os `ValidationErrors` do `validator` numa lista ordenada de
/// mensagens, no formato que o `InvalidEntity` carrega.
pub fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut by_field: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            (field.to_string(), messages)
        })
        .collect();
    // O HashMap do validator não tem ordem estável; ordenamos por campo.
    by_field.sort_by(|a, b| a.0.cmp(&b.0));
    by_field.into_iter().flat_map(|(_, m)| m).collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidEntity {
                code,
                message,
                errors,
            } => {
                let body = Json(json!({
                    "code": code,
                    "error": message,
                    "errors": errors,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::EntityNotFound { code, message } => {
                let body = Json(json!({ "code": code, "error": message }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::BadCredentials => {
                let body = Json(json!({
                    "code": ErrorCode::InvalidCredentials,
                    "error": "Identifiants invalides",
                }));
                (StatusCode::UNAUTHORIZED, body).into_response()
            }
            AppError::InvalidToken => {
                let body = Json(json!({
                    "error": "Token de autenticação inválido ou ausente.",
                }));
                (StatusCode::UNAUTHORIZED, body).into_response()
            }
            AppError::IllegalArgument(message) => {
                let body = Json(json!({ "error": message }));
                (StatusCode::CONFLICT, body).into_response()
            }
            // Todos os outros erros viram 500. O `tracing` loga a mensagem
            // detalhada que o `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                let body = Json(json!({ "error": "Ocorreu um erro inesperado." }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Dummy {
        #[validate(required(message = "Veillez renseigner le code"))]
        code: Option<String>,
        #[validate(required(message = "Veillez renseigner la quantité"))]
        quantite: Option<i32>,
    }

    #[test]
    fn validation_messages_sao_ordenadas_por_campo() {
        let dummy = Dummy {
            code: None,
            quantite: None,
        };
        let errors = dummy.validate().unwrap_err();
        let messages = validation_messages(&errors);
        assert_eq!(
            messages,
            vec![
                "Veillez renseigner le code".to_string(),
                "Veillez renseigner la quantité".to_string(),
            ]
        );
    }

    #[test]
    fn invalid_entity_vira_400() {
        let err = AppError::invalid_entity(
            ErrorCode::ArticleNotValid,
            "L'article n'est pas valide",
            vec!["Veillez renseigner le code de l'article".into()],
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn entity_not_found_vira_404() {
        let err = AppError::not_found(
            ErrorCode::ArticleNotFound,
            "Aucun article avec l'ID 1 n'a été trouvé dans la BDD",
        );
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn credenciais_invalidas_viram_401_e_duplicados_409() {
        assert_eq!(
            AppError::BadCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::IllegalArgument("Email déjà utilisé".into())
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn codigo_de_erro_serializa_em_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::ArticleNotFound).unwrap();
        assert_eq!(json, "\"ARTICLE_NOT_FOUND\"");
    }
}
