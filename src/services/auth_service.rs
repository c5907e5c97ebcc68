// src/services/auth_service.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    common::error::{AppError, ErrorCode, validation_messages},
    db::{EntrepriseRepository, RolesRepository, UtilisateurRepository},
    models::{
        auth::{AuthResponseDto, Claims, LoginRequestDto, RegisterRequestDto},
        utilisateur::{Role, Utilisateur, UtilisateurRequestDto, UtilisateurResponseDto},
    },
};

// ---
// Helpers de token (puros, sem banco)
// ---

pub(crate) fn create_token(jwt_secret: &str, utilisateur_id: i32) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = now + chrono::Duration::days(7);

    let claims = Claims {
        sub: utilisateur_id,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?)
}

pub(crate) fn decode_token(jwt_secret: &str, token: &str) -> Result<Claims, AppError> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &validation,
    )
    .map_err(|_| AppError::InvalidToken)?;
    Ok(token_data.claims)
}

#[derive(Clone)]
pub struct AuthService {
    utilisateur_repo: UtilisateurRepository,
    roles_repo: RolesRepository,
    entreprise_repo: EntrepriseRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(
        utilisateur_repo: UtilisateurRepository,
        roles_repo: RolesRepository,
        entreprise_repo: EntrepriseRepository,
        jwt_secret: String,
        pool: PgPool,
    ) -> Self {
        Self {
            utilisateur_repo,
            roles_repo,
            entreprise_repo,
            jwt_secret,
            pool,
        }
    }

    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto, AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Registro inválido: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::UtilisateurNotValid,
                "L'utilisateur n'est pas valide",
                validation_messages(&errors),
            ));
        }

        // O role é resolvido antes de qualquer escrita: valor desconhecido é
        // um erro declarado, nunca um panic.
        let role_name = dto.role.as_deref().unwrap();
        let role = Role::parse(role_name).ok_or_else(|| {
            tracing::error!("Role desconhecido no registro: {role_name}");
            AppError::invalid_entity(
                ErrorCode::UtilisateurNotValid,
                "L'utilisateur n'est pas valide",
                vec![format!("Rôle inconnu: {role_name}")],
            )
        })?;

        let email = dto.email.as_deref().unwrap();
        let username = dto.username.as_deref().unwrap();

        // Verifica se o utilisateur já existe
        if self.utilisateur_repo.exists_by_email(email).await? {
            return Err(AppError::IllegalArgument("Email déjà utilisé".to_string()));
        }
        if self.utilisateur_repo.exists_by_username(username).await? {
            return Err(AppError::IllegalArgument(
                "Nom d'utilisateur déjà utilisé".to_string(),
            ));
        }

        if let Some(entreprise_id) = dto.entreprise_id {
            self.entreprise_repo
                .find_by_id(entreprise_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(
                        ErrorCode::EntrepriseNotFound,
                        format!(
                            "Aucune entreprise avec l'ID {entreprise_id} n'a été trouvée dans la BDD"
                        ),
                    )
                })?;
        }

        // Hashing fora da transação: não toca no banco.
        let password = dto.password.clone().unwrap();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {e}"))??;

        let utilisateur_dto = UtilisateurRequestDto {
            nom: dto.nom.clone(),
            prenom: dto.prenom.clone(),
            email: dto.email.clone(),
            username: dto.username.clone(),
            mot_de_passe: dto.password.clone(),
            entreprise_id: dto.entreprise_id,
            ..Default::default()
        };

        // --- INÍCIO DA TRANSAÇÃO ---
        // Utilisateur + role são criados juntos: se o role falhar, o
        // utilisateur criado acima é desfeito.
        let mut tx = self.pool.begin().await?;

        let utilisateur = self
            .utilisateur_repo
            .create(&mut *tx, &utilisateur_dto, &hashed_password)
            .await?;

        let user_role = self
            .roles_repo
            .create(&mut *tx, role, utilisateur.id, dto.entreprise_id)
            .await?;

        tx.commit().await?;
        // --- FIM DA TRANSAÇÃO ---

        let token = create_token(&self.jwt_secret, utilisateur.id)?;
        Ok(AuthResponseDto {
            token,
            user: UtilisateurResponseDto::from_entity(utilisateur, vec![user_role]),
        })
    }

    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto, AppError> {
        if let Err(errors) = dto.validate() {
            tracing::error!("Login inválido: {:?}", errors);
            return Err(AppError::invalid_entity(
                ErrorCode::UtilisateurNotValid,
                "L'utilisateur n'est pas valide",
                validation_messages(&errors),
            ));
        }

        let utilisateur = self
            .utilisateur_repo
            .find_by_email(dto.email.as_deref().unwrap())
            .await?
            .ok_or(AppError::BadCredentials)?;

        let password = dto.password.clone().unwrap();
        let password_hash = utilisateur.mot_de_passe.clone();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password, &password_hash))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {e}"))??;

        if !is_password_valid {
            return Err(AppError::BadCredentials);
        }

        let roles = self
            .roles_repo
            .find_all_by_utilisateur_id(utilisateur.id)
            .await?;
        let token = create_token(&self.jwt_secret, utilisateur.id)?;
        Ok(AuthResponseDto {
            token,
            user: UtilisateurResponseDto::from_entity(utilisateur, roles),
        })
    }

    // Usado pelo middleware de autenticação.
    pub async fn validate_token(&self, token: &str) -> Result<Utilisateur, AppError> {
        let claims = decode_token(&self.jwt_secret, token)?;
        self.utilisateur_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_criado_decodifica_com_o_mesmo_segredo() {
        let token = create_token("segredo-de-teste", 42).unwrap();
        let claims = decode_token("segredo-de-teste", &token).unwrap();
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_com_segredo_errado_e_rejeitado() {
        let token = create_token("segredo-de-teste", 42).unwrap();
        let err = decode_token("outro-segredo", &token).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn token_malformado_e_rejeitado() {
        let err = decode_token("segredo-de-teste", "nao-e-um-jwt").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    async fn pool_de_teste() -> PgPool {
        let url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL deve apontar para um Postgres de teste");
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        pool
    }

    fn service(pool: PgPool) -> AuthService {
        AuthService::new(
            UtilisateurRepository::new(pool.clone()),
            RolesRepository::new(pool.clone()),
            EntrepriseRepository::new(pool.clone()),
            "segredo-de-teste".to_string(),
            pool,
        )
    }

    #[tokio::test]
    #[ignore = "requer DATABASE_URL apontando para um Postgres"]
    async fn registro_duplicado_falha_e_login_devolve_o_mesmo_email() {
        let pool = pool_de_teste().await;
        let service = service(pool);

        let m = chrono::Utc::now().timestamp_micros();
        let email = format!("a{m}@b.com");
        let register = |username: String| RegisterRequestDto {
            nom: Some("Doe".into()),
            prenom: Some("Alice".into()),
            email: Some(email.clone()),
            username: Some(username),
            password: Some("secret123".into()),
            role: Some("USER".into()),
            entreprise_id: None,
        };

        let response = service.register(register(format!("alice{m}"))).await.unwrap();
        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, email);
        assert_eq!(response.user.roles.len(), 1);

        // Mesmo email, outro username: "Email déjà utilisé".
        let err = service
            .register(register(format!("alice{m}-bis")))
            .await
            .unwrap_err();
        match err {
            AppError::IllegalArgument(message) => assert_eq!(message, "Email déjà utilisé"),
            other => panic!("esperava IllegalArgument, veio {other:?}"),
        }

        let login = service
            .login(LoginRequestDto {
                email: Some(email.clone()),
                password: Some("secret123".into()),
            })
            .await
            .unwrap();
        assert!(!login.token.is_empty());
        assert_eq!(login.user.email, email);

        let err = service
            .login(LoginRequestDto {
                email: Some(email),
                password: Some("mauvais-mdp".into()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadCredentials));
    }

    #[tokio::test]
    #[ignore = "requer DATABASE_URL apontando para um Postgres"]
    async fn registro_com_role_desconhecido_e_um_invalid_entity() {
        let pool = pool_de_teste().await;
        let service = service(pool);

        let m = chrono::Utc::now().timestamp_micros();
        let err = service
            .register(RegisterRequestDto {
                email: Some(format!("r{m}@b.com")),
                username: Some(format!("role{m}")),
                password: Some("secret123".into()),
                role: Some("SUPERADMIN".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        match err {
            AppError::InvalidEntity { errors, .. } => {
                assert_eq!(errors, vec!["Rôle inconnu: SUPERADMIN".to_string()]);
            }
            other => panic!("esperava InvalidEntity, veio {other:?}"),
        }
    }
}
