use crate::config::AuthConfig;
use crate::database::user::{UserRepository, dummy_verify, hash_password, verify_password};
use crate::error::app_error::AppError;
use crate::models::user::{LoginRequest, SignupRequest, User, UserResponse};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// Bearer token payload: the user id and the expiry timestamp.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
}

pub struct AuthService<'a, R: UserRepository> {
    repository: &'a R,
    config: &'a AuthConfig,
}

impl<'a, R: UserRepository> AuthService<'a, R> {
    pub fn new(repository: &'a R, config: &'a AuthConfig) -> Self {
        AuthService { repository, config }
    }

    pub async fn register(&self, request: &SignupRequest) -> Result<UserResponse, AppError> {
        if self.repository.get_user_by_email(&request.email).await?.is_some() {
            warn!(email = %request.email, "signup attempt with already registered email");
            return Err(AppError::EmailAlreadyRegistered);
        }

        let password_hash = hash_password(&request.password)?;
        let user = self.repository.create_user(&request.name, &request.email, &password_hash).await?;
        info!(user_id = %user.id, "user registered");

        Ok(UserResponse::from(&user))
    }

    /// The failure path is identical for an unknown email and a wrong
    /// password, including a decoy hash verification so timing does not
    /// reveal which of the two it was.
    pub async fn login(&self, request: &LoginRequest) -> Result<(String, UserResponse), AppError> {
        let Some(user) = self.repository.get_user_by_email(&request.email).await? else {
            dummy_verify(&request.password);
            return Err(AppError::InvalidCredentials);
        };

        verify_password(&user, &request.password)?;

        let token = self.issue_token(&user)?;
        info!(user_id = %user.id, "login successful");

        Ok((token, UserResponse::from(&user)))
    }

    fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let expires_at = Utc::now() + chrono::Duration::seconds(self.config.token_ttl as i64);
        let claims = Claims {
            sub: user.id,
            exp: expires_at.timestamp() as usize,
        };

        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(self.config.secret.as_bytes()))?;

        Ok(token)
    }

    /// Verifies signature and expiry of a token issued by [`login`].
    /// No route currently calls this: the API issues tokens but does not
    /// gate the slot or booking endpoints on them (see DESIGN.md), so this
    /// stays crate API for callers that do want to gate.
    #[allow(dead_code)]
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| AppError::token("Token verification failed", e))?;

        Ok(data.claims)
    }
}
