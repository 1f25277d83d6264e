//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;

use crate::auth::{
    errors::AuthServiceError,
    models::{ApiTokenMetadata, ApiTokenUuid, IssuedApiToken, NewApiToken, NewUser, User, UserUuid},
    repository::PgAuthRepository,
    token::{format_api_token, generate_api_token_secret, hash_token, looks_like_api_token},
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Create a user account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::AlreadyExists`] when the username is
    /// taken, or a storage error.
    pub async fn create_user(&self, user: NewUser) -> Result<User, AuthServiceError> {
        self.repository
            .create_user(&user)
            .await
            .map_err(AuthServiceError::from)
    }

    /// Issue a new API token for the given user. The raw token is only
    /// available in the returned value.
    ///
    /// # Errors
    ///
    /// Returns an error if database insertion fails.
    pub async fn issue_api_token(
        &self,
        user: UserUuid,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let secret = generate_api_token_secret();
        let token = format_api_token(&secret);

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: ApiTokenUuid::new(),
                user_uuid: user,
                token_hash: hash_token(&token),
                expires_at,
            })
            .await
            .map_err(AuthServiceError::from)?;

        Ok(IssuedApiToken { token, metadata })
    }

    /// List all tokens for the given user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(
        &self,
        user: UserUuid,
    ) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        self.repository
            .list_api_tokens_by_user(user)
            .await
            .map_err(AuthServiceError::from)
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token: ApiTokenUuid) -> Result<bool, AuthServiceError> {
        self.repository
            .revoke_api_token(token)
            .await
            .map(|rows_affected| rows_affected > 0)
            .map_err(AuthServiceError::from)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        if !looks_like_api_token(bearer_token) {
            return Err(AuthServiceError::NotFound);
        }

        self.repository
            .find_user_by_token_hash(&hash_token(bearer_token))
            .await
            .map_err(AuthServiceError::from)?
            .ok_or(AuthServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the user it authenticates.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}
