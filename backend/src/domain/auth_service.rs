//! Authentication for the goal tracker.
//!
//! Covers the full session lifecycle: registration with bcrypt password
//! hashing, login, and bearer-token verification. Tokens are HS256 JWTs
//! carrying the user id, valid for 30 days. The goal layer only ever sees
//! `authenticate`, which turns a token into an owner id; session identity is
//! an explicit value passed through request handlers, never ambient state.

use anyhow::{anyhow, Result};
use bcrypt::DEFAULT_COST;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::models::User;
use crate::storage::sqlite::DbConnection;
use crate::storage::{UserRepository, UserStorage};

/// Token lifetime, matching the web client's 30 day sessions
const TOKEN_VALIDITY_DAYS: i64 = 30;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user id
    pub sub: String,
    /// Expiration timestamp
    pub exp: usize,
    /// Issued at timestamp
    pub iat: usize,
}

fn jwt_secret() -> String {
    std::env::var("JWT_SECRET")
        .unwrap_or_else(|_| "goal-tracker-jwt-secret-change-in-production".to_string())
}

/// Issue a signed token for a user id
pub fn create_token(user_id: &str) -> Result<String> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(chrono::Duration::days(TOKEN_VALIDITY_DAYS))
        .ok_or_else(|| anyhow!("Failed to calculate token expiration"))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration,
        iat: now.timestamp() as usize,
    };

    let key = EncodingKey::from_secret(jwt_secret().as_bytes());
    encode(&Header::default(), &claims, &key).map_err(|e| anyhow!("Failed to create token: {}", e))
}

/// Verify a token and return its claims
pub fn verify_token(token: &str) -> Result<Claims> {
    let key = DecodingKey::from_secret(jwt_secret().as_bytes());
    decode::<Claims>(token, &key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| anyhow!("Invalid token: {}", e))
}

pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, DEFAULT_COST).map_err(|e| anyhow!("Failed to hash password: {}", e))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(password, hash).map_err(|e| anyhow!("Failed to verify password: {}", e))
}

/// Service for account registration and session identity
#[derive(Clone)]
pub struct AuthService {
    user_repository: UserRepository,
}

impl AuthService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            user_repository: UserRepository::new(db),
        }
    }

    /// Register a new account and issue its first token
    pub async fn register(&self, email: &str, name: &str, password: &str) -> Result<(User, String)> {
        let email = email.trim().to_lowercase();
        let name = name.trim();

        if email.is_empty() || name.is_empty() || password.is_empty() {
            return Err(anyhow!("Missing required fields"));
        }

        if self.user_repository.get_user_by_email(&email).await?.is_some() {
            return Err(anyhow!("User already exists"));
        }

        let now = chrono::Utc::now().to_rfc3339();
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            name: name.to_string(),
            password_hash: hash_password(password)?,
            created_at: now.clone(),
            updated_at: now,
        };

        self.user_repository.store_user(&user).await?;
        let token = create_token(&user.id)?;

        info!("Registered user {}", user.id);
        Ok((user, token))
    }

    /// Verify credentials and issue a token
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String)> {
        let email = email.trim().to_lowercase();

        // Unknown email and wrong password produce the same error
        let user = self
            .user_repository
            .get_user_by_email(&email)
            .await?
            .ok_or_else(|| anyhow!("Invalid credentials"))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(anyhow!("Invalid credentials"));
        }

        let token = create_token(&user.id)?;
        info!("User {} logged in", user.id);
        Ok((user, token))
    }

    /// Resolve a bearer token to the owning user id
    pub async fn authenticate(&self, token: &str) -> Result<String> {
        let claims = verify_token(token)?;

        // The account behind a still-valid token may have been removed
        let user = self
            .user_repository
            .get_user(&claims.sub)
            .await?
            .ok_or_else(|| anyhow!("Invalid token"))?;

        Ok(user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn create_test_service() -> AuthService {
        let db = DbConnection::init_test().await.expect("Failed to init test DB");
        AuthService::new(db)
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let service = create_test_service().await;

        let (user, token) = service
            .register("alice@example.com", "Alice", "hunter2!")
            .await
            .expect("Failed to register");

        assert_eq!(user.email, "alice@example.com");
        assert!(!token.is_empty());
        assert_ne!(user.password_hash, "hunter2!");

        let (logged_in, _) = service
            .login("alice@example.com", "hunter2!")
            .await
            .expect("Failed to log in");
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_test_service().await;

        service
            .register("bob@example.com", "Bob", "secret")
            .await
            .expect("Failed to register");

        let result = service.register("bob@example.com", "Bobby", "other").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let service = create_test_service().await;

        let result = service.register("", "Carol", "secret").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Missing required fields"));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = create_test_service().await;

        service
            .register("dave@example.com", "Dave", "correct")
            .await
            .expect("Failed to register");

        let result = service.login("dave@example.com", "incorrect").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid credentials"));

        let result = service.login("nobody@example.com", "correct").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_authenticate_roundtrip() {
        let service = create_test_service().await;

        let (user, token) = service
            .register("erin@example.com", "Erin", "secret")
            .await
            .expect("Failed to register");

        let user_id = service
            .authenticate(&token)
            .await
            .expect("Failed to authenticate");
        assert_eq!(user_id, user.id);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_garbage() {
        let service = create_test_service().await;

        assert!(service.authenticate("not-a-token").await.is_err());
        assert!(service.authenticate("").await.is_err());
    }
}
