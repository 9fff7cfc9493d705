use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

use crate::shared::config::AuthConfig;

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 24;

/// HS256 signing secret shared with the identity provider and the core
#[derive(Clone)]
pub struct JwtSecret {
    secret: String,
}

impl JwtSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Use the configured secret, or generate one for this process only
    pub fn from_config(config: &AuthConfig) -> Self {
        if config.jwt_secret.trim().is_empty() {
            tracing::warn!(
                "auth.jwt_secret is empty; using a random secret, tokens will not survive a restart"
            );
            return Self::new(generate_jwt_secret());
        }
        Self::new(config.jwt_secret.clone())
    }

    pub fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.as_bytes())
    }

    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.as_bytes())
    }

    /// Generate JWT access token with 24 hours lifetime
    pub fn generate_access_token(
        &self,
        user_id: &str,
        username: &str,
        is_admin: bool,
        capabilities: Vec<String>,
    ) -> Result<String> {
        let now = Utc::now();
        let exp = (now + chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize;
        let iat = now.timestamp() as usize;

        let claims = TokenClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            is_admin,
            capabilities,
            exp,
            iat,
        };

        encode(&Header::default(), &claims, &self.encoding_key())
            .context("Failed to encode JWT token")
    }

    /// Validate JWT token and extract claims
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key(), &Validation::default())
            .context("Failed to decode JWT token")?;

        Ok(token_data.claims)
    }
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}
