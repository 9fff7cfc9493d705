//! Short-lived request-authenticity tokens bound to a user and an action.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use contracts::system::auth::NonceClaims;
use jsonwebtoken::{decode, encode, Header, Validation};

use super::jwt::JwtSecret;

/// Action of the general API-session token
pub const REST_NONCE_ACTION: &str = "wp_rest";
/// Header the core reads the API-session token from
pub const REST_NONCE_HEADER: &str = "X-WP-Nonce";

#[derive(Clone)]
pub struct NonceIssuer {
    secret: JwtSecret,
    lifetime: chrono::Duration,
}

impl NonceIssuer {
    pub fn new(secret: JwtSecret, lifetime_hours: i64) -> Self {
        Self {
            secret,
            lifetime: chrono::Duration::hours(lifetime_hours.max(1)),
        }
    }

    pub fn issue(&self, user_id: &str, action: &str) -> Result<String> {
        let now = Utc::now();
        let claims = NonceClaims {
            sub: user_id.to_string(),
            action: action.to_string(),
            exp: (now + self.lifetime).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.secret.encoding_key())
            .context("Failed to encode nonce")
    }

    /// Check signature and expiry, then that the nonce belongs to this user and action
    pub fn verify(&self, token: &str, user_id: &str, action: &str) -> Result<NonceClaims> {
        let claims = decode::<NonceClaims>(token, &self.secret.decoding_key(), &Validation::default())
            .context("Failed to decode nonce")?
            .claims;

        if claims.sub != user_id {
            bail!("nonce was issued for another user");
        }
        if claims.action != action {
            bail!("nonce was issued for action '{}'", claims.action);
        }

        Ok(claims)
    }
}
