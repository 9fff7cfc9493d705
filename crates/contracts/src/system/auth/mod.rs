use serde::{Deserialize, Serialize};

/// Claims of an access token issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    pub is_admin: bool,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

impl TokenClaims {
    /// Admins hold every capability; everyone else only what the token lists.
    pub fn can(&self, capability: &str) -> bool {
        self.is_admin || self.capabilities.iter().any(|c| c == capability)
    }
}

/// Claims of a request-authenticity token (nonce) bound to one user and one action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NonceClaims {
    pub sub: String,
    pub action: String,
    pub exp: usize,
    pub iat: usize,
}
