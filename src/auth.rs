//! Auth types
//!
//! Request/response payloads for the auth endpoints and the JWT claims
//! shape. Token issuance and verification happen on the backend; this
//! module only describes what crosses the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Token refresh payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// Access-token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub email: String,
    /// Role name at issuance time
    pub role: String,
    /// Expiry (Unix seconds)
    pub exp: i64,
    /// Issued at (Unix seconds)
    pub iat: i64,
}

impl Claims {
    /// Whether the token is expired as of `now` (Unix seconds).
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_decode() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "access_token": "eyJhbGciOiJIUzI1NiJ9.x.y",
            "refresh_token": "eyJhbGciOiJIUzI1NiJ9.a.b",
            "user": {
                "id": "4e1a2b3c-5d6e-4f70-8192-a3b4c5d6e7f8",
                "email": "user@example.com",
                "name": "User",
                "email_verified": true,
                "is_active": true,
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-01T00:00:00Z",
            },
        }))
        .unwrap();
        assert_eq!(resp.user.email, "user@example.com");
        assert!(!resp.access_token.is_empty());
    }

    #[test]
    fn test_claims_expiry() {
        let claims: Claims = serde_json::from_value(json!({
            "user_id": "4e1a2b3c-5d6e-4f70-8192-a3b4c5d6e7f8",
            "email": "user@example.com",
            "role": "member",
            "iat": 1_740_000_000,
            "exp": 1_740_000_900,
        }))
        .unwrap();
        assert!(!claims.is_expired(1_740_000_899));
        assert!(claims.is_expired(1_740_000_900));
    }
}
