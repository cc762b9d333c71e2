//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Role;

/// User record as returned by the API (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Optional role, embedded when the backend expands the relation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub email_verified: bool,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this user carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.as_ref().is_some_and(|role| role.name == "admin")
    }
}
