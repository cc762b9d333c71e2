//! Shared contract types for the portal
//!
//! Common types exchanged between the backend API and the web client:
//! multi-language text fields, response envelopes, pagination, and
//! user/role/auth records. Pure data shapes — transport, persistence and
//! token crypto live elsewhere.

pub mod auth;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use auth::{Claims, LoginRequest, LoginResponse, RefreshRequest, RegisterRequest};
pub use models::{DEFAULT_LANG, MultiLangText, PermissionValue, Role, User, localized_text};
pub use request::PaginationQuery;
pub use response::{ApiResponse, PaginatedResponse, Pagination};
