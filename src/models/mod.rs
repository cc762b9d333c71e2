//! Data models
//!
//! Shared between the backend API and the web client. Multi-language text
//! columns are JSONB on the backend and arrive here as ordered JSON maps.

pub mod multi_lang_text;
pub mod role;
pub mod user;

// Re-exports
pub use multi_lang_text::*;
pub use role::*;
pub use user::*;
