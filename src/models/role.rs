//! Role Model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role entity (RBAC)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    /// 'admin', 'member', 'guest'
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Open-ended permission map, e.g. `{"users": "crud", "posts": ["read"]}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<BTreeMap<String, PermissionValue>>,
}

/// One permission entry on a [`Role`].
///
/// The backend stores these as free-form JSON; this closes the shape to the
/// forms that actually occur on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionValue {
    /// `true` grants, `false` denies
    Flag(bool),
    /// `"all"`, an exact action name, or a compact form like `"crud"`
    /// matched by substring
    Action(String),
    /// Explicit action list, `"all"` grants everything
    Actions(Vec<String>),
    /// Anything else the backend may store; never grants
    Other(serde_json::Value),
}

impl PermissionValue {
    /// Check whether this entry grants `action`.
    pub fn allows(&self, action: &str) -> bool {
        match self {
            Self::Flag(granted) => *granted,
            Self::Action(s) => s == "all" || s == action || s.contains(action),
            Self::Actions(list) => list.iter().any(|p| p == action || p == "all"),
            Self::Other(_) => false,
        }
    }
}

impl Role {
    /// Check whether this role grants `action` on `resource`.
    pub fn has_permission(&self, resource: &str, action: &str) -> bool {
        self.permissions
            .as_ref()
            .and_then(|perms| perms.get(resource))
            .is_some_and(|value| value.allows(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn role(permissions: serde_json::Value) -> Role {
        serde_json::from_value(json!({
            "id": "5f6b7c1e-0d4a-4a9f-9f4e-2f3a8b1c6d7e",
            "name": "editor",
            "permissions": permissions,
        }))
        .unwrap()
    }

    #[test]
    fn test_permission_value_untagged_decode() {
        let r = role(json!({
            "admin": true,
            "users": "crud",
            "posts": ["read", "write"],
        }));
        let perms = r.permissions.as_ref().unwrap();
        assert_eq!(perms["admin"], PermissionValue::Flag(true));
        assert_eq!(perms["users"], PermissionValue::Action("crud".into()));
        assert_eq!(
            perms["posts"],
            PermissionValue::Actions(vec!["read".into(), "write".into()])
        );
    }

    #[test]
    fn test_has_permission() {
        let r = role(json!({
            "admin": true,
            "media": false,
            "users": "all",
            "posts": ["read"],
            "pages": "crud",
        }));
        assert!(r.has_permission("admin", "anything"));
        assert!(!r.has_permission("media", "read"));
        assert!(r.has_permission("users", "delete"));
        assert!(r.has_permission("posts", "read"));
        assert!(!r.has_permission("posts", "write"));
        // compact form grants single-letter actions by containment
        assert!(r.has_permission("pages", "r"));
        assert!(!r.has_permission("pages", "x"));
        assert!(!r.has_permission("missing", "read"));
    }

    #[test]
    fn test_unrecognized_permission_shape_denies() {
        let r = role(json!({"quota": 5, "nested": {"read": true}}));
        assert!(!r.has_permission("quota", "read"));
        assert!(!r.has_permission("nested", "read"));
    }

    #[test]
    fn test_absent_permissions_deny() {
        let r: Role = serde_json::from_value(json!({
            "id": "5f6b7c1e-0d4a-4a9f-9f4e-2f3a8b1c6d7e",
            "name": "guest",
        }))
        .unwrap();
        assert!(r.permissions.is_none());
        assert!(!r.has_permission("posts", "read"));
    }

    #[test]
    fn test_optional_fields_skipped_on_serialize() {
        let r: Role = serde_json::from_value(json!({
            "id": "5f6b7c1e-0d4a-4a9f-9f4e-2f3a8b1c6d7e",
            "name": "guest",
        }))
        .unwrap();
        let encoded = serde_json::to_value(&r).unwrap();
        assert!(encoded.get("description").is_none());
        assert!(encoded.get("permissions").is_none());
    }
}
