//! User record

use serde::{Deserialize, Serialize};

/// A person record served by the users endpoint.
///
/// Field order is the JSON key order: `{"id":..,"name":..,"role":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Identifier, unique by convention only
    pub id: i64,
    /// Display name, matched exactly by the name filter
    pub name: String,
    /// Free-form role label (e.g., "admin", "developer")
    pub role: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: i64, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let user = User::new(1, "Alice", "admin");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Alice","role":"admin"}"#);
    }

    #[test]
    fn test_json_list_decodes_back() {
        let users = vec![
            User::new(1, "Alice", "admin"),
            User::new(2, "Bob", "developer"),
            User::new(3, "Sam", "manager"),
        ];

        let json = serde_json::to_vec(&users).unwrap();
        let decoded: Vec<User> = serde_json::from_slice(&json).unwrap();

        assert_eq!(decoded, users);
    }
}
