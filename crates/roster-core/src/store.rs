//! User store abstraction and the in-memory backend

use crate::User;

/// Anything that can produce the list of users.
///
/// The request handler only sees this trait, so a fixture or another backend
/// can stand in for [`MemoryStore`].
pub trait UserStore: Send + Sync {
    /// All users in insertion order. Must return the same sequence on every call.
    fn list(&self) -> &[User];
}

/// Fixed, read-only collection of users held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: Vec<User>,
}

impl MemoryStore {
    /// Create a store holding `users` in the given order
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Store seeded with the built-in sample users
    pub fn sample() -> Self {
        Self::new(vec![
            User::new(1, "Jhon", "developer"),
            User::new(2, "Mariia", "developer"),
            User::new(3, "Silver", "admin"),
            User::new(4, "Jhon", "admin"),
            User::new(5, "Stephan", "manager"),
        ])
    }

    /// Number of users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the store holds no users
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl From<Vec<User>> for MemoryStore {
    fn from(users: Vec<User>) -> Self {
        Self::new(users)
    }
}

impl UserStore for MemoryStore {
    fn list(&self) -> &[User] {
        &self.users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_sample_order() {
        let store = MemoryStore::sample();
        let ids: Vec<i64> = store.list().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_list_is_stable() {
        let store = MemoryStore::sample();
        let first = store.list().to_vec();
        let second = store.list().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::default();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_behind_trait_object() {
        let store: Arc<dyn UserStore> = Arc::new(MemoryStore::from(vec![User::new(
            7, "Alice", "admin",
        )]));
        assert_eq!(store.list(), &[User::new(7, "Alice", "admin")]);
    }
}
