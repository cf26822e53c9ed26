//! Name filtering

use crate::User;

/// Select the users whose name equals `name` exactly.
///
/// Comparison is case-sensitive with no trimming or normalization. Matches keep
/// their relative order; no match yields an empty vector.
pub fn filter_by_name(name: &str, users: &[User]) -> Vec<User> {
    users.iter().filter(|u| u.name == name).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<User> {
        vec![
            User::new(1, "Alice", "admin"),
            User::new(2, "Bob", "developer"),
            User::new(3, "Sam", "manager"),
        ]
    }

    #[test]
    fn test_name_exists() {
        let result = filter_by_name("Alice", &fixture());
        assert_eq!(result, vec![User::new(1, "Alice", "admin")]);
    }

    #[test]
    fn test_name_missing() {
        assert!(filter_by_name("David", &fixture()).is_empty());
        assert!(filter_by_name("Jlkfn.sp", &fixture()).is_empty());
    }

    #[test]
    fn test_exact_match_only() {
        let users = fixture();
        assert!(filter_by_name("alice", &users).is_empty());
        assert!(filter_by_name("Ali", &users).is_empty());
        assert!(filter_by_name("Alice ", &users).is_empty());
        assert!(filter_by_name("", &users).is_empty());
    }

    #[test]
    fn test_duplicates_keep_order() {
        let users = vec![
            User::new(1, "Jhon", "developer"),
            User::new(2, "Mariia", "developer"),
            User::new(4, "Jhon", "admin"),
        ];

        let ids: Vec<i64> = filter_by_name("Jhon", &users).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_name("Alice", &[]).is_empty());
    }

    #[test]
    fn test_input_untouched() {
        let users = fixture();
        let _ = filter_by_name("Bob", &users);
        assert_eq!(users, fixture());
    }
}
