//! Local user record store.
//!
//! The store is read-only once built. Lookups hand out clones so callers
//! never hold a reference into the store's own records.

use crate::models::User;
use tracing::debug;

/// Lookup interface over the user records.
pub trait RecordStore: Send + Sync {
    /// Find a user by identifier. Absence is a normal result.
    fn find_by_id(&self, id: i64) -> Option<User>;

    /// All users in insertion order.
    fn list_all(&self) -> Vec<User>;
}

/// Fixed in-memory catalog of users.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    /// Create a store holding `users` in the given order.
    pub fn new(users: Vec<User>) -> Self {
        debug!("User store seeded with {} records", users.len());
        Self { users }
    }
}

impl RecordStore for InMemoryUserStore {
    fn find_by_id(&self, id: i64) -> Option<User> {
        // First match wins if the seed carries duplicate ids
        self.users.iter().find(|u| u.id == id).cloned()
    }

    fn list_all(&self) -> Vec<User> {
        self.users.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_users;

    #[test]
    fn test_find_existing_ids() {
        let store = InMemoryUserStore::new(default_users());

        for user in default_users() {
            let found = store.find_by_id(user.id).unwrap();
            assert_eq!(found.id, user.id);
            assert_eq!(found, user);
        }
    }

    #[test]
    fn test_find_missing_id() {
        let store = InMemoryUserStore::new(default_users());
        assert!(store.find_by_id(99).is_none());
        assert!(store.find_by_id(0).is_none());
        assert!(store.find_by_id(-1).is_none());
    }

    #[test]
    fn test_list_all_preserves_order() {
        let users = vec![
            User::new(7, "Seven", "seven@email.com", "7"),
            User::new(2, "Two", "two@email.com", "2"),
            User::new(5, "Five", "five@email.com", "5"),
        ];
        let store = InMemoryUserStore::new(users.clone());

        assert_eq!(store.list_all(), users);
        assert_eq!(store.list_all(), store.list_all());
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let store = InMemoryUserStore::new(vec![
            User::new(1, "First", "first@email.com", "1"),
            User::new(1, "Second", "second@email.com", "2"),
        ]);

        assert_eq!(store.find_by_id(1).unwrap().name, "First");
    }

    #[test]
    fn test_returned_user_is_a_copy() {
        let store = InMemoryUserStore::new(default_users());

        let mut user = store.find_by_id(1).unwrap();
        user.name = "Changed".to_string();

        assert_eq!(store.find_by_id(1).unwrap().name, "John Doe");
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryUserStore::new(Vec::new());
        assert!(store.list_all().is_empty());
        assert!(store.find_by_id(1).is_none());
    }
}
