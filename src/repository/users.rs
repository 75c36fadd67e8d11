//! Users repository

use crate::models::User;

#[derive(Debug, Clone, Default)]
pub struct UsersRepository {
    users: Vec<User>,
}

impl UsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user. Duplicate ids are kept.
    pub fn add(&mut self, user: User) {
        self.users.push(user);
    }

    /// All users in insertion order
    pub fn all(&self) -> &[User] {
        &self.users
    }
}
