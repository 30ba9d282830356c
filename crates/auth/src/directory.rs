//! In-memory user directory simulating the login/signup backend.

use stockroom_core::{DomainError, DomainResult, UserId};

use crate::user::{User, UserProfile};

/// Minimum accepted password length for signup.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Append-only user directory with sequential id assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<User>,
    next_id: UserId,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: UserId::new(1),
        }
    }

    /// The single account the mock backend ships with.
    pub fn seeded() -> Self {
        let mut directory = Self::new();
        directory
            .signup("testuser", "test@example.com", "password123")
            .expect("seed user is valid");
        directory
    }

    /// Check credentials against the directory.
    pub fn login(&self, username: &str, password: &str) -> DomainResult<UserProfile> {
        self.users
            .iter()
            .find(|user| user.username == username && user.password == password)
            .map(User::profile)
            .ok_or_else(|| DomainError::unauthorized("Invalid username or password"))
    }

    /// Register a new user.
    ///
    /// The duplicate check runs before field validation, matching the backend
    /// this directory simulates: an existing username or email is reported as
    /// a conflict even when other fields are bad.
    pub fn signup(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<UserProfile> {
        let taken = self
            .users
            .iter()
            .any(|user| user.username == username || user.email == email);
        if taken {
            return Err(DomainError::conflict("User already exists"));
        }

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(DomainError::validation("All fields are required"));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(
                "Password must be at least 6 characters",
            ));
        }

        let user = User {
            id: self.next_id,
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.next_id = self.next_id.next();
        let profile = user.profile();
        self.users.push(user);
        Ok(profile)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
