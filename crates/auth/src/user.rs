//! User records and the public profile shape.

use serde::Serialize;

use stockroom_core::{Entity, UserId};

/// A stored user record.
///
/// # Invariants
/// - `username` and `email` are unique within a directory.
/// - The password is held verbatim: this is a simulated directory for a mock
///   backend, not a credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// The public view of this record. The password never leaves the crate.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// What login/signup hand back to the client: `{ id, name, email }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
}
