//! Account records.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;
use super::role::Role;

/// A stored account record.
///
/// The password is kept in plain text: this store is a mock persistence
/// layer and trades security for inspectability. Identity operations never
/// return this type; they return [`UserProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    pub email: Email,
    pub password: String,
}

impl User {
    /// The password-free projection of this account.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            role: self.role,
            email: self.email.clone(),
        }
    }
}

/// The public view of an account.
///
/// Omitting the password is typed rather than conventional: no code path
/// can serialize a profile with a password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    pub email: Email,
}

/// Caller-supplied fields for account creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub role: Role,
    pub email: Email,
    pub password: String,
}

/// Login input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: Email,
    pub password: String,
}
