//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An email address.
///
/// Stored and compared verbatim: the store treats emails as opaque,
/// case-sensitive strings. The only email failure the contract knows is a
/// duplicate at signup, so no structural validation happens here.
///
/// ## Examples
///
/// ```
/// use krishibazaar_core::Email;
///
/// let email = Email::new("farmer@example.com");
/// assert_eq!(email.as_str(), "farmer@example.com");
///
/// // Comparison is exact, including case
/// assert_ne!(Email::new("a@example.com"), Email::new("A@example.com"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create an email address from a string value.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Email {
    fn from(email: String) -> Self {
        Self(email)
    }
}

impl From<&str> for Email {
    fn from(email: &str) -> Self {
        Self(email.to_owned())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert_ne!(
            Email::new("farmer@example.com"),
            Email::new("Farmer@example.com")
        );
        assert_eq!(
            Email::new("farmer@example.com"),
            Email::new("farmer@example.com")
        );
    }

    #[test]
    fn test_display() {
        let email = Email::new("merchant@example.com");
        assert_eq!(format!("{email}"), "merchant@example.com");
    }

    #[test]
    fn test_serde_roundtrip() {
        let email = Email::new("farmer@example.com");
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"farmer@example.com\"");

        let parsed: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, email);
    }

    #[test]
    fn test_as_ref() {
        let email = Email::new("farmer@example.com");
        let s: &str = email.as_ref();
        assert_eq!(s, "farmer@example.com");
    }
}
