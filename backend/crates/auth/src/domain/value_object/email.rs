//! Email Value Object
//!
//! Emails are identity keys and compared exactly as stored: no case
//! folding, no trimming. Format checks are left to the verification flow.

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email; only an empty value is rejected
    pub fn new(email: impl Into<String>) -> AuthResult<Self> {
        let email = email.into();

        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
