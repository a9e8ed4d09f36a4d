//! Credentials and session cookie types.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Login credentials for the adoption service.
///
/// Both fields are trimmed at construction time; an empty name or email is
/// rejected locally, before any network call is made.
///
/// # Example
///
/// ```
/// use rehome_core::Credentials;
///
/// let creds = Credentials::new("Jane", "jane@x.com").unwrap();
/// assert_eq!(creds.name(), "Jane");
/// assert!(Credentials::new("  ", "jane@x.com").is_err());
/// ```
#[derive(Clone)]
pub struct Credentials {
    name: String,
    email: String,
}

impl Credentials {
    /// Create new credentials, trimming both fields.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if either field is empty after
    /// trimming.
    pub fn new(name: impl AsRef<str>, email: impl AsRef<str>) -> Result<Self, Error> {
        let name = name.as_ref().trim();
        let email = email.as_ref().trim();

        if name.is_empty() {
            return Err(InvalidInputError::Credentials { field: "name" }.into());
        }
        if email.is_empty() {
            return Err(InvalidInputError::Credentials { field: "email" }.into());
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.email
    }
}

// Intentionally hide the email in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("email", &"[REDACTED]")
            .finish()
    }
}

/// The opaque session credential issued by the service at login.
///
/// The service establishes its session via a cookie; this type holds the
/// raw cookie value captured verbatim from the login response, to be
/// replayed on every subsequent request.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct SessionCookie(String);

impl SessionCookie {
    /// Create a session cookie from a raw cookie string.
    pub fn new(cookie: impl Into<String>) -> Self {
        Self(cookie.into())
    }

    /// Returns the raw cookie value.
    ///
    /// # Security
    ///
    /// Use only when constructing the `Cookie` request header or persisting
    /// the session. Never log or display this value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide cookie value in Debug output
impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionCookie").field(&"[REDACTED]").finish()
    }
}
