// 👤 Account Entity - a registered guest
//
// Identity is the username. Accounts are created once at registration and
// never mutated afterwards, so a second registration with the same username
// can never overwrite the stored password.

use serde::Serialize;

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Registered username/password pair.
///
/// The password is an opaque string compared verbatim. It is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Unique login name (key in the registry's account map)
    pub username: String,

    #[serde(skip)]
    password: String,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Account {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact comparison against the stored password
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

// ============================================================================
// TESTS
// ============================================================================
