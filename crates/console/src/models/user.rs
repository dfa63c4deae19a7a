//! Guest/operator account types and the login exchange.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use hotelier_core::{Email, UserId, UserRole};

/// A registered account.
///
/// Listing endpoints omit `role` for plain users; it defaults to the
/// non-privileged role when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    pub created_at: NaiveDateTime,
}

impl User {
    /// Display name: "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Credentials sent to `/users/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login response: a bearer token plus the authenticated account.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub user: User,
}
