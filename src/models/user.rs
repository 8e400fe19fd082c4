use serde::{Deserialize, Serialize};

/// Access-control category of a platform user.
///
/// Every role-gated operation matches exhaustively on this enum; there are
/// no string-typed role checks anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Patient,
    Provider,
    Admin,
    Guest,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Patient => write!(f, "Patient"),
            Role::Provider => write!(f, "Provider"),
            Role::Admin => write!(f, "Admin"),
            Role::Guest => write!(f, "Guest"),
        }
    }
}

/// A platform user. Immutable after creation; identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar_url: Option<String>,
}
