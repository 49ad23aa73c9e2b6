//! User domain entity
//!
//! Users are managed by an external identity provider; this service keeps
//! the local record it needs to resolve email claims and roles. There are
//! no credential fields here.

use chrono::{DateTime, Utc};

/// User role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRole {
    /// Manages hotels; may list, update and delete reservations for them
    HotelOwner,
    /// Regular authenticated guest
    Guest,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HotelOwner => "hotel-owner",
            Self::Guest => "guest",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "hotel-owner" => Self::HotelOwner,
            _ => Self::Guest,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User record
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user about to be inserted (startup seed, tests)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    pub fn is_hotel_owner(&self) -> bool {
        self.role == UserRole::HotelOwner
    }
}

// ── Tests ──────────────────────────────────────────────────────
