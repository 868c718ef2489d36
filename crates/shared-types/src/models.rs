use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four portal roles, each with its own layout skin and nav tree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SchoolRole {
    SuperAdmin,
    SchoolAdmin,
    Student,
    Staff,
}

/// All portal roles in display order.
pub const ALL_ROLES: &[SchoolRole] = &[
    SchoolRole::SuperAdmin,
    SchoolRole::SchoolAdmin,
    SchoolRole::Student,
    SchoolRole::Staff,
];

impl SchoolRole {
    /// Stable key used in storage and URL query params.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchoolRole::SuperAdmin => "super-admin",
            SchoolRole::SchoolAdmin => "school-admin",
            SchoolRole::Student => "student",
            SchoolRole::Staff => "staff",
        }
    }

    /// Parse a role key, falling back to Student.
    pub fn from_key(s: &str) -> Self {
        match s {
            "super-admin" => SchoolRole::SuperAdmin,
            "school-admin" => SchoolRole::SchoolAdmin,
            "staff" => SchoolRole::Staff,
            _ => SchoolRole::Student,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SchoolRole::SuperAdmin => "Super Admin",
            SchoolRole::SchoolAdmin => "School Admin",
            SchoolRole::Student => "Student",
            SchoolRole::Staff => "Staff",
        }
    }

    /// URL prefix the role's routes live under.
    pub fn base_path(&self) -> &'static str {
        match self {
            SchoolRole::SuperAdmin => "/super-admin",
            SchoolRole::SchoolAdmin => "/school-admin",
            SchoolRole::Student => "/student",
            SchoolRole::Staff => "/staff",
        }
    }
}

/// Authenticated user record as returned by the backend and persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub role: SchoolRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl AuthUser {
    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Payload of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: AuthUser,
}
