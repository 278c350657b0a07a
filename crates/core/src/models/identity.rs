use serde::{Deserialize, Serialize};

/// A registered student. Keyed by email, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub qualification: String,
    pub location: String,
    pub age: u32,
    /// Fee payment proof as a base64 data URL, if one was uploaded.
    pub fee_screenshot: Option<String>,
}

impl Student {
    /// Case-insensitive email match against a submitted address.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.trim().to_lowercase()
    }
}

/// A faculty account, created and deleted by the admin. Keyed by username,
/// matched exactly. The password is stored and compared in plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub name: String,
    pub username: String,
    pub password: String,
    pub qualification: String,
    pub location: String,
}

impl Faculty {
    /// Fixed qualification label applied to every faculty account.
    pub const QUALIFICATION: &'static str = "Faculty Member";
    /// Fixed location label applied to every faculty account.
    pub const LOCATION: &'static str = "Campus";

    pub fn new(name: String, username: String, password: String) -> Self {
        Self {
            name,
            username,
            password,
            qualification: Self::QUALIFICATION.to_string(),
            location: Self::LOCATION.to_string(),
        }
    }
}

/// The single synthetic administrator identity. Never persisted as a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub name: String,
}

impl Default for Admin {
    fn default() -> Self {
        Self {
            name: "Administrator".to_string(),
        }
    }
}

/// The resolved, role-tagged representation of an authenticated user.
///
/// Serialized with a `role` tag so each variant carries only the fields
/// that make sense for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Identity {
    Student(Student),
    Faculty(Faculty),
    Admin(Admin),
}

impl Identity {
    pub fn name(&self) -> &str {
        match self {
            Identity::Student(s) => &s.name,
            Identity::Faculty(f) => &f.name,
            Identity::Admin(a) => &a.name,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Identity::Admin(_))
    }

    /// Copy of this identity suitable for the lightweight session cache.
    ///
    /// Student identities are stored without the fee screenshot to bound
    /// the cache size; faculty and admin identities are stored as-is.
    pub fn for_session_cache(&self) -> Identity {
        match self {
            Identity::Student(s) => Identity::Student(Student {
                fee_screenshot: None,
                ..s.clone()
            }),
            other => other.clone(),
        }
    }
}
