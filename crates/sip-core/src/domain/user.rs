use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered account. The password is only ever stored as a PHC hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    pub name: String,
}

impl User {
    /// Create a user with a generated id. The email is stored lowercased and
    /// a missing name falls back to the part of the email before `@`.
    pub fn new(email: &str, password_hash: String, name: Option<String>) -> Self {
        let email = email.to_lowercase();
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

        Self {
            id: Uuid::new_v4().simple().to_string(),
            email,
            password_hash,
            name,
        }
    }

    /// Case-insensitive email comparison.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}
