//! User entity
//!
//! Credentials are stored as bcrypt hashes, never plaintext.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{RegistryError, UserId};

const MIN_PASSWORD_LEN: usize = 8;

/// Role assigned to a registry account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USER" => Ok(UserRole::User),
            "ADMIN" => Ok(UserRole::Admin),
            other => Err(RegistryError::validation(format!(
                "unknown user role '{other}'"
            ))),
        }
    }
}

/// A registered account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    /// bcrypt hash, never the raw password
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration attributes
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub password: String,
}

impl User {
    /// Creates a new account, hashing the supplied password
    pub fn register(attributes: NewUser) -> Result<Self, RegistryError> {
        if attributes.username.trim().is_empty() {
            return Err(RegistryError::validation("username is required"));
        }
        if !attributes.email.contains('@') {
            return Err(RegistryError::validation("email address is malformed"));
        }
        if attributes.password.len() < MIN_PASSWORD_LEN {
            return Err(RegistryError::validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let password_hash = bcrypt::hash(&attributes.password, bcrypt::DEFAULT_COST)
            .map_err(|e| RegistryError::validation(format!("password hashing failed: {e}")))?;

        Ok(Self {
            id: UserId::new_v7(),
            email: attributes.email,
            username: attributes.username,
            first_name: attributes.first_name,
            last_name: attributes.last_name,
            role: attributes.role,
            password_hash,
            created_at: Utc::now(),
        })
    }

    /// Verifies a login attempt against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.password_hash).unwrap_or(false)
    }

    /// True for administrative accounts
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> NewUser {
        NewUser {
            email: "jdoe@university.edu".to_string(),
            username: "jdoe".to_string(),
            first_name: "Jamie".to_string(),
            last_name: "Doe".to_string(),
            role: UserRole::User,
            password: "correct horse battery".to_string(),
        }
    }

    #[test]
    fn test_register_hashes_password() {
        let user = User::register(registration()).unwrap();
        assert_ne!(user.password_hash, "correct horse battery");
        assert!(user.verify_password("correct horse battery"));
        assert!(!user.verify_password("wrong"));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let mut attrs = registration();
        attrs.password = "short".to_string();
        assert!(matches!(
            User::register(attrs),
            Err(RegistryError::Validation(_))
        ));
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let mut attrs = registration();
        attrs.email = "not-an-email".to_string();
        assert!(User::register(attrs).is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::register(registration()).unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
    }
}
