use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::RESERVED_HANDLES;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const REGISTERED: &str = "Account created. You can log in now.";

pub const ADMIN_ROLE: &str = "admin";

const HANDLE_LEN: std::ops::RangeInclusive<usize> = 3..=30;
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password is required")]
    MissingPassword,
    #[error("Password must be at least 6 characters")]
    ShortPassword,
    #[error("Username must be between 3 and 30 characters")]
    HandleLength,
    #[error("Username may only contain lowercase letters, numbers, '.', '_' and '-'")]
    HandleCharacters,
    #[error("Username \"{0}\" is reserved")]
    ReservedHandle(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            password: password.to_owned(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_owned(),
            email: email.trim().to_owned(),
            password: password.to_owned(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_handle(&self.username)?;

        if self.email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        match self.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(ValidationError::InvalidEmail),
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::ShortPassword);
        }
        Ok(())
    }
}

/// A handle becomes part of a public URL, so it is kept URL-safe.
pub fn validate_handle(handle: &str) -> Result<(), ValidationError> {
    if !HANDLE_LEN.contains(&handle.chars().count()) {
        return Err(ValidationError::HandleLength);
    }
    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || "._-".contains(c);
    if !handle.chars().all(allowed) {
        return Err(ValidationError::HandleCharacters);
    }
    if RESERVED_HANDLES.contains(&handle) {
        return Err(ValidationError::ReservedHandle(handle.to_owned()));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Where a freshly logged-in visitor is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Admin,
    Dashboard,
}

impl Destination {
    pub fn for_role(role: &str) -> Destination {
        if role == ADMIN_ROLE {
            Destination::Admin
        } else {
            Destination::Dashboard
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Destination::Admin => "/admin",
            Destination::Dashboard => "/dashboard",
        }
    }
}

impl Session {
    pub fn destination(&self) -> Destination {
        Destination::for_role(&self.user.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: &str) -> Session {
        Session {
            token: "t0k3n".into(),
            user: User {
                id: "u1".into(),
                username: "alex".into(),
                email: "alex@example.com".into(),
                role: role.into(),
            },
        }
    }

    #[test]
    fn admins_go_to_admin_everyone_else_to_dashboard() {
        assert_eq!(session("admin").destination().path(), "/admin");
        for role in ["user", "creator", "", "Admin", "administrator"] {
            assert_eq!(session(role).destination(), Destination::Dashboard, "{role:?}");
        }
    }

    #[test]
    fn parses_login_response() {
        let json = r#"{
            "token": "abc",
            "user": { "_id": "65f0", "username": "alex", "email": "alex@example.com", "role": "admin" }
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.id, "65f0");
        assert_eq!(session.destination(), Destination::Admin);
    }

    #[test]
    fn credentials_need_both_fields() {
        assert_eq!(
            Credentials::new("  ", "secret").validate(),
            Err(ValidationError::MissingEmail)
        );
        assert_eq!(
            Credentials::new("alex@example.com", "").validate(),
            Err(ValidationError::MissingPassword)
        );
        assert_eq!(Credentials::new(" alex@example.com ", "x").email, "alex@example.com");
        assert!(Credentials::new("alex@example.com", "x").validate().is_ok());
    }

    #[test]
    fn handle_rules() {
        assert!(validate_handle("alex").is_ok());
        assert!(validate_handle("a.b_c-9").is_ok());
        assert_eq!(validate_handle("al"), Err(ValidationError::HandleLength));
        assert_eq!(validate_handle(&"a".repeat(31)), Err(ValidationError::HandleLength));
        assert_eq!(validate_handle("Alex"), Err(ValidationError::HandleCharacters));
        assert_eq!(validate_handle("al ex"), Err(ValidationError::HandleCharacters));
        assert_eq!(validate_handle("al/ex"), Err(ValidationError::HandleCharacters));
        assert_eq!(
            validate_handle("pricing"),
            Err(ValidationError::ReservedHandle("pricing".into()))
        );
        assert_eq!(
            validate_handle("robots.txt"),
            Err(ValidationError::ReservedHandle("robots.txt".into()))
        );
        assert!(validate_handle("favicon.ico").is_err());
    }

    #[test]
    fn registration_rules() {
        assert!(Registration::new("alex", "alex@example.com", "hunter22").validate().is_ok());
        assert_eq!(
            Registration::new("alex", "alex.example.com", "hunter22").validate(),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            Registration::new("alex", "", "hunter22").validate(),
            Err(ValidationError::MissingEmail)
        );
        assert_eq!(
            Registration::new("alex", "alex@example.com", "12345").validate(),
            Err(ValidationError::ShortPassword)
        );
        assert_eq!(
            ValidationError::ShortPassword.to_string(),
            "Password must be at least 6 characters"
        );
    }
}
