// ============================================================================
// AUTH VIEWMODEL - Validación local de login / registro
// ============================================================================

use crate::models::{LoginRequest, RegisterRequest};
use crate::services::FieldErrors;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

fn check_username(username: &str, errors: &mut FieldErrors) {
    if username.trim().is_empty() {
        errors.insert("username", "Username is required");
    } else if username.trim().chars().count() < MIN_USERNAME_LEN {
        errors.insert("username", "Username must be at least 3 characters");
    }
}

fn check_password(password: &str, errors: &mut FieldErrors) {
    if password.is_empty() {
        errors.insert("password", "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", "Password must be at least 6 characters");
    }
}

/// Request ready to send, or the per-field reasons it is not
pub fn validate_login(username: &str, password: &str) -> Result<LoginRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    check_username(username, &mut errors);
    check_password(password, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    })
}

pub fn validate_signup(username: &str, email: &str, password: &str) -> Result<RegisterRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    check_username(username, &mut errors);

    let email = email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !email.contains('@') {
        errors.insert("email", "Email is invalid");
    }

    check_password(password, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(RegisterRequest {
        username: username.trim().to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_login_is_trimmed() {
        let request = validate_login("  admin ", "admin123").unwrap();
        assert_eq!(request.username, "admin");
        assert_eq!(request.password, "admin123");
    }

    #[test]
    fn short_fields_are_reported_per_field() {
        let errors = validate_login("ab", "12345").unwrap_err();
        assert_eq!(errors.get("username"), Some("Username must be at least 3 characters"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
        assert!(errors.general.is_none());
    }

    #[test]
    fn missing_fields_are_required() {
        let errors = validate_login("", "").unwrap_err();
        assert_eq!(errors.get("username"), Some("Username is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn signup_needs_an_at_sign() {
        let errors = validate_signup("ana", "ana.corp.io", "secret1").unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is invalid"));
        assert_eq!(errors.fields.len(), 1);

        let request = validate_signup("ana", " ana@corp.io ", "secret1").unwrap();
        assert_eq!(request.email, "ana@corp.io");
    }
}
