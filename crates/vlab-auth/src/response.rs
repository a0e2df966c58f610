//! Interpretation of backend answers.

use serde::de::DeserializeOwned;

use crate::user::{ErrorBody, LoginResponse, User, UserResponse};
use crate::{AuthError, Result};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const PROFILE_FETCH_FAILED: &str = "Failed to fetch profile";
pub const PROFILE_UPDATE_FAILED: &str = "Failed to update profile";

/// Status code and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn interpret<T: DeserializeOwned>(&self, fallback: &str) -> Result<T> {
        if self.is_success() {
            return Ok(serde_json::from_str(&self.body)?);
        }
        let message = serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        if self.status == 401 {
            Err(AuthError::Unauthorized(message))
        } else {
            Err(AuthError::Rejected {
                status: self.status,
                message,
            })
        }
    }

    pub fn login(&self) -> Result<LoginResponse> {
        self.interpret(LOGIN_FAILED)
    }

    pub fn register(&self) -> Result<LoginResponse> {
        self.interpret(REGISTRATION_FAILED)
    }

    pub fn me(&self) -> Result<User> {
        self.interpret::<UserResponse>(PROFILE_FETCH_FAILED).map(|r| r.user)
    }

    pub fn update_user(&self) -> Result<User> {
        self.interpret::<UserResponse>(PROFILE_UPDATE_FAILED).map(|r| r.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = r#"{"id":1,"username":"ada","email":"ada@example.com","created_at":"2024-03-09T10:00:00"}"#;

    #[test]
    fn test_login_success() {
        let body = format!(r#"{{"token":"abc","user":{USER}}}"#);
        let resp = ApiResponse::new(200, body).login().unwrap();
        assert_eq!(resp.token, "abc");
        assert_eq!(resp.user.username, "ada");
    }

    #[test]
    fn test_error_message_from_body() {
        let err = ApiResponse::new(400, r#"{"error":"Invalid credentials"}"#).login().unwrap_err();
        assert!(matches!(err, AuthError::Rejected { status: 400, .. }));
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(ApiResponse::new(500, "").login().unwrap_err().message(), "Login failed");
        assert_eq!(ApiResponse::new(500, "{}").me().unwrap_err().message(), "Failed to fetch profile");
        assert_eq!(
            ApiResponse::new(422, r#"{"error":""}"#).update_user().unwrap_err().message(),
            "Failed to update profile"
        );
        assert_eq!(ApiResponse::new(409, "oops").register().unwrap_err().message(), "Registration failed");
    }

    #[test]
    fn test_unauthorized() {
        let err = ApiResponse::new(401, r#"{"error":"Token expired"}"#).me().unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "Token expired");
    }

    #[test]
    fn test_bad_success_body_is_network_error() {
        let err = ApiResponse::new(200, "<html>").me().unwrap_err();
        assert!(matches!(err, AuthError::Parse(_)));
        assert_eq!(err.message(), "Network error. Please try again.");
    }

    #[test]
    fn test_me_unwraps_user() {
        let user = ApiResponse::new(200, format!(r#"{{"user":{USER}}}"#)).me().unwrap();
        assert_eq!(user.id, 1);
    }
}
