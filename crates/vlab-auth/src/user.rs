//! Wire types of the backend.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    /// ISO-8601 timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: String,
}

impl User {
    /// Calendar date of `created_at`, if it parses.
    pub fn member_since(&self) -> Option<NaiveDate> {
        let s = self.created_at.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt.date());
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Username or email.
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
}

/// Body of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Body of `GET /api/me` and `PATCH /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(created_at: &str) -> User {
        User {
            id: 1,
            username: "ada".into(),
            email: "ada@example.com".into(),
            created_at: created_at.into(),
        }
    }

    #[test]
    fn test_member_since_formats() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!(user("2024-03-09T10:11:12Z").member_since(), d);
        assert_eq!(user("2024-03-09T10:11:12+05:30").member_since(), d);
        assert_eq!(user("2024-03-09T10:11:12.123456").member_since(), d);
        assert_eq!(user("2024-03-09 10:11:12").member_since(), d);
        assert_eq!(user("2024-03-09").member_since(), d);
        assert_eq!(user("yesterday").member_since(), None);
        assert_eq!(user("").member_since(), None);
    }

    #[test]
    fn test_user_without_created_at() {
        let u: User = serde_json::from_str(r#"{"id":3,"username":"x","email":"x@y"}"#).unwrap();
        assert_eq!(u.created_at, "");
    }
}
