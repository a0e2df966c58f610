//! Backend requests, built without touching the network.

use serde::{Deserialize, Serialize};

use crate::user::{Credentials, ProfileUpdate, Registration};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

/// One HTTP request against the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, starting with `/`.
    pub path: String,
    pub bearer: Option<String>,
    /// JSON body.
    pub body: Option<String>,
}

impl ApiRequest {
    /// `POST /api/login`
    pub fn login(credentials: &Credentials) -> Result<Self> {
        Ok(Self {
            method: Method::Post,
            path: "/api/login".to_string(),
            bearer: None,
            body: Some(serde_json::to_string(credentials)?),
        })
    }

    /// `POST /api/register`
    pub fn register(registration: &Registration) -> Result<Self> {
        Ok(Self {
            method: Method::Post,
            path: "/api/register".to_string(),
            bearer: None,
            body: Some(serde_json::to_string(registration)?),
        })
    }

    /// `GET /api/me`
    pub fn me(token: &str) -> Self {
        Self {
            method: Method::Get,
            path: "/api/me".to_string(),
            bearer: Some(token.to_string()),
            body: None,
        }
    }

    /// `PATCH /api/users/{id}`
    pub fn update_user(token: &str, id: u64, update: &ProfileUpdate) -> Result<Self> {
        Ok(Self {
            method: Method::Patch,
            path: format!("/api/users/{id}"),
            bearer: Some(token.to_string()),
            body: Some(serde_json::to_string(update)?),
        })
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }

    /// Header pairs to send.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        if let Some(token) = &self.bearer {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request() {
        let req = ApiRequest::login(&Credentials {
            username: "ada".into(),
            password: "pw".into(),
        })
        .unwrap();
        assert_eq!(req.method.as_str(), "POST");
        assert_eq!(req.url("http://localhost:5000/"), "http://localhost:5000/api/login");
        assert_eq!(req.body.as_deref(), Some(r#"{"username":"ada","password":"pw"}"#));
        assert_eq!(req.headers().len(), 1);
    }

    #[test]
    fn test_authorized_requests() {
        let me = ApiRequest::me("tok");
        assert_eq!(me.method, Method::Get);
        assert!(me.body.is_none());
        assert!(me.headers().contains(&("Authorization", "Bearer tok".to_string())));

        let update = ApiRequest::update_user(
            "tok",
            7,
            &ProfileUpdate {
                username: "ada".into(),
                email: "a@b.c".into(),
            },
        )
        .unwrap();
        assert_eq!(update.method.as_str(), "PATCH");
        assert_eq!(update.path, "/api/users/7");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(
            ApiRequest::me("t").url(&ApiConfig::default().base_url),
            "http://localhost:5000/api/me"
        );
    }
}
