//! Form state of the login, register and profile pages.

use crate::user::{Credentials, ProfileUpdate, Registration, User};

pub const PROFILE_UPDATED: &str = "Profile updated successfully!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

impl LoginForm {
    /// Update a field by input name. Typing clears the error.
    pub fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "username" => self.username = value.to_string(),
            "password" => self.password = value.to_string(),
            _ => return,
        }
        self.error = None;
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    pub fn submit_label(busy: bool) -> &'static str {
        if busy {
            "Logging in..."
        } else {
            "Login"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
}

impl RegisterForm {
    pub fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "username" => self.username = value.to_string(),
            "email" => self.email = value.to_string(),
            "password" => self.password = value.to_string(),
            _ => return,
        }
        self.error = None;
    }

    pub fn registration(&self) -> Registration {
        Registration {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMode {
    Viewing,
    Editing,
}

/// Profile page: shows the user and edits username and email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    user: User,
    mode: ProfileMode,
    pub username: String,
    pub email: String,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ProfileEditor {
    pub fn new(user: User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            user,
            mode: ProfileMode::Viewing,
            message: None,
            error: None,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn mode(&self) -> ProfileMode {
        self.mode
    }

    pub fn begin_edit(&mut self) {
        self.mode = ProfileMode::Editing;
    }

    /// Leave edit mode, restoring the fields from the user.
    pub fn cancel(&mut self) {
        self.mode = ProfileMode::Viewing;
        self.username = self.user.username.clone();
        self.email = self.user.email.clone();
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "username" => self.username = value.to_string(),
            "email" => self.email = value.to_string(),
            _ => {}
        }
    }

    /// Body for the update request; clears old banners.
    pub fn start_update(&mut self) -> ProfileUpdate {
        self.message = None;
        self.error = None;
        ProfileUpdate {
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    pub fn apply_success(&mut self, user: User) {
        self.user = user;
        self.mode = ProfileMode::Viewing;
        self.username = self.user.username.clone();
        self.email = self.user.email.clone();
        self.message = Some(PROFILE_UPDATED.to_string());
    }

    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn submit_label(busy: bool) -> &'static str {
        if busy {
            "Updating..."
        } else {
            "Save Changes"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 4,
            username: "ada".into(),
            email: "ada@example.com".into(),
            created_at: String::new(),
        }
    }

    #[test]
    fn test_typing_clears_login_error() {
        let mut form = LoginForm {
            error: Some("Login failed".into()),
            ..LoginForm::default()
        };
        form.set_field("unknown", "x");
        assert!(form.error.is_some());
        form.set_field("username", "ada");
        assert!(form.error.is_none());
        assert_eq!(form.credentials().username, "ada");
    }

    #[test]
    fn test_cancel_restores_fields() {
        let mut editor = ProfileEditor::new(user());
        editor.begin_edit();
        editor.set_field("username", "grace");
        editor.cancel();
        assert_eq!(editor.mode(), ProfileMode::Viewing);
        assert_eq!(editor.username, "ada");
    }

    #[test]
    fn test_update_success() {
        let mut editor = ProfileEditor::new(user());
        editor.begin_edit();
        editor.set_field("email", "new@example.com");
        let body = editor.start_update();
        assert_eq!(body.email, "new@example.com");

        let mut updated = user();
        updated.email = body.email;
        editor.apply_success(updated);
        assert_eq!(editor.mode(), ProfileMode::Viewing);
        assert_eq!(editor.message.as_deref(), Some("Profile updated successfully!"));
        assert_eq!(editor.user().email, "new@example.com");
    }

    #[test]
    fn test_update_error_keeps_edit_mode() {
        let mut editor = ProfileEditor::new(user());
        editor.begin_edit();
        editor.start_update();
        editor.apply_error("Failed to update profile".into());
        assert_eq!(editor.mode(), ProfileMode::Editing);
        assert!(editor.message.is_none());
    }
}
