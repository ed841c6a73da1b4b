// Login Page
// Records the operator name for the session

use tracing::info;

use crate::core::effects::{Effects, Notice};
use crate::core::events::AppEvent;
use crate::routing::Route;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("username is required")]
    UsernameRequired,
}

/// State of the login page
#[derive(Debug, Default)]
pub struct LoginPage {
    pub username: String,
    password: String,
    focus: LoginField,
    error: Option<LoginError>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &AppEvent) -> Effects {
        match event {
            AppEvent::Input(c) => self.focused_mut().push(*c),
            AppEvent::Backspace => {
                self.focused_mut().pop();
            }
            AppEvent::NextField | AppEvent::SelectNext | AppEvent::SelectPrevious => {
                self.focus = match self.focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
            }
            AppEvent::Activate => return self.submit(),
            _ => {}
        }
        Effects::none()
    }

    /// Sign in with the entered username; credentials are not checked
    pub fn submit(&mut self) -> Effects {
        let username = self.username.trim();
        if username.is_empty() {
            self.error = Some(LoginError::UsernameRequired);
            return Effects::none();
        }
        self.error = None;

        info!(operator = username, "signed in");
        let mut effects = Effects::navigate(Route::Users)
            .with_notice(Notice::info(format!("Signed in as {}", username)));
        effects.sign_in = Some(username.to_string());
        self.password.clear();
        effects
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn focus(&self) -> LoginField {
        self.focus
    }

    /// Password rendered as mask characters
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }

    pub fn error(&self) -> Option<&LoginError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_is_rejected() {
        let mut page = LoginPage::new();
        assert!(page.submit().is_empty());
        assert_eq!(page.error(), Some(&LoginError::UsernameRequired));
    }

    #[test]
    fn test_sign_in_records_operator_and_opens_users() {
        let mut page = LoginPage::new();
        for c in "ann".chars() {
            page.handle_event(&AppEvent::Input(c));
        }
        page.handle_event(&AppEvent::NextField);
        for c in "pw".chars() {
            page.handle_event(&AppEvent::Input(c));
        }
        assert_eq!(page.masked_password(), "**");

        let effects = page.handle_event(&AppEvent::Activate);
        assert_eq!(effects.sign_in.as_deref(), Some("ann"));
        assert_eq!(effects.navigate, Some(Route::Users));
        assert_eq!(page.masked_password(), "");
    }
}
