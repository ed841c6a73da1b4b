// Pages module
// Per-route page state and the dispatch of events and gateway results to it

pub mod badges;
pub mod home;
pub mod login;
pub mod user_form;
pub mod users;
pub mod view_mode;

use tracing::debug;

use crate::core::effects::{Effects, Outcome};
use crate::core::events::{AppEvent, InputMode};
use crate::routing::Route;

pub use badges::BadgesPage;
pub use home::{Counter, CounterError, HomePage};
pub use login::LoginPage;
pub use user_form::{FieldSource, FormMode, ProfileImagePreview, UserFormPage};
pub use users::{RowAction, UsersPage};
pub use view_mode::{ButtonColor, ModeControls, ViewMode};

/// The page mounted for the current route
#[derive(Debug)]
pub enum Page {
    Home(HomePage),
    Login(LoginPage),
    Users(UsersPage),
    UserForm(UserFormPage),
    Badges(BadgesPage),
    NotFound(String),
}

impl Page {
    /// Build a fresh page for `route`; `mount` tags its gateway requests
    pub fn for_route(route: &Route, mount: u64) -> Self {
        match route {
            Route::Home => Page::Home(HomePage::new()),
            Route::Login => Page::Login(LoginPage::new()),
            Route::Users => Page::Users(UsersPage::new(mount)),
            Route::UserCreate => Page::UserForm(UserFormPage::new(mount, FormMode::Create)),
            Route::UserEdit(id) => Page::UserForm(UserFormPage::new(mount, FormMode::Edit(id.clone()))),
            Route::Badges => Page::Badges(BadgesPage::new(mount)),
            Route::NotFound(path) => Page::NotFound(path.clone()),
        }
    }

    /// Requests to issue when the page is first shown
    pub fn mount(&mut self) -> Effects {
        match self {
            Page::Users(page) => page.mount(),
            Page::UserForm(page) => page.mount(),
            Page::Badges(page) => page.mount(),
            Page::Home(_) | Page::Login(_) | Page::NotFound(_) => Effects::none(),
        }
    }

    pub fn input_mode(&self) -> InputMode {
        match self {
            Page::UserForm(_) | Page::Login(_) => InputMode::Text,
            _ => InputMode::Navigation,
        }
    }

    pub fn handle_event(&mut self, event: &AppEvent) -> Effects {
        match self {
            Page::Home(page) => page.handle_event(event),
            Page::Login(page) => page.handle_event(event),
            Page::Users(page) => page.handle_event(event),
            Page::UserForm(page) => page.handle_event(event),
            Page::Badges(page) => page.handle_event(event),
            Page::NotFound(_) => Effects::none(),
        }
    }

    /// Hand a gateway result to the page that requested it
    pub fn apply(&mut self, outcome: Outcome) -> Effects {
        match (self, outcome) {
            (Page::Users(page), Outcome::UsersLoaded { ticket, result }) => {
                page.on_users_loaded(ticket, result)
            }
            (Page::Users(page), Outcome::UserDeleted { id, result, .. }) => page.on_user_deleted(id, result),
            (Page::Badges(page), Outcome::UsersLoaded { ticket, result }) => {
                page.on_users_loaded(ticket, result)
            }
            (Page::UserForm(page), Outcome::UserLoaded { result, .. }) => page.on_user_loaded(result),
            (Page::UserForm(page), Outcome::UserSaved { result, .. }) => page.on_user_saved(result),
            (_, outcome) => {
                debug!(ticket = ?outcome.ticket(), "outcome has no handler on this page");
                Effects::none()
            }
        }
    }
}
