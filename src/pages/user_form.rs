// User Form Page
// Create and edit a single user, with a profile image preview

use tracing::{info, warn};

use crate::core::effects::{Command, Effects, Notice, TicketIssuer};
use crate::core::events::AppEvent;
use crate::gateway::GatewayError;
use crate::models::{UserDraft, UserId, UserRecord};
use crate::routing::Route;

/// Read access to one named form field
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;
}

/// Preview of the image reference currently typed into a form
pub struct ProfileImagePreview<'a> {
    source: &'a dyn FieldSource,
}

impl<'a> ProfileImagePreview<'a> {
    pub const FIELD: &'static str = "image";

    pub fn new(source: &'a dyn FieldSource) -> Self {
        Self { source }
    }

    /// Current image reference, if one has been entered
    pub fn image(&self) -> Option<&'a str> {
        let source: &'a dyn FieldSource = self.source;
        source
            .field(Self::FIELD)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(UserId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Image,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Image,
            FormField::Image => FormField::Name,
        }
    }
}

/// Inline validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("name is required")]
    NameRequired,
}

/// State of the user create/edit page
#[derive(Debug)]
pub struct UserFormPage {
    tickets: TicketIssuer,
    mode: FormMode,
    pub name: String,
    pub image: String,
    focus: FormField,
    /// Waiting for the existing record in edit mode
    loading: bool,
    /// A save request is in flight
    saving: bool,
    error: Option<FormError>,
}

impl UserFormPage {
    pub fn new(mount: u64, mode: FormMode) -> Self {
        Self {
            tickets: TicketIssuer::new(mount),
            mode,
            name: String::new(),
            image: String::new(),
            focus: FormField::Name,
            loading: false,
            saving: false,
            error: None,
        }
    }

    /// Fetch the record being edited; create mode starts empty
    pub fn mount(&mut self) -> Effects {
        match &self.mode {
            FormMode::Create => Effects::none(),
            FormMode::Edit(id) => {
                self.loading = true;
                let ticket = self.tickets.issue();
                Effects::command(Command::FetchUser {
                    ticket,
                    id: id.clone(),
                })
            }
        }
    }

    pub fn handle_event(&mut self, event: &AppEvent) -> Effects {
        match event {
            AppEvent::Input(c) => self.focused_mut().push(*c),
            AppEvent::Backspace => {
                self.focused_mut().pop();
            }
            AppEvent::NextField | AppEvent::SelectNext | AppEvent::SelectPrevious => {
                self.focus = self.focus.next();
            }
            AppEvent::Activate => return self.submit(),
            _ => {}
        }
        Effects::none()
    }

    /// Validate and send the draft to the service
    pub fn submit(&mut self) -> Effects {
        if self.saving || self.loading {
            return Effects::none();
        }

        if self.name.trim().is_empty() {
            self.error = Some(FormError::NameRequired);
            return Effects::none();
        }
        self.error = None;
        self.saving = true;

        let draft = UserDraft {
            name: self.name.trim().to_string(),
            image: self.image.trim().to_string(),
        };
        let ticket = self.tickets.issue();

        let command = match &self.mode {
            FormMode::Create => Command::CreateUser { ticket, draft },
            FormMode::Edit(id) => Command::UpdateUser {
                ticket,
                id: id.clone(),
                draft,
            },
        };
        Effects::command(command)
    }

    pub fn on_user_loaded(&mut self, result: Result<UserRecord, GatewayError>) -> Effects {
        self.loading = false;
        match result {
            Ok(user) => {
                self.name = user.name;
                self.image = user.image;
                Effects::none()
            }
            Err(e) => {
                warn!(error = %e, "failed to load user");
                Effects::notice(Notice::error(format!("Could not load user: {}", e)))
            }
        }
    }

    pub fn on_user_saved(&mut self, result: Result<UserRecord, GatewayError>) -> Effects {
        self.saving = false;
        match result {
            Ok(user) => {
                info!(id = %user.id, "user saved");
                Effects::navigate(Route::Users).with_notice(Notice::info(format!("Saved {}", user.name)))
            }
            Err(e) => {
                warn!(error = %e, "failed to save user");
                Effects::notice(Notice::error(format!("Could not save user: {}", e)))
            }
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Image => &mut self.image,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn title(&self) -> String {
        match &self.mode {
            FormMode::Create => "Create User".to_string(),
            FormMode::Edit(id) => format!("Edit User #{}", id),
        }
    }
}

impl FieldSource for UserFormPage {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "image" => Some(&self.image),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(page: &mut UserFormPage, text: &str) {
        for c in text.chars() {
            page.handle_event(&AppEvent::Input(c));
        }
    }

    #[test]
    fn test_create_mode_needs_no_fetch() {
        let mut page = UserFormPage::new(1, FormMode::Create);
        assert!(page.mount().is_empty());
    }

    #[test]
    fn test_edit_mode_fills_fields_from_service() {
        let mut page = UserFormPage::new(1, FormMode::Edit(UserId::Number(2)));
        let effects = page.mount();
        assert!(matches!(
            effects.commands.as_slice(),
            [Command::FetchUser { id: UserId::Number(2), .. }]
        ));
        assert!(page.is_loading());

        page.on_user_loaded(Ok(UserRecord::new(2u64, "Bo", "b.png")));

        assert_eq!(page.name, "Bo");
        assert_eq!(page.image, "b.png");
        assert!(!page.is_loading());
    }

    #[test]
    fn test_empty_name_is_rejected_inline() {
        let mut page = UserFormPage::new(1, FormMode::Create);
        let effects = page.handle_event(&AppEvent::Activate);

        assert!(effects.is_empty());
        assert_eq!(page.error(), Some(&FormError::NameRequired));
    }

    #[test]
    fn test_submit_creates_trimmed_draft() {
        let mut page = UserFormPage::new(1, FormMode::Create);
        type_text(&mut page, " Cy ");
        page.handle_event(&AppEvent::NextField);
        type_text(&mut page, "c.png");

        let effects = page.submit();
        match effects.commands.as_slice() {
            [Command::CreateUser { draft, .. }] => {
                assert_eq!(draft.name, "Cy");
                assert_eq!(draft.image, "c.png");
            }
            other => panic!("expected create, got {:?}", other),
        }
        assert!(page.is_saving());
        assert!(page.submit().is_empty());
    }

    #[test]
    fn test_submit_in_edit_mode_updates() {
        let mut page = UserFormPage::new(1, FormMode::Edit(UserId::Number(5)));
        page.mount();
        page.on_user_loaded(Ok(UserRecord::new(5u64, "Eve", "e.png")));

        let effects = page.submit();
        assert!(matches!(
            effects.commands.as_slice(),
            [Command::UpdateUser { id: UserId::Number(5), .. }]
        ));
    }

    #[test]
    fn test_saved_user_returns_to_list() {
        let mut page = UserFormPage::new(1, FormMode::Create);
        type_text(&mut page, "Cy");
        page.submit();

        let effects = page.on_user_saved(Ok(UserRecord::new(3u64, "Cy", "")));
        assert_eq!(effects.navigate, Some(Route::Users));
        assert!(!page.is_saving());
    }

    #[test]
    fn test_failed_save_stays_on_form() {
        let mut page = UserFormPage::new(1, FormMode::Create);
        type_text(&mut page, "Cy");
        page.submit();

        let effects = page.on_user_saved(Err(GatewayError::Unavailable("down".into())));
        assert!(effects.navigate.is_none());
        assert!(effects.notice.is_some());
        assert_eq!(page.name, "Cy");
    }

    #[test]
    fn test_preview_reads_image_field_only() {
        let mut page = UserFormPage::new(1, FormMode::Create);
        type_text(&mut page, "Ann");
        assert_eq!(ProfileImagePreview::new(&page).image(), None);

        page.handle_event(&AppEvent::NextField);
        type_text(&mut page, "a.png");
        page.handle_event(&AppEvent::Backspace);

        assert_eq!(ProfileImagePreview::new(&page).image(), Some("a.pn"));
    }
}
