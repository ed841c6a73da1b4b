// Users Page
// User list with card/table layouts, create and delete-with-refresh

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::view_mode::{ModeControls, ViewMode};
use crate::core::effects::{Command, Effects, Notice, Ticket, TicketIssuer};
use crate::core::events::AppEvent;
use crate::gateway::GatewayError;
use crate::models::{UserId, UserRecord};
use crate::routing::Route;

/// Row-level actions shared by the card and table layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Open(UserId),
    Delete(UserId),
}

/// State of the user list page
#[derive(Debug)]
pub struct UsersPage {
    tickets: TicketIssuer,

    /// Snapshot from the last applied fetch, replaced wholesale
    users: Arc<[UserRecord]>,

    view_mode: ViewMode,

    /// Cursor over `users`
    selected: usize,

    /// Sequence number of the most recently issued load
    latest_load: Option<u64>,

    /// A load is in flight
    loading: bool,

    /// Ids with a delete request in flight
    pending_deletes: HashSet<UserId>,
}

impl UsersPage {
    pub fn new(mount: u64) -> Self {
        Self {
            tickets: TicketIssuer::new(mount),
            users: Arc::from(Vec::<UserRecord>::new()),
            view_mode: ViewMode::default(),
            selected: 0,
            latest_load: None,
            loading: false,
            pending_deletes: HashSet::new(),
        }
    }

    /// Initial load when the page is shown
    pub fn mount(&mut self) -> Effects {
        self.load()
    }

    /// Request the full user collection
    pub fn load(&mut self) -> Effects {
        let ticket = self.tickets.issue();
        self.latest_load = Some(ticket.seq);
        self.loading = true;
        Effects::command(Command::FetchUsers { ticket })
    }

    pub fn change_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn navigate_to_create(&self) -> Effects {
        Effects::navigate(Route::UserCreate)
    }

    /// Request deletion of `id`; the list is re-fetched once the service answers
    ///
    /// A second delete of an id whose request is still in flight is ignored.
    pub fn delete_user(&mut self, id: UserId) -> Effects {
        if !self.pending_deletes.insert(id.clone()) {
            debug!(%id, "delete already in flight, ignoring");
            return Effects::none();
        }

        let ticket = self.tickets.issue();
        Effects::command(Command::DeleteUser { ticket, id })
    }

    pub fn row_action(&mut self, action: RowAction) -> Effects {
        match action {
            RowAction::Open(id) => Effects::navigate(Route::UserEdit(id)),
            RowAction::Delete(id) => self.delete_user(id),
        }
    }

    pub fn handle_event(&mut self, event: &AppEvent) -> Effects {
        match event {
            AppEvent::ShowCards => self.change_view_mode(ViewMode::Card),
            AppEvent::ShowTable => self.change_view_mode(ViewMode::Table),
            AppEvent::SelectPrevious => self.select_previous(),
            AppEvent::SelectNext => self.select_next(),
            AppEvent::Create => return self.navigate_to_create(),
            AppEvent::Refresh => return self.load(),
            AppEvent::Activate => {
                if let Some(id) = self.selected_user().map(|u| u.id.clone()) {
                    return self.row_action(RowAction::Open(id));
                }
            }
            AppEvent::Delete => {
                if let Some(id) = self.selected_user().map(|u| u.id.clone()) {
                    return self.row_action(RowAction::Delete(id));
                }
            }
            _ => {}
        }
        Effects::none()
    }

    /// Apply a finished collection fetch
    ///
    /// Only the most recently issued load is applied. On failure the last
    /// known-good collection stays on screen.
    pub fn on_users_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<UserRecord>, GatewayError>,
    ) -> Effects {
        if self.latest_load != Some(ticket.seq) {
            debug!(seq = ticket.seq, latest = ?self.latest_load, "dropping stale user list");
            return Effects::none();
        }
        self.loading = false;

        match result {
            Ok(users) => {
                debug!(count = users.len(), "user list loaded");
                self.users = Arc::from(users);
                self.clamp_selection();
                Effects::none()
            }
            Err(e) => {
                warn!(error = %e, "failed to load users");
                Effects::notice(Notice::error(format!("Could not load users: {}", e)))
            }
        }
    }

    /// Apply a finished delete and re-fetch the collection
    pub fn on_user_deleted(&mut self, id: UserId, result: Result<(), GatewayError>) -> Effects {
        self.pending_deletes.remove(&id);

        let notice = match result {
            Ok(()) => {
                info!(%id, "user deleted");
                Notice::info(format!("Deleted user {}", id))
            }
            Err(e) => {
                warn!(%id, error = %e, "failed to delete user");
                Notice::error(format!("Could not delete user {}: {}", id, e))
            }
        };

        // Server state is unknown after a failure too, so always re-fetch
        self.load().with_notice(notice)
    }

    pub fn users(&self) -> &Arc<[UserRecord]> {
        &self.users
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn mode_controls(&self) -> ModeControls {
        self.view_mode.button_colors()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.users.get(self.selected)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_delete_pending(&self, id: &UserId) -> bool {
        self.pending_deletes.contains(id)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let max = self.users.len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.users.len() {
            self.selected = self.users.len().saturating_sub(1);
        }
    }
}
