// Badges Page
// One badge per user from the user service

use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::effects::{Command, Effects, Notice, Ticket, TicketIssuer};
use crate::core::events::AppEvent;
use crate::gateway::GatewayError;
use crate::models::UserRecord;

#[derive(Debug)]
pub struct BadgesPage {
    tickets: TicketIssuer,
    users: Arc<[UserRecord]>,
    latest_load: Option<u64>,
    loading: bool,
}

impl BadgesPage {
    pub fn new(mount: u64) -> Self {
        Self {
            tickets: TicketIssuer::new(mount),
            users: Arc::from(Vec::<UserRecord>::new()),
            latest_load: None,
            loading: false,
        }
    }

    pub fn mount(&mut self) -> Effects {
        self.load()
    }

    pub fn load(&mut self) -> Effects {
        let ticket = self.tickets.issue();
        self.latest_load = Some(ticket.seq);
        self.loading = true;
        Effects::command(Command::FetchUsers { ticket })
    }

    pub fn handle_event(&mut self, event: &AppEvent) -> Effects {
        match event {
            AppEvent::Refresh => self.load(),
            _ => Effects::none(),
        }
    }

    pub fn on_users_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<UserRecord>, GatewayError>,
    ) -> Effects {
        if self.latest_load != Some(ticket.seq) {
            debug!(seq = ticket.seq, "dropping stale badge list");
            return Effects::none();
        }
        self.loading = false;

        match result {
            Ok(users) => {
                self.users = Arc::from(users);
                Effects::none()
            }
            Err(e) => {
                warn!(error = %e, "failed to load badges");
                Effects::notice(Notice::error(format!("Could not load badges: {}", e)))
            }
        }
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
