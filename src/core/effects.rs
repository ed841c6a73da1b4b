// Effects
// Gateway requests issued by pages and the results that come back

use crate::gateway::GatewayError;
use crate::models::{UserDraft, UserId, UserRecord};
use crate::routing::Route;

/// Tags a gateway request with the page instance that issued it
///
/// `mount` changes every time a page is mounted, so results for a page that
/// has since been navigated away from can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub mount: u64,
    pub seq: u64,
}

/// Hands out tickets for one page instance
#[derive(Debug, Clone)]
pub struct TicketIssuer {
    mount: u64,
    next_seq: u64,
}

impl TicketIssuer {
    pub fn new(mount: u64) -> Self {
        Self { mount, next_seq: 0 }
    }

    pub fn issue(&mut self) -> Ticket {
        let ticket = Ticket {
            mount: self.mount,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        ticket
    }
}

/// A gateway call requested by a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchUsers { ticket: Ticket },
    FetchUser { ticket: Ticket, id: UserId },
    CreateUser { ticket: Ticket, draft: UserDraft },
    UpdateUser { ticket: Ticket, id: UserId, draft: UserDraft },
    DeleteUser { ticket: Ticket, id: UserId },
}

impl Command {
    pub fn ticket(&self) -> Ticket {
        match self {
            Command::FetchUsers { ticket }
            | Command::FetchUser { ticket, .. }
            | Command::CreateUser { ticket, .. }
            | Command::UpdateUser { ticket, .. }
            | Command::DeleteUser { ticket, .. } => *ticket,
        }
    }
}

/// A completed gateway call
#[derive(Debug)]
pub enum Outcome {
    UsersLoaded {
        ticket: Ticket,
        result: Result<Vec<UserRecord>, GatewayError>,
    },
    UserLoaded {
        ticket: Ticket,
        result: Result<UserRecord, GatewayError>,
    },
    UserSaved {
        ticket: Ticket,
        result: Result<UserRecord, GatewayError>,
    },
    UserDeleted {
        ticket: Ticket,
        id: UserId,
        result: Result<(), GatewayError>,
    },
}

impl Outcome {
    pub fn ticket(&self) -> Ticket {
        match self {
            Outcome::UsersLoaded { ticket, .. }
            | Outcome::UserLoaded { ticket, .. }
            | Outcome::UserSaved { ticket, .. }
            | Outcome::UserDeleted { ticket, .. } => *ticket,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient message for the banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Everything a page handler asks the application to do
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub commands: Vec<Command>,
    pub navigate: Option<Route>,
    pub notice: Option<Notice>,
    /// Operator name to record in the session
    pub sign_in: Option<String>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn command(command: Command) -> Self {
        Self {
            commands: vec![command],
            ..Self::default()
        }
    }

    pub fn navigate(route: Route) -> Self {
        Self {
            navigate: Some(route),
            ..Self::default()
        }
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            ..Self::default()
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
            && self.navigate.is_none()
            && self.notice.is_none()
            && self.sign_in.is_none()
    }
}
