// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod app_config;
pub mod effects;
pub mod events;

pub use app::{App, Banner};
pub use app_config::{AppConfig, ConfigError};
pub use effects::{Command, Effects, Notice, NoticeLevel, Outcome, Ticket};
pub use events::{AppEvent, EventHandler, InputMode};
