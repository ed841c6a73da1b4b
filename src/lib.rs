// User Desk Library
// A TUI client for managing users held by an external user service

// Core infrastructure - app state, config, events, effects
pub mod core;

// Records exchanged with the user service
pub mod models;

// Boundary to the user service
pub mod gateway;

// Execution of gateway requests
pub mod operations;

// Route table and navigation history
pub mod routing;

// Per-route page state
pub mod pages;

// UI - TUI components and views
pub mod ui;

// Configuration validation
pub mod config_validation;

// Log output setup
pub mod logging;

// Re-export commonly used items for convenience
pub use crate::core::{App, AppConfig};
pub use gateway::{GatewayError, HttpUserGateway, InMemoryGateway, UserGateway};
pub use models::{UserId, UserRecord};
pub use operations::Dispatcher;
pub use routing::Route;
