// User Data Gateway
// Boundary to the external user service

pub mod http;
pub mod memory;

use async_trait::async_trait;

use crate::models::{UserDraft, UserId, UserRecord};

pub use http::HttpUserGateway;
pub use memory::{GatewayOp, InMemoryGateway};

/// Errors from user service calls
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("user service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("user {0} not found")]
    NotFound(UserId),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("user service unavailable: {0}")]
    Unavailable(String),
}

/// CRUD operations against the user service
///
/// Every call returns a discriminated result so callers always have a
/// failure branch to react to.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Fetch the full user collection in service order
    async fn get_users(&self) -> Result<Vec<UserRecord>, GatewayError>;

    async fn get_user(&self, id: &UserId) -> Result<UserRecord, GatewayError>;

    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, GatewayError>;

    async fn update_user(&self, id: &UserId, draft: &UserDraft) -> Result<UserRecord, GatewayError>;

    async fn delete_user(&self, id: &UserId) -> Result<(), GatewayError>;
}
