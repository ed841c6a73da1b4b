// Models module
// Records exchanged with the user service

pub mod user;

pub use user::{UserDraft, UserId, UserRecord};
