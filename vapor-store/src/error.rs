//! Failure taxonomy for storefront calls.

use thiserror::Error;
use vapor_model::page::PageError;

/// Everything a storefront call can fail with.
///
/// Every variant is terminal: the operation aborted and no state changed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user not found: '{0}'")]
    UserNotFound(String),
    #[error("game not found: '{0}'")]
    GameNotFound(String),
    #[error("developer not found: '{0}'")]
    DeveloperNotFound(String),
    #[error("tag not found: '{0}'")]
    TagNotFound(String),
    #[error("email '{0}' is already registered")]
    DuplicateEmail(String),
    #[error("user '{user_id}' does not own game '{game_id}'")]
    NotOwned { user_id: String, game_id: String },
    #[error("user '{user_id}' already reviewed game '{game_id}'")]
    DuplicateReview { user_id: String, game_id: String },
    #[error("user '{user_id}' already owns game '{game_id}'")]
    AlreadyOwned { user_id: String, game_id: String },
    #[error("a user cannot befriend themselves")]
    SelfFriend,
    #[error("duplicate {kind} id '{id}' in catalog data")]
    DuplicateId { kind: &'static str, id: String },
    #[error(transparent)]
    Page(#[from] PageError),
}
