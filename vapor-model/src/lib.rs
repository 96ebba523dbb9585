//! Data model for the storefront: entities, drafts, and pagination.
//!
//! These types carry no business rules of their own; registration,
//! purchasing, reviewing, and friendship logic live in `vapor-store`.
//! Consumers can use the types directly for display or pass them to the
//! storefront facade.

pub mod page;
pub mod types;

pub use page::{PAGE_SIZE, PageError, PageInfo, paginate};
pub use types::*;
