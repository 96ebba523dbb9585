//! In-memory storefront state behind a single facade.
//!
//! [`Storefront`] owns the game, developer, and tag catalogs plus the user
//! registry, and every read or write goes through its methods. Invariants
//! like unique emails and ownership-gated reviews hold by construction
//! because nothing else can touch the state.

pub mod error;
pub mod ids;
mod operations;
mod queries;
mod store;

pub use error::StoreError;
pub use ids::IdGenerator;
pub use queries::RECOMMENDED_LIMIT;
pub use store::Storefront;
