//! Demo data for the storefront: an embedded catalog plus a seeded random
//! population.
//!
//! [`demo_storefront`] is the one-call entry point: parse the catalog
//! shipped inside the crate, build a [`vapor_store::Storefront`] around it,
//! and drive randomized purchases, friendships, and reviews through the
//! facade. The population is a pure function of the seed.

pub mod catalog;
pub mod demo;

pub use catalog::{SeedCatalog, SeedError, build_catalog, load_catalog};
pub use demo::{DemoOptions, demo_storefront};
