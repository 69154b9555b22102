//! Washboard Catalog Core
//!
//! Layered architecture:
//! - domain: entities and business rules
//! - codec / storage / link: snapshot transport and persistence ports
//! - store / directory: the catalog synchronizer and the studio adoption layer

pub mod codec;
pub mod defaults;
mod directory;
pub mod domain;
mod ids;
pub mod link;
pub mod storage;
mod store;

#[cfg(test)]
mod tests;

pub use directory::StudioDirectory;
pub use ids::IdSource;
pub use store::{CatalogStore, Collection};
