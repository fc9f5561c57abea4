//! In-memory catalog store.
//!
//! The store owns the full plant collection and is the only component that
//! mutates it. All reads hand out clones, never references into the
//! collection.
//!
//! ## Components
//!
//! - [`PlantStore`]: CRUD operations over the catalog
//! - [`PlantUpdate`]: the replacement fields accepted by an update

mod catalog;

pub use catalog::{PlantStore, PlantUpdate};
