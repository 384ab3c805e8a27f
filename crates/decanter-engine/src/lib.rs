//! Decanter engine crate.
//!
//! This crate sits between the liquid model and whatever renders cups. It owns
//! the pieces the model deliberately does not: capacity, paint conversion,
//! opaque cup handles and the static liquid catalog.

pub mod catalog;
pub mod cup;
pub mod logging;
pub mod paint;
pub mod scene;

pub use catalog::{CatalogError, LiquidCatalog};
pub use cup::{CapColors, Cup, CupConfig, CupVisual};
pub use scene::{CupHandle, CupId, CupRegistry};
