//! Render-facing cup handles.
//!
//! Responsibilities:
//! - hand out opaque [`CupHandle`]s that scene nodes can hold
//! - own every [`Cup`](crate::Cup) in one application-level table
//! - collect the visuals of cups that changed, once per display cycle
//!
//! A handle never owns or borrows the cup it names. Resolving it goes
//! through the registry, and a handle whose cup was despawned simply resolves
//! to nothing.

mod handle;
mod registry;

pub use handle::{CupHandle, CupId};
pub use registry::CupRegistry;
