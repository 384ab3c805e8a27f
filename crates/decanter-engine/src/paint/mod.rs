//! Paint values handed to cup renderers.
//!
//! Scope:
//! - premultiplied colors for compositing
//! - the vertical gradient strip painted on the liquid body

pub mod color;
pub mod gradient;

pub use color::PremulColor;
pub use gradient::{ColorStop, GradientStrip};
