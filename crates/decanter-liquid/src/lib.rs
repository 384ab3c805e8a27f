//! Layered-liquid model for the **Decanter** cup.
//!
//! A cup holds an ordered stack of liquid layers, bottom to top. Each layer is a
//! fixed [`Mixture`] of liquid types plus a mutable amount. Pouring appends (or
//! merges into the top layer), draining removes from the top, and blending
//! homogenizes everything into a single layer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | `Rgba` straight-alpha color |
//! | [`liquid`] | `LiquidId`, `LiquidType` |
//! | [`mixture`] | `Mixture` and the quadratic-mean color mix |
//! | [`layer`] | `LiquidLayer` |
//! | [`stack`] | `LiquidStack` with dirty tracking |
//! | [`describe`] | `RenderDescription`, `describe` projection |
//! | [`error`] | `LiquidError` |
//!
//! # Quick start
//!
//! ```rust
//! use decanter_liquid::{LiquidId, LiquidStack, LiquidType, Rgba};
//!
//! let water = LiquidType::new(LiquidId(0), "water", Rgba::new(0.2, 0.4, 1.0, 0.6));
//! let oil = LiquidType::new(LiquidId(1), "oil", Rgba::new(0.9, 0.8, 0.1, 0.9));
//!
//! let mut stack = LiquidStack::new();
//! stack.add(water.clone(), 1.0).unwrap();
//! stack.add(water, 1.0).unwrap();
//! stack.add(oil, 1.0).unwrap();
//! assert_eq!(stack.len(), 2);
//!
//! stack.remove_liquid(1.5).unwrap();
//! assert_eq!(stack.total_amount(), 1.5);
//!
//! let desc = stack.take_render_description();
//! assert!(!desc.is_empty);
//! assert!(!stack.needs_redraw());
//! ```

pub mod color;
pub mod describe;
pub mod error;
pub mod layer;
pub mod liquid;
pub mod mixture;
pub mod stack;

pub use color::Rgba;
pub use describe::{describe, LayerStop, RenderDescription, EMPTY_EPSILON};
pub use error::LiquidError;
pub use layer::LiquidLayer;
pub use liquid::{LiquidId, LiquidType};
pub use mixture::Mixture;
pub use stack::LiquidStack;
