//! Render-facing projection of a liquid stack.
//!
//! The renderer never sees layers. It receives a [`RenderDescription`] value:
//! total amount, one `(color, cumulative fraction)` stop per layer, and the cap
//! colors. Everything here is a pure function of the layer slice.

use crate::color::Rgba;
use crate::layer::LiquidLayer;

/// Totals at or below this are treated as an empty cup.
pub const EMPTY_EPSILON: f32 = 1e-6;

/// A layer's color and the cumulative fill fraction at its upper boundary.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayerStop {
    pub color: Rgba,
    /// Running sum of amounts up to and including this layer, divided by the total.
    /// Clamped to `[0, 1]`.
    pub fraction: f32,
}

/// Snapshot of a stack in the form a renderer consumes.
///
/// When `is_empty` is set, `stops` is empty and both cap colors are `None`;
/// callers substitute a transparent representation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescription {
    pub total_amount: f32,
    /// Bottom to top.
    pub stops: Vec<LayerStop>,
    /// Color of the topmost layer (rim / surface).
    pub top_color: Option<Rgba>,
    /// Color of the bottommost layer (base).
    pub bottom_color: Option<Rgba>,
    pub is_empty: bool,
}

impl RenderDescription {
    pub fn empty() -> Self {
        Self {
            total_amount: 0.0,
            stops: Vec::new(),
            top_color: None,
            bottom_color: None,
            is_empty: true,
        }
    }
}

/// Projects `layers` (bottom to top) into a [`RenderDescription`].
pub fn describe(layers: &[LiquidLayer]) -> RenderDescription {
    let total: f32 = layers.iter().map(LiquidLayer::amount).sum();

    if total <= EMPTY_EPSILON {
        return RenderDescription { total_amount: total.max(0.0), ..RenderDescription::empty() };
    }

    let mut running = 0.0f32;
    let stops = layers
        .iter()
        .map(|layer| {
            running += layer.amount();
            LayerStop { color: layer.color(), fraction: (running / total).clamp(0.0, 1.0) }
        })
        .collect();

    RenderDescription {
        total_amount: total,
        stops,
        top_color: layers.last().map(LiquidLayer::color),
        bottom_color: layers.first().map(LiquidLayer::color),
        is_empty: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liquid::{LiquidId, LiquidType};
    use crate::mixture::Mixture;

    fn layer(id: u32, color: Rgba, amount: f32) -> LiquidLayer {
        let liquid = LiquidType::new(LiquidId(id), format!("l{id}"), color);
        LiquidLayer::new(Mixture::pure(liquid), amount)
    }

    const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);

    #[test]
    fn empty_slice_is_empty() {
        let d = describe(&[]);
        assert!(d.is_empty);
        assert!(d.stops.is_empty());
        assert_eq!(d.top_color, None);
        assert_eq!(d.bottom_color, None);
        assert_eq!(d.total_amount, 0.0);
    }

    #[test]
    fn negligible_total_is_empty() {
        let d = describe(&[layer(0, RED, 1e-9)]);
        assert!(d.is_empty);
        assert!(d.stops.is_empty());
    }

    #[test]
    fn stops_are_cumulative_bottom_to_top() {
        let d = describe(&[layer(0, RED, 1.0), layer(1, BLUE, 3.0)]);
        assert!(!d.is_empty);
        assert_eq!(d.total_amount, 4.0);
        assert_eq!(d.stops.len(), 2);
        assert_eq!(d.stops[0], LayerStop { color: RED, fraction: 0.25 });
        assert_eq!(d.stops[1], LayerStop { color: BLUE, fraction: 1.0 });
    }

    #[test]
    fn caps_come_from_ends() {
        let d = describe(&[layer(0, RED, 1.0), layer(1, BLUE, 1.0)]);
        assert_eq!(d.bottom_color, Some(RED));
        assert_eq!(d.top_color, Some(BLUE));
    }

    #[test]
    fn last_fraction_never_exceeds_one() {
        let d = describe(&[layer(0, RED, 0.1), layer(1, BLUE, 0.2), layer(2, RED, 0.3)]);
        assert!(d.stops.iter().all(|s| (0.0..=1.0).contains(&s.fraction)));
        assert!(d.stops.windows(2).all(|w| w[0].fraction <= w[1].fraction));
    }
}
