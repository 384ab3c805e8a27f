use decanter_liquid::RenderDescription;

use super::PremulColor;

/// A single gradient stop.
///
/// `t` runs from `0` at the bottom of the liquid column to `1` at its surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: PremulColor,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: PremulColor) -> Self {
        Self { t, color }
    }
}

/// Vertical color strip painted on the liquid body.
///
/// Layers do not fade into each other: every layer contributes a pair of stops
/// with the same color at its lower and upper boundary, so a renderer
/// interpolating linearly between stops still produces hard bands.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStrip {
    pub stops: Vec<ColorStop>,
}

impl GradientStrip {
    /// A fully transparent strip, used when the cup is empty.
    pub fn transparent() -> Self {
        Self {
            stops: vec![
                ColorStop::new(0.0, PremulColor::transparent()),
                ColorStop::new(1.0, PremulColor::transparent()),
            ],
        }
    }

    /// Builds the banded strip for a stack description.
    pub fn from_description(desc: &RenderDescription) -> Self {
        if desc.is_empty || desc.stops.is_empty() {
            return Self::transparent();
        }

        let mut stops = Vec::with_capacity(desc.stops.len() * 2);
        let mut lower = 0.0f32;
        for layer in &desc.stops {
            let color = PremulColor::from(layer.color);
            stops.push(ColorStop::new(lower, color));
            stops.push(ColorStop::new(layer.fraction, color));
            lower = layer.fraction;
        }
        Self { stops }
    }

    /// Iterates `(lower t, upper t, color)` bands bottom to top.
    pub fn bands(&self) -> impl Iterator<Item = (f32, f32, PremulColor)> + '_ {
        self.stops
            .chunks_exact(2)
            .map(|pair| (pair[0].t, pair[1].t, pair[0].color))
    }

    /// Color of the band containing `t`. `t` is clamped to `[0, 1]`.
    pub fn sample(&self, t: f32) -> PremulColor {
        let t = t.clamp(0.0, 1.0);
        self.bands()
            .find(|&(_, upper, _)| t <= upper)
            .map(|(_, _, color)| color)
            .or_else(|| self.stops.last().map(|s| s.color))
            .unwrap_or_else(PremulColor::transparent)
    }

    /// Returns true when the strip is structurally usable by a renderer.
    pub fn is_valid(&self) -> bool {
        self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.windows(2).all(|w| w[0].t <= w[1].t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decanter_liquid::{LayerStop, Rgba};

    const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);

    fn desc(stops: Vec<LayerStop>) -> RenderDescription {
        RenderDescription {
            total_amount: 1.0,
            top_color: stops.last().map(|s| s.color),
            bottom_color: stops.first().map(|s| s.color),
            is_empty: stops.is_empty(),
            stops,
        }
    }

    #[test]
    fn empty_description_is_transparent() {
        let strip = GradientStrip::from_description(&RenderDescription::empty());
        assert_eq!(strip, GradientStrip::transparent());
        assert_eq!(strip.sample(0.5), PremulColor::transparent());
    }

    #[test]
    fn two_layers_make_two_hard_bands() {
        let strip = GradientStrip::from_description(&desc(vec![
            LayerStop { color: RED, fraction: 0.25 },
            LayerStop { color: BLUE, fraction: 1.0 },
        ]));
        assert_eq!(strip.stops.len(), 4);
        assert!(strip.is_valid());

        let bands: Vec<_> = strip.bands().map(|(lo, hi, _)| (lo, hi)).collect();
        assert_eq!(bands, vec![(0.0, 0.25), (0.25, 1.0)]);

        assert_eq!(strip.sample(0.1), PremulColor::from(RED));
        assert_eq!(strip.sample(0.9), PremulColor::from(BLUE));
    }

    #[test]
    fn sample_clamps_out_of_range() {
        let strip = GradientStrip::from_description(&desc(vec![
            LayerStop { color: RED, fraction: 0.5 },
            LayerStop { color: BLUE, fraction: 1.0 },
        ]));
        assert_eq!(strip.sample(-3.0), PremulColor::from(RED));
        assert_eq!(strip.sample(7.0), PremulColor::from(BLUE));
    }

    #[test]
    fn unsorted_stops_are_invalid() {
        let strip = GradientStrip {
            stops: vec![
                ColorStop::new(0.6, PremulColor::transparent()),
                ColorStop::new(0.2, PremulColor::transparent()),
            ],
        };
        assert!(!strip.is_valid());
    }
}
