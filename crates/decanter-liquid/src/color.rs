/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// This is the color liquids are configured with and the color layers report.
/// Renderers that composite with premultiplied alpha convert at the boundary.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`), as parsed from `#rrggbbaa`.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    #[inline]
    pub fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps every channel to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_extremes() {
        assert_eq!(Rgba::from_u8(0, 0, 0, 0), Rgba::transparent());
        assert_eq!(Rgba::from_u8(255, 255, 255, 255), Rgba::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn clamped_limits_channels() {
        let c = Rgba::new(-0.5, 0.5, 1.5, 2.0).clamped();
        assert_eq!(c, Rgba::new(0.0, 0.5, 1.0, 1.0));
    }

    #[test]
    fn array_round_trip() {
        let c = Rgba::from_array([0.1, 0.2, 0.3, 0.4]);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(c.b, 0.3);
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!Rgba::new(f32::NAN, 0.0, 0.0, 1.0).is_finite());
    }
}
