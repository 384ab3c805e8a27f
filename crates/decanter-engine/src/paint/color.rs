use decanter_liquid::Rgba;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a`.
///
/// Liquid colors are configured straight-alpha ([`Rgba`]); renderers receive
/// this form so translucent liquids composite without dark fringes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PremulColor {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl PremulColor {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns the straight-alpha color. For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> Rgba {
        if self.a <= 0.0 {
            Rgba::transparent()
        } else {
            let inv = 1.0 / self.a;
            Rgba::new(self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<Rgba> for PremulColor {
    #[inline]
    fn from(c: Rgba) -> Self {
        Self::from_straight(c.r, c.g, c.b, c.a)
    }
}
