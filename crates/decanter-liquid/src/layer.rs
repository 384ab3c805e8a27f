use crate::color::Rgba;
use crate::mixture::Mixture;

/// One contiguous slice of liquid inside a stack.
///
/// The mixture is fixed for the layer's lifetime, so the color is derived once
/// at construction and never recomputed. Only the amount changes.
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidLayer {
    mixture: Mixture,
    amount: f32,
    color: Rgba,
}

impl LiquidLayer {
    pub fn new(mixture: Mixture, amount: f32) -> Self {
        debug_assert!(amount >= 0.0, "LiquidLayer::new: negative amount {amount}");
        let color = mixture.color();
        Self { mixture, amount, color }
    }

    #[inline]
    pub fn mixture(&self) -> &Mixture {
        &self.mixture
    }

    #[inline]
    pub fn amount(&self) -> f32 {
        self.amount
    }

    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    #[inline]
    pub(crate) fn set_amount(&mut self, amount: f32) {
        debug_assert!(amount >= 0.0);
        self.amount = amount;
    }
}
