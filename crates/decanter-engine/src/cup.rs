//! A cup: one liquid stack with a fixed capacity.
//!
//! The cup is what application code mutates in response to user actions and
//! what the display phase polls for fresh visuals.

use decanter_liquid::{LiquidError, LiquidStack, Mixture, RenderDescription};
use log::{debug, warn};

use crate::paint::{GradientStrip, PremulColor};

/// Cup creation parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CupConfig {
    /// Maximum volume the cup holds. Must be finite and positive.
    pub capacity: f32,
}

impl CupConfig {
    pub const DEFAULT_CAPACITY: f32 = 1.0;

    #[inline]
    pub const fn with_capacity(capacity: f32) -> Self {
        Self { capacity }
    }
}

impl Default for CupConfig {
    fn default() -> Self {
        Self { capacity: Self::DEFAULT_CAPACITY }
    }
}

/// Colors for the liquid surface (rim) and the bottom of the cup (base).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CapColors {
    pub rim: PremulColor,
    pub base: PremulColor,
}

/// Everything a renderer needs to rebuild a cup's liquid visuals.
#[derive(Debug, Clone, PartialEq)]
pub struct CupVisual {
    /// Liquid height as a fraction of the cup, in `[0, 1]`.
    pub fill_fraction: f32,
    pub total_amount: f32,
    pub strip: GradientStrip,
    pub caps: CapColors,
    /// Hide the liquid body entirely (the cup is empty).
    pub hidden: bool,
}

impl CupVisual {
    fn new(desc: &RenderDescription, capacity: f32) -> Self {
        let caps = CapColors {
            rim: desc.top_color.map(PremulColor::from).unwrap_or_default(),
            base: desc.bottom_color.map(PremulColor::from).unwrap_or_default(),
        };
        let fill_fraction = if desc.is_empty {
            0.0
        } else {
            (desc.total_amount / capacity).clamp(0.0, 1.0)
        };
        Self {
            fill_fraction,
            total_amount: desc.total_amount,
            strip: GradientStrip::from_description(desc),
            caps,
            hidden: desc.is_empty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cup {
    stack: LiquidStack,
    capacity: f32,
}

impl Cup {
    /// # Errors
    /// [`LiquidError::InvalidAmount`] when the capacity is not finite and positive.
    pub fn new(config: CupConfig) -> Result<Self, LiquidError> {
        if !config.capacity.is_finite() || config.capacity <= 0.0 {
            return Err(LiquidError::InvalidAmount(config.capacity));
        }
        Ok(Self { stack: LiquidStack::new(), capacity: config.capacity })
    }

    #[inline]
    pub fn stack(&self) -> &LiquidStack {
        &self.stack
    }

    #[inline]
    pub fn capacity(&self) -> f32 {
        self.capacity
    }

    #[inline]
    pub fn total_amount(&self) -> f32 {
        self.stack.total_amount()
    }

    /// Volume that can still be poured in before overflowing.
    pub fn free_space(&self) -> f32 {
        (self.capacity - self.stack.total_amount()).max(0.0)
    }

    pub fn fill_fraction(&self) -> f32 {
        (self.stack.total_amount() / self.capacity).clamp(0.0, 1.0)
    }

    /// Pours a liquid or mixture in and returns the volume that spilled over.
    ///
    /// Only the part that fits is added. Pouring into a full cup adds nothing
    /// and leaves the visuals clean.
    ///
    /// # Errors
    /// [`LiquidError::InvalidAmount`] when `amount` is not finite and positive.
    pub fn pour(&mut self, mixture: impl Into<Mixture>, amount: f32) -> Result<f32, LiquidError> {
        if !amount.is_finite() || amount <= 0.0 {
            warn!("rejected pour of {amount}");
            return Err(LiquidError::InvalidAmount(amount));
        }

        let accepted = amount.min(self.free_space());
        let overflow = amount - accepted;
        if accepted > 0.0 {
            self.stack.add(mixture, accepted)?;
        }
        if overflow > 0.0 {
            debug!("cup overflowed: {overflow} of {amount} spilled");
        }
        Ok(overflow)
    }

    /// Drains from the top and returns the volume removed.
    pub fn drain(&mut self, amount: f32) -> Result<f32, LiquidError> {
        self.stack.remove_liquid(amount)
    }

    /// Blends every layer into one.
    pub fn stir(&mut self) {
        self.stack.blend();
    }

    /// Pours everything out and returns the volume removed.
    pub fn empty(&mut self) -> f32 {
        let total = self.stack.total_amount();
        self.stack.clear();
        total
    }

    #[inline]
    pub fn needs_visual_update(&self) -> bool {
        self.stack.needs_redraw()
    }

    /// Current visuals without acknowledging them.
    pub fn visual(&self) -> CupVisual {
        CupVisual::new(&self.stack.peek_render_description(), self.capacity)
    }

    /// Returns fresh visuals when the liquid changed since the last refresh.
    pub fn refresh(&mut self) -> Option<CupVisual> {
        if !self.stack.needs_redraw() {
            return None;
        }
        let desc = self.stack.take_render_description();
        Some(CupVisual::new(&desc, self.capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decanter_liquid::{LiquidId, LiquidType, Rgba};

    fn tea() -> LiquidType {
        LiquidType::new(LiquidId(0), "tea", Rgba::new(0.6, 0.3, 0.1, 1.0))
    }

    fn milk() -> LiquidType {
        LiquidType::new(LiquidId(1), "milk", Rgba::new(1.0, 1.0, 0.95, 1.0))
    }

    fn cup(capacity: f32) -> Cup {
        Cup::new(CupConfig::with_capacity(capacity)).unwrap()
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn invalid_capacity_rejected() {
        assert!(Cup::new(CupConfig::with_capacity(0.0)).is_err());
        assert!(Cup::new(CupConfig::with_capacity(f32::NAN)).is_err());
        assert!(Cup::new(CupConfig::default()).is_ok());
    }

    // ── pour ──────────────────────────────────────────────────────────────

    #[test]
    fn pour_within_capacity_has_no_overflow() {
        let mut c = cup(4.0);
        assert_eq!(c.pour(tea(), 1.5).unwrap(), 0.0);
        assert_eq!(c.total_amount(), 1.5);
        assert_eq!(c.free_space(), 2.5);
    }

    #[test]
    fn pour_past_capacity_spills() {
        let mut c = cup(2.0);
        c.pour(tea(), 1.5).unwrap();
        let spilled = c.pour(milk(), 1.0).unwrap();
        assert_eq!(spilled, 0.5);
        assert_eq!(c.total_amount(), 2.0);
        assert_eq!(c.fill_fraction(), 1.0);
    }

    #[test]
    fn pour_into_full_cup_stays_clean() {
        let mut c = cup(1.0);
        c.pour(tea(), 1.0).unwrap();
        c.refresh();
        assert_eq!(c.pour(milk(), 0.5).unwrap(), 0.5);
        assert!(!c.needs_visual_update());
        assert_eq!(c.stack().len(), 1);
    }

    #[test]
    fn pour_rejects_non_positive() {
        let mut c = cup(1.0);
        assert!(c.pour(tea(), 0.0).is_err());
        assert!(c.pour(tea(), -2.0).is_err());
        assert!(c.stack().is_empty());
    }

    // ── drain / stir / empty ──────────────────────────────────────────────

    #[test]
    fn drain_and_empty_report_removed_volume() {
        let mut c = cup(4.0);
        c.pour(tea(), 2.0).unwrap();
        c.pour(milk(), 1.0).unwrap();
        assert_eq!(c.drain(0.5).unwrap(), 0.5);
        assert_eq!(c.empty(), 2.5);
        assert_eq!(c.total_amount(), 0.0);
    }

    #[test]
    fn stir_makes_single_layer() {
        let mut c = cup(4.0);
        c.pour(tea(), 2.0).unwrap();
        c.pour(milk(), 1.0).unwrap();
        c.stir();
        assert_eq!(c.stack().len(), 1);
        assert_eq!(c.total_amount(), 3.0);
    }

    // ── refresh ───────────────────────────────────────────────────────────

    #[test]
    fn refresh_only_when_dirty() {
        let mut c = cup(4.0);
        assert!(c.refresh().is_none());

        c.pour(tea(), 1.0).unwrap();
        c.pour(milk(), 1.0).unwrap();
        let v = c.refresh().unwrap();
        assert!(!v.hidden);
        assert_eq!(v.fill_fraction, 0.5);
        assert_eq!(v.total_amount, 2.0);
        assert_eq!(v.caps.base, PremulColor::from(tea().color()));
        assert_eq!(v.caps.rim, PremulColor::from(milk().color()));
        assert_eq!(v.strip.stops.len(), 4);

        assert!(c.refresh().is_none());
    }

    #[test]
    fn empty_cup_visual_is_hidden_and_transparent() {
        let mut c = cup(4.0);
        c.pour(tea(), 1.0).unwrap();
        c.drain(5.0).unwrap();
        let v = c.refresh().unwrap();
        assert!(v.hidden);
        assert_eq!(v.fill_fraction, 0.0);
        assert_eq!(v.caps, CapColors::default());
        assert_eq!(v.strip, GradientStrip::transparent());
    }

    #[test]
    fn visual_does_not_acknowledge() {
        let mut c = cup(4.0);
        c.pour(tea(), 1.0).unwrap();
        let peeked = c.visual();
        assert!(c.needs_visual_update());
        assert_eq!(c.refresh(), Some(peeked));
    }
}
