use std::collections::BTreeMap;

use log::{debug, trace};

use crate::describe::{describe, RenderDescription};
use crate::error::LiquidError;
use crate::layer::LiquidLayer;
use crate::mixture::Mixture;

/// Ordered liquid layers inside one cup, bottom (index 0) to top.
///
/// Invariants:
/// - no two adjacent layers hold equal mixtures
/// - every layer amount is `> 0`; drained layers are removed
///
/// Every mutation sets the dirty flag. Only [`take_render_description`] clears it.
///
/// [`take_render_description`]: LiquidStack::take_render_description
#[derive(Debug, Clone, Default)]
pub struct LiquidStack {
    layers: Vec<LiquidLayer>,
    dirty: bool,
}

impl LiquidStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers bottom to top.
    #[inline]
    pub fn layers(&self) -> &[LiquidLayer] {
        &self.layers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    #[inline]
    pub fn top(&self) -> Option<&LiquidLayer> {
        self.layers.last()
    }

    #[inline]
    pub fn bottom(&self) -> Option<&LiquidLayer> {
        self.layers.first()
    }

    pub fn total_amount(&self) -> f32 {
        self.layers.iter().map(LiquidLayer::amount).sum()
    }

    /// True when the visual representation is stale.
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Pours `amount` of a liquid or mixture on top of the stack.
    ///
    /// If the top layer holds an equal mixture, only its amount grows and its
    /// color is kept. Otherwise a new layer is pushed.
    ///
    /// # Errors
    /// [`LiquidError::InvalidAmount`] when `amount` is not finite or not positive,
    /// or when adding it would overflow the stack's total. The stack is left unchanged.
    pub fn add(&mut self, mixture: impl Into<Mixture>, amount: f32) -> Result<(), LiquidError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LiquidError::InvalidAmount(amount));
        }
        // Bounding the total also bounds the merged top amount.
        if !(self.total_amount() + amount).is_finite() {
            return Err(LiquidError::InvalidAmount(amount));
        }
        let mixture = mixture.into();

        if let Some(top) = self.layers.last_mut().filter(|top| *top.mixture() == mixture) {
            top.set_amount(top.amount() + amount);
            trace!("merged {amount} into top layer (now {})", top.amount());
        } else {
            trace!("pushed layer #{} with {amount}", self.layers.len());
            self.layers.push(LiquidLayer::new(mixture, amount));
        }

        self.dirty = true;
        Ok(())
    }

    /// Drains `amount` from the top down and returns the volume actually removed.
    ///
    /// Layers are consumed most-recent first. Draining more than the stack holds
    /// empties it; that is not an error. A zero amount does nothing.
    ///
    /// # Errors
    /// [`LiquidError::InvalidAmount`] when `amount` is negative or not finite.
    pub fn remove_liquid(&mut self, amount: f32) -> Result<f32, LiquidError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(LiquidError::InvalidAmount(amount));
        }
        if amount == 0.0 {
            return Ok(0.0);
        }

        let mut remaining = amount;
        while remaining > 0.0 {
            let Some(top) = self.layers.last_mut() else {
                break;
            };
            if top.amount() > remaining {
                top.set_amount(top.amount() - remaining);
                remaining = 0.0;
            } else {
                remaining -= top.amount();
                self.layers.pop();
            }
        }

        if remaining > 0.0 {
            debug!("over-drain: requested {amount}, {remaining} more than the stack held");
        }

        self.dirty = true;
        Ok(amount - remaining.max(0.0))
    }

    /// Homogenizes every layer into one.
    ///
    /// Each liquid's share is its normalized weight inside each layer times
    /// that layer's amount, summed across layers. The resulting weights are
    /// stored normalized to the total, so they read as proportions. The total
    /// amount is preserved. Blending an empty stack does nothing.
    pub fn blend(&mut self) {
        if self.layers.is_empty() {
            return;
        }

        let total = self.total_amount();
        let mut shares: BTreeMap<_, f32> = BTreeMap::new();
        for layer in &self.layers {
            let layer_weight = layer.mixture().total_weight();
            for (liquid, w) in layer.mixture().iter() {
                *shares.entry(liquid.clone()).or_insert(0.0) += w / layer_weight * layer.amount();
            }
        }
        shares.retain(|_, share| *share > 0.0);

        let previous = self.layers.len();
        self.layers.clear();
        if total > 0.0 && !shares.is_empty() {
            for share in shares.values_mut() {
                *share /= total;
            }
            let mixture = Mixture::from_map(shares);
            self.layers.push(LiquidLayer::new(mixture, total));
        }

        debug!("blended {previous} layers into one ({total})");
        self.dirty = true;
    }

    /// Removes every layer.
    pub fn clear(&mut self) {
        if !self.layers.is_empty() {
            self.layers.clear();
            self.dirty = true;
        }
    }

    /// Projects the stack without touching the dirty flag.
    pub fn peek_render_description(&self) -> RenderDescription {
        describe(&self.layers)
    }

    /// Projects the stack for the renderer and clears the dirty flag.
    pub fn take_render_description(&mut self) -> RenderDescription {
        self.dirty = false;
        describe(&self.layers)
    }
}
