use std::collections::BTreeMap;

use crate::color::Rgba;
use crate::error::LiquidError;
use crate::liquid::LiquidType;

/// A weighted combination of one or more liquid types.
///
/// Weights are relative proportions and need not sum to one.
///
/// Invariants:
/// - at least one entry
/// - every stored weight is finite and `> 0` (zero-weight entries are dropped)
///
/// Equality is strict: two mixtures are equal when they hold the same liquids
/// with bit-identical raw weights. `{water: 1}` and `{water: 2}` are different
/// mixtures even though both are pure water.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixture {
    // Keyed by liquid id so summation order never depends on insertion order.
    weights: BTreeMap<LiquidType, f32>,
}

impl Mixture {
    /// A mixture of a single liquid with weight `1`.
    pub fn pure(liquid: LiquidType) -> Self {
        let mut weights = BTreeMap::new();
        weights.insert(liquid, 1.0);
        Self { weights }
    }

    /// Builds a mixture from `(liquid, weight)` pairs.
    ///
    /// Repeated liquids have their weights summed. Zero weights are accepted but
    /// not stored.
    ///
    /// # Errors
    /// - [`LiquidError::EmptyMixture`] when `entries` is empty
    /// - [`LiquidError::InvalidWeight`] for a negative or non-finite weight, or one
    ///   that makes the total weight overflow
    /// - [`LiquidError::ZeroTotalWeight`] when every weight is zero
    pub fn from_weights<I>(entries: I) -> Result<Self, LiquidError>
    where
        I: IntoIterator<Item = (LiquidType, f32)>,
    {
        let mut weights: BTreeMap<LiquidType, f32> = BTreeMap::new();
        let mut seen = false;
        let mut total = 0.0f32;

        for (liquid, weight) in entries {
            seen = true;
            total += weight;
            // Individually finite weights can still overflow the sum.
            if !weight.is_finite() || weight < 0.0 || !total.is_finite() {
                return Err(LiquidError::InvalidWeight {
                    liquid: liquid.name().to_owned(),
                    weight,
                });
            }
            if weight > 0.0 {
                *weights.entry(liquid).or_insert(0.0) += weight;
            }
        }

        if !seen {
            return Err(LiquidError::EmptyMixture);
        }
        if weights.is_empty() {
            return Err(LiquidError::ZeroTotalWeight);
        }
        Ok(Self { weights })
    }

    /// Wraps a weight map produced inside the crate.
    ///
    /// Caller guarantees the map is non-empty with positive finite weights.
    pub(crate) fn from_map(weights: BTreeMap<LiquidType, f32>) -> Self {
        debug_assert!(!weights.is_empty(), "Mixture::from_map: empty weight map");
        debug_assert!(weights.values().all(|w| w.is_finite() && *w > 0.0));
        Self { weights }
    }

    /// Number of distinct liquids.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false` for a constructed mixture.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the single liquid when the mixture is pure.
    pub fn as_pure(&self) -> Option<&LiquidType> {
        if self.weights.len() == 1 {
            self.weights.keys().next()
        } else {
            None
        }
    }

    pub fn total_weight(&self) -> f32 {
        self.weights.values().sum()
    }

    /// Raw weight of `liquid`, `0` when absent.
    pub fn weight_of(&self, liquid: &LiquidType) -> f32 {
        self.weights.get(liquid).copied().unwrap_or(0.0)
    }

    /// Weight of `liquid` normalized by the total weight, in `[0, 1]`.
    pub fn proportion_of(&self, liquid: &LiquidType) -> f32 {
        self.weight_of(liquid) / self.total_weight()
    }

    /// Iterates `(liquid, raw weight)` in liquid-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&LiquidType, f32)> {
        self.weights.iter().map(|(liquid, &w)| (liquid, w))
    }

    /// Representative color of the mixture.
    ///
    /// A pure mixture reports its liquid's base color unchanged. Otherwise each
    /// channel is the weighted quadratic mean of the base colors:
    ///
    /// `c = sqrt(Σ wᵢ·cᵢ² / Σ wᵢ)`, clamped to `[0, 1]`.
    pub fn color(&self) -> Rgba {
        if let Some(liquid) = self.as_pure() {
            return liquid.color();
        }

        let total = self.total_weight();
        debug_assert!(total > 0.0, "Mixture::color: zero total weight");

        let mut sums = [0.0f32; 4];
        for (liquid, w) in self.iter() {
            let base = liquid.color().to_array();
            for (sum, c) in sums.iter_mut().zip(base) {
                *sum += w * c * c;
            }
        }

        Rgba::from_array(sums.map(|s| (s / total).sqrt())).clamped()
    }
}

impl From<LiquidType> for Mixture {
    fn from(liquid: LiquidType) -> Self {
        Mixture::pure(liquid)
    }
}
