use std::fmt;

/// Precondition failure reported by the liquid model.
///
/// Every variant leaves the stack exactly as it was before the call.
#[derive(Debug, Clone, PartialEq)]
pub enum LiquidError {
    /// An add/remove amount was not finite, or an add amount was not positive.
    InvalidAmount(f32),
    /// A mixture was built from no entries at all.
    EmptyMixture,
    /// A mixture entry carried a negative or non-finite weight.
    InvalidWeight { liquid: String, weight: f32 },
    /// All mixture weights were zero, so no proportion exists.
    ZeroTotalWeight,
}

impl fmt::Display for LiquidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiquidError::InvalidAmount(amount) => {
                write!(f, "invalid liquid amount {amount}: must be finite and positive")
            }
            LiquidError::EmptyMixture => write!(f, "mixture has no liquids"),
            LiquidError::InvalidWeight { liquid, weight } => {
                write!(f, "invalid weight {weight} for liquid `{liquid}`")
            }
            LiquidError::ZeroTotalWeight => write!(f, "mixture weights sum to zero"),
        }
    }
}

impl std::error::Error for LiquidError {}
