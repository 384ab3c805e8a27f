use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::color::Rgba;

/// Identifier of a liquid type. Assigned by whoever owns the liquid configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LiquidId(pub u32);

/// A pre-defined kind of liquid with a fixed display color.
///
/// Equality, ordering and hashing use [`LiquidId`] only; the name and color are
/// descriptive. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct LiquidType {
    id: LiquidId,
    name: Arc<str>,
    color: Rgba,
}

impl LiquidType {
    pub fn new(id: LiquidId, name: impl Into<Arc<str>>, color: Rgba) -> Self {
        Self { id, name: name.into(), color }
    }

    #[inline]
    pub fn id(&self) -> LiquidId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }
}

impl PartialEq for LiquidType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LiquidType {}

impl Hash for LiquidType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Ord for LiquidType {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for LiquidType {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LiquidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
