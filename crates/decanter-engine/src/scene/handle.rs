use core::fmt;

/// Opaque cup identifier. Unique within the registry that issued it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CupId(u64);

impl CupId {
    #[inline]
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value, e.g. for storing in an engine node's user data.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cup#{}", self.0)
    }
}

/// What a scene node stores to refer to its cup.
///
/// Copyable and free of lifetimes, so it can live in any engine-side structure.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CupHandle {
    id: CupId,
}

impl CupHandle {
    #[inline]
    pub(crate) const fn new(id: CupId) -> Self {
        Self { id }
    }

    #[inline]
    pub const fn id(self) -> CupId {
        self.id
    }
}
