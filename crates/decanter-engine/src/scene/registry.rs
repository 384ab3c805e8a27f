use std::collections::BTreeMap;

use decanter_liquid::LiquidError;
use log::{debug, trace};

use crate::cup::{Cup, CupConfig, CupVisual};

use super::{CupHandle, CupId};

/// Application-owned table of cups, keyed by [`CupId`].
///
/// Ids are issued in increasing order and never reused, so a stale handle can
/// not silently resolve to a newer cup.
#[derive(Debug, Default)]
pub struct CupRegistry {
    cups: BTreeMap<CupId, Cup>,
    next_id: u64,
}

impl CupRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cup and returns its handle.
    ///
    /// # Errors
    /// Propagates [`Cup::new`] validation of the capacity.
    pub fn spawn(&mut self, config: CupConfig) -> Result<CupHandle, LiquidError> {
        let cup = Cup::new(config)?;
        let id = CupId::new(self.next_id);
        self.next_id += 1;
        self.cups.insert(id, cup);
        debug!("spawned {id} (capacity {})", config.capacity);
        Ok(CupHandle::new(id))
    }

    /// Removes the cup and returns it. Later lookups with `handle` yield `None`.
    pub fn despawn(&mut self, handle: CupHandle) -> Option<Cup> {
        let cup = self.cups.remove(&handle.id());
        if cup.is_some() {
            debug!("despawned {}", handle.id());
        }
        cup
    }

    #[inline]
    pub fn get(&self, handle: CupHandle) -> Option<&Cup> {
        self.cups.get(&handle.id())
    }

    #[inline]
    pub fn get_mut(&mut self, handle: CupHandle) -> Option<&mut Cup> {
        self.cups.get_mut(&handle.id())
    }

    #[inline]
    pub fn contains(&self, handle: CupHandle) -> bool {
        self.cups.contains_key(&handle.id())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cups.is_empty()
    }

    /// Iterates live handles in id order.
    pub fn handles(&self) -> impl Iterator<Item = CupHandle> + '_ {
        self.cups.keys().map(|&id| CupHandle::new(id))
    }

    /// Refreshes every cup whose liquid changed and returns the new visuals in id order.
    ///
    /// Intended to be called once per display cycle. Clean cups are skipped.
    pub fn collect_updates(&mut self) -> Vec<(CupHandle, CupVisual)> {
        let updates: Vec<_> = self
            .cups
            .iter_mut()
            .filter_map(|(&id, cup)| cup.refresh().map(|visual| (CupHandle::new(id), visual)))
            .collect();
        if !updates.is_empty() {
            trace!("{} cup visual(s) refreshed", updates.len());
        }
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decanter_liquid::{LiquidId, LiquidType, Rgba};

    fn juice() -> LiquidType {
        LiquidType::new(LiquidId(7), "juice", Rgba::new(1.0, 0.6, 0.0, 1.0))
    }

    #[test]
    fn spawn_issues_distinct_handles() {
        let mut reg = CupRegistry::new();
        let a = reg.spawn(CupConfig::default()).unwrap();
        let b = reg.spawn(CupConfig::default()).unwrap();
        assert_ne!(a, b);
        assert!(a.id() < b.id());
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.handles().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn spawn_rejects_bad_capacity() {
        let mut reg = CupRegistry::new();
        assert!(reg.spawn(CupConfig::with_capacity(-1.0)).is_err());
        assert!(reg.is_empty());
    }

    #[test]
    fn despawned_handle_resolves_to_none() {
        let mut reg = CupRegistry::new();
        let a = reg.spawn(CupConfig::default()).unwrap();
        assert!(reg.despawn(a).is_some());
        assert!(reg.get(a).is_none());
        assert!(!reg.contains(a));
        assert!(reg.despawn(a).is_none());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut reg = CupRegistry::new();
        let a = reg.spawn(CupConfig::default()).unwrap();
        reg.despawn(a);
        let b = reg.spawn(CupConfig::default()).unwrap();
        assert_ne!(a, b);
        assert!(reg.get(a).is_none());
    }

    #[test]
    fn collect_updates_returns_only_dirty_cups() {
        let mut reg = CupRegistry::new();
        let a = reg.spawn(CupConfig::with_capacity(2.0)).unwrap();
        let b = reg.spawn(CupConfig::with_capacity(2.0)).unwrap();
        let c = reg.spawn(CupConfig::with_capacity(2.0)).unwrap();

        reg.get_mut(c).unwrap().pour(juice(), 1.0).unwrap();
        reg.get_mut(a).unwrap().pour(juice(), 0.5).unwrap();

        let updates = reg.collect_updates();
        let handles: Vec<_> = updates.iter().map(|(h, _)| *h).collect();
        assert_eq!(handles, vec![a, c]);
        assert_eq!(updates[0].1.fill_fraction, 0.25);
        assert_eq!(updates[1].1.fill_fraction, 0.5);
        assert!(!reg.get(b).unwrap().needs_visual_update());

        assert!(reg.collect_updates().is_empty());
    }
}
