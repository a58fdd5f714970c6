//! Enemy ships that have not been confirmed sunk.

use alloc::vec::Vec;

use crate::ship::ShipSpec;

/// Multiset of ship specifications still afloat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetState {
    remaining: Vec<ShipSpec>,
}

impl FleetState {
    pub fn new(manifest: &[ShipSpec]) -> Self {
        Self {
            remaining: manifest.to_vec(),
        }
    }

    /// Restore the full manifest.
    pub fn reset(&mut self, manifest: &[ShipSpec]) {
        self.remaining.clear();
        self.remaining.extend_from_slice(manifest);
    }

    pub fn remaining(&self) -> &[ShipSpec] {
        &self.remaining
    }

    /// Remove one ship called `name`. Returns `false` when no such ship is
    /// left, in which case nothing changes.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        match self.remaining.iter().position(|s| s.name() == name) {
            Some(idx) => {
                self.remaining.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
