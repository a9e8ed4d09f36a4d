//! The client-local favorites set.

use std::collections::BTreeSet;

use crate::types::DogId;

/// A duplicate-free working set of favorite dog ids.
///
/// Purely client-local; membership, not order, matters. The set is the
/// payload submitted to the match endpoint.
#[derive(Debug, Clone, Default)]
pub struct Favorites(BTreeSet<DogId>);

impl Favorites {
    /// Create an empty favorites set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership for an id, returning the new membership state.
    ///
    /// Toggling the same id twice restores the original contents.
    pub fn toggle(&mut self, id: DogId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    /// Returns true if the id is currently a favorite.
    pub fn contains(&self, id: &DogId) -> bool {
        self.0.contains(id)
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no favorites are selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The favorite ids in stable order, as the match request payload.
    pub fn ids(&self) -> Vec<DogId> {
        self.0.iter().cloned().collect()
    }

    /// Remove every favorite.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}
