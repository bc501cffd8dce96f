//! Always-non-empty ordered list of uniform sub-records.

use serde::Serialize;

/// Ordered list that never drops below one element.
///
/// Elements are addressed by position, which is the only identity they have, so the list
/// offers no reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RepeatableList<E> {
    items: Vec<E>,
}

impl<E: Default> RepeatableList<E> {
    /// A list holding a single empty element.
    pub fn new() -> Self {
        Self {
            items: vec![E::default()],
        }
    }

    /// Build from existing elements; an empty input yields a single empty element.
    pub fn from_vec(items: Vec<E>) -> Self {
        if items.is_empty() {
            Self::new()
        } else {
            Self { items }
        }
    }

    /// Append a fresh empty element.
    pub fn add(&mut self) {
        self.items.push(E::default());
    }

    /// Apply `patch` to the element at `index`. Out-of-range indexes are ignored.
    pub fn update_at(&mut self, index: usize, patch: impl FnOnce(&mut E)) {
        if let Some(item) = self.items.get_mut(index) {
            patch(item);
        }
    }

    /// Remove the element at `index`, or blank it if it is the only one left.
    pub fn remove_at(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        if self.items.len() == 1 {
            self.items[0] = E::default();
        } else {
            self.items.remove(index);
        }
    }
}

impl<E> RepeatableList<E> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.items
    }
}

impl<E: Default> Default for RepeatableList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> IntoIterator for &'a RepeatableList<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
