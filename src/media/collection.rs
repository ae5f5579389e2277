use crate::error::CollectionError;
use derive_more::Constructor;
use serde::Serialize;

/// A single committed image: its durable locator and its position in the
/// collection. Position is always derived from the current order; it is
/// never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Constructor)]
pub struct MediaAsset {
    pub locator: String,
    pub position: usize,
}

/// An ordered, capacity-bounded sequence of uploaded image locators with at
/// most one cover designation.
///
/// Pure in-memory state, mutated only by the UI thread that owns the draft.
/// Remote side effects (uploads, best-effort deletes) live in
/// [`MediaIntake`](crate::media::intake::MediaIntake).
#[derive(Debug, Clone)]
pub struct MediaCollection {
    items: Vec<String>,
    capacity: usize,
    cover: Option<String>,
}

impl MediaCollection {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            cover: None,
        }
    }

    /// Rebuilds a collection from a persisted record (edit mode). A stored
    /// cover that matches no item is dropped, and a record holding more
    /// items than today's capacity keeps them all; it just cannot grow.
    #[must_use]
    pub fn from_existing(items: Vec<String>, cover: Option<String>, capacity: usize) -> Self {
        let capacity = capacity.max(items.len());
        let cover = cover.filter(|c| items.iter().any(|i| i == c));
        Self {
            items,
            capacity,
            cover,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots left for future appends.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    #[must_use]
    pub fn locators(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn cover(&self) -> Option<&str> {
        self.cover.as_deref()
    }

    /// The collection as positioned assets.
    #[must_use]
    pub fn assets(&self) -> Vec<MediaAsset> {
        self.items
            .iter()
            .enumerate()
            .map(|(position, locator)| MediaAsset::new(locator.clone(), position))
            .collect()
    }

    /// Appends a batch of known-good locators in order.
    ///
    /// All-or-nothing: if the whole batch does not fit, nothing is appended.
    /// A multi-file upload is never silently cut down to a subset.
    ///
    /// # Errors
    /// [`CollectionError::CapacityExceeded`] when the batch would overflow.
    pub fn append(&mut self, locators: Vec<String>) -> Result<(), CollectionError> {
        if locators.len() > self.remaining() {
            return Err(CollectionError::CapacityExceeded {
                requested: locators.len(),
                remaining: self.remaining(),
            });
        }
        self.items.extend(locators);
        Ok(())
    }

    /// Removes the item at `index` and returns its locator, clearing the
    /// cover if it pointed at that item. Out of bounds is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        if self.cover.as_deref() == Some(removed.as_str()) {
            self.cover = None;
        }
        Some(removed)
    }

    /// Moves the item at `from` to `to`, shifting everything in between.
    /// No-op when the indices are equal or either is out of bounds.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.items.len() || to >= self.items.len() {
            return;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
    }

    /// Star/unstar semantics: a second toggle on the current cover clears
    /// it, any other member replaces it. Locators not in the collection are
    /// ignored, keeping the cover a member at all times.
    pub fn toggle_cover(&mut self, locator: &str) {
        if self.cover.as_deref() == Some(locator) {
            self.cover = None;
        } else if self.items.iter().any(|i| i == locator) {
            self.cover = Some(locator.to_string());
        }
    }
}
