#![forbid(unsafe_code)]

//! Face visibility: which faces an open book shows at a settled position.
//!
//! With `flipped = position / 2` leaves turned, the left-hand page is the
//! back of the last flipped leaf and the right-hand page is the front of
//! the first unflipped leaf. At the two extremes only one side exists.

use crate::book::{Book, Face, FaceId};

/// Face slots visible at `position`, left then right.
///
/// Pure and total: positions past the end simply lose their right-hand
/// slot, and a zero-leaf book yields nothing.
#[must_use]
pub fn visible_slots(leaf_count: usize, position: usize) -> Vec<FaceId> {
    let flipped = position / 2;
    let mut slots = Vec::with_capacity(2);
    if flipped > 0 && flipped - 1 < leaf_count {
        slots.push(FaceId::back(flipped - 1));
    }
    if flipped < leaf_count {
        slots.push(FaceId::front(flipped));
    }
    slots
}

impl Book {
    /// Faces visible at the current position, left then right.
    ///
    /// Slots whose face is absent from the layout are omitted.
    #[must_use]
    pub fn visible_faces(&self) -> Vec<&Face> {
        self.visible_faces_at(self.position())
    }

    /// Faces visible at an arbitrary position.
    #[must_use]
    pub fn visible_faces_at(&self, position: usize) -> Vec<&Face> {
        visible_slots(self.leaf_count(), position)
            .into_iter()
            .filter_map(|id| self.face(id))
            .collect()
    }
}
