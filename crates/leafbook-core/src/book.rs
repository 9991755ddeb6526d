#![forbid(unsafe_code)]

//! The book aggregate: leaves, faces, settled position, and the busy flag.
//!
//! # Invariants
//!
//! 1. `position` is even and within `[0, page_count]`.
//! 2. Flipped leaves form a prefix: once a transition has been applied,
//!    leaf `i` is flipped iff `i < position / 2`.
//! 3. Structure (leaves, faces, animatables) never changes after
//!    construction; only `flipped`, `position`, and `busy` mutate.
//!
//! Mutation of `position` and `busy` is crate-private to the runtime by
//! convention: the navigation controller is the only writer.

use crate::animatable::Animatable;
use crate::layout::BookLayout;

/// Which side of a leaf a face is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Right-hand page while the leaf is unflipped.
    Front,
    /// Left-hand page once the leaf is flipped.
    Back,
}

/// Identifies a face by leaf index and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId {
    pub leaf: usize,
    pub side: Side,
}

impl FaceId {
    #[must_use]
    pub const fn front(leaf: usize) -> Self {
        Self {
            leaf,
            side: Side::Front,
        }
    }

    #[must_use]
    pub const fn back(leaf: usize) -> Self {
        Self {
            leaf,
            side: Side::Back,
        }
    }
}

/// Identifies one animatable element: its face plus its index on that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimatableRef {
    pub face: FaceId,
    pub index: usize,
}

/// One visible side of a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    id: FaceId,
    animatables: Vec<Animatable>,
}

impl Face {
    #[must_use]
    pub fn new(id: FaceId, animatables: Vec<Animatable>) -> Self {
        Self { id, animatables }
    }

    #[must_use]
    pub fn id(&self) -> FaceId {
        self.id
    }

    #[must_use]
    pub fn animatables(&self) -> &[Animatable] {
        &self.animatables
    }

    /// Iterate animatables together with their references.
    pub fn iter_refs(&self) -> impl Iterator<Item = (AnimatableRef, &Animatable)> {
        let face = self.id;
        self.animatables
            .iter()
            .enumerate()
            .map(move |(index, a)| (AnimatableRef { face, index }, a))
    }
}

/// A double-sided page unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    index: usize,
    flipped: bool,
    front: Option<Face>,
    back: Option<Face>,
}

impl Leaf {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub fn front(&self) -> Option<&Face> {
        self.front.as_ref()
    }

    #[must_use]
    pub fn back(&self) -> Option<&Face> {
        self.back.as_ref()
    }

    #[must_use]
    pub fn face(&self, side: Side) -> Option<&Face> {
        match side {
            Side::Front => self.front(),
            Side::Back => self.back(),
        }
    }
}

/// The aggregate root.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    leaves: Vec<Leaf>,
    position: usize,
    busy: bool,
}

impl Book {
    /// Build a closed book (position 0, nothing flipped) from a layout.
    #[must_use]
    pub fn from_layout(layout: &BookLayout) -> Self {
        let leaves = layout
            .leaves
            .iter()
            .enumerate()
            .map(|(index, leaf)| Leaf {
                index,
                flipped: false,
                front: leaf
                    .front
                    .as_ref()
                    .map(|f| Face::new(FaceId::front(index), f.animatables.clone())),
                back: leaf
                    .back
                    .as_ref()
                    .map(|f| Face::new(FaceId::back(index), f.animatables.clone())),
            })
            .collect();
        Self {
            leaves,
            position: 0,
            busy: false,
        }
    }

    /// A book of `leaf_count` leaves whose faces carry no content.
    #[must_use]
    pub fn blank(leaf_count: usize) -> Self {
        Self::from_layout(&BookLayout::blank(leaf_count))
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.leaves.len() * 2
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    #[must_use]
    pub fn leaf(&self, index: usize) -> Option<&Leaf> {
        self.leaves.get(index)
    }

    #[must_use]
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.leaf(id.leaf).and_then(|leaf| leaf.face(id.side))
    }

    /// `true` if `target` is a position a transition may settle on.
    #[must_use]
    pub fn is_valid_position(&self, target: usize) -> bool {
        target <= self.page_count() && target % 2 == 0
    }

    /// Set a leaf's flipped flag.
    ///
    /// Out-of-range indices are ignored. Returns `true` if the flag changed.
    pub fn set_flipped(&mut self, leaf_index: usize, flipped: bool) -> bool {
        match self.leaves.get_mut(leaf_index) {
            Some(leaf) if leaf.flipped != flipped => {
                leaf.flipped = flipped;
                true
            }
            _ => false,
        }
    }

    /// Record a new settled position. Callers guarantee it is valid.
    pub fn set_position(&mut self, position: usize) {
        debug_assert!(self.is_valid_position(position));
        self.position = position;
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Every existing face, front then back, in leaf order.
    pub fn all_faces(&self) -> impl Iterator<Item = &Face> {
        self.leaves
            .iter()
            .flat_map(|leaf| leaf.front.iter().chain(leaf.back.iter()))
    }

    /// `true` if exactly the leaves below `position / 2` are flipped.
    #[must_use]
    pub fn flips_match_position(&self) -> bool {
        let boundary = self.position / 2;
        self.leaves
            .iter()
            .all(|leaf| leaf.flipped == (leaf.index < boundary))
    }
}
