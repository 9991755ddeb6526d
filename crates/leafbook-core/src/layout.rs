#![forbid(unsafe_code)]

//! Static structural data read once at startup.
//!
//! A [`BookLayout`] lists leaves in order; each leaf may carry a front and a
//! back [`FaceLayout`]. A missing face is not an error: it is simply absent
//! from visibility and animation.
//!
//! ```toml
//! [[leaves]]
//! [leaves.front]
//! animatables = [
//!     { kind = "effect", effect = "fade", delay_ms = 200 },
//!     { kind = "split_text", text = "Portfolio" },
//! ]
//!
//! [[leaves]]
//! [leaves.front]
//! animatables = [{ kind = "skill_percent", target = 85, delay_ms = 600 }]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animatable::Animatable;

/// Content of one face.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceLayout {
    pub animatables: Vec<Animatable>,
}

impl FaceLayout {
    #[must_use]
    pub fn new(animatables: Vec<Animatable>) -> Self {
        Self { animatables }
    }
}

/// Both faces of one leaf.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafLayout {
    pub front: Option<FaceLayout>,
    pub back: Option<FaceLayout>,
}

/// Ordered leaves of a book.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookLayout {
    pub leaves: Vec<LeafLayout>,
}

/// Errors produced while loading a layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("layout has no leaves")]
    Empty,
}

impl BookLayout {
    /// `leaf_count` leaves, each with an empty front and back face.
    #[must_use]
    pub fn blank(leaf_count: usize) -> Self {
        let leaf = LeafLayout {
            front: Some(FaceLayout::default()),
            back: Some(FaceLayout::default()),
        };
        Self {
            leaves: vec![leaf; leaf_count],
        }
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// A book needs at least one leaf.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.leaves.is_empty() {
            return Err(LayoutError::Empty);
        }
        Ok(())
    }

    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, LayoutError> {
        let layout: Self = toml::from_str(s)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_json::from_str(s)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load from a file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}
