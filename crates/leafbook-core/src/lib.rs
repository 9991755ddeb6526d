#![forbid(unsafe_code)]

//! Core: book model, face visibility, easing, input events, and the view contract.
//!
//! # Role in Leafbook
//! `leafbook-core` holds everything that does not need a clock. It describes
//! the static structure of a book (leaves, faces, animatable content), owns
//! the [`Book`](book::Book) aggregate and its leaf-flip rules, and resolves
//! which faces are visible for a settled position.
//!
//! # How it fits in the system
//! The runtime (`leafbook-runtime`) owns a `Book`, schedules the timed work
//! (settle delays, reveal delays, counter frames) and drives an
//! implementation of [`View`](view::View). Nothing in this crate schedules
//! or renders.

pub mod animatable;
pub mod book;
pub mod config;
pub mod easing;
pub mod event;
pub mod layout;
pub mod view;
pub mod visibility;

pub use animatable::{Animatable, EffectKind};
pub use book::{AnimatableRef, Book, Face, FaceId, Leaf, Side};
pub use config::{BookConfig, ConfigError, InputConfig, TimingConfig};
pub use event::{ClickTarget, Command, InputEvent, KeyCode, Viewport};
pub use layout::{BookLayout, FaceLayout, LayoutError};
pub use view::View;
pub use visibility::visible_slots;
