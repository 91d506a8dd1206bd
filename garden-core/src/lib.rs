//! Plant layout core for the doodle garden.
//!
//! Main components:
//! - [`types`] — the plant record as stored by the backend.
//! - [`layout`] — the renderer from a plant to a [`tree::PlantLayout`].
//! - [`tree`] — stem, branch group and leaf primitives, plus flat shapes.
//! - [`skin`] — cosmetic skins applied to the stem.
//! - [`jitter`] — injectable randomness for the decorative parts.
//! - [`config`] — geometry constants for the renderer.
//! - [`garden`] — decoding of the `/plants` and `/cosmetics` payloads.
//! - [`caption`] — text labels shown under each plant.
//! - [`color`] — CSS colour parsing and adjustments.
//! - [`error`] — the crate's error type.

pub mod caption;
pub mod color;
pub mod config;
pub mod error;
pub mod garden;
pub mod jitter;
pub mod layout;
pub mod skin;
pub mod tree;
pub mod types;

pub use error::{Error, Result};
