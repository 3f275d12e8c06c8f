//! Platform-independent core of the drag-to-scroll interaction.
//!
//! The frontend feeds normalized pointer samples into a [`DragScrollController`],
//! which owns the element being scrolled through the [`ScrollTarget`] seam.

mod config;
mod controller;
mod pointer;

pub use config::{ConfigError, CoordinatePreference, DragScrollConfig, InputEvents};
pub use controller::{DragOutcome, DragScrollController, DragSession, ScrollTarget};
pub use pointer::{PointerButton, PointerSample};
