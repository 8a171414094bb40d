//! RateKit Core Library
//!
//! Platform-agnostic interaction core for a star-rating input widget: a
//! horizontal row of discrete or fractional star indicators that a user can
//! preview by hovering or touching and commit by clicking or tapping.
//!
//! The widget is a state machine fed with [`PointerEvent`]s. It renders only
//! indirectly, through the [`Surface`] trait the embedder supplies: the
//! mounting surface exposes layout width and accepts fill-width, class, and
//! attribute mutations. [`MemorySurface`] is an in-memory implementation for
//! tests and headless use; `ratekit-widgets` drives the same core from egui.
//!
//! Committed ratings are owned by the embedder: a click stages a candidate
//! value and hands it to the registered rate callback together with a
//! single-use [`SubmitGuard`]. Until the guard is consumed with
//! [`SubmitGuard::done`], all further pointer interaction is ignored.

pub mod config;
pub mod input;
pub mod mapping;
pub mod rater;
pub mod surface;

pub use config::{ConfigError, RaterConfig};
pub use input::PointerEvent;
pub use mapping::rating_for_offset;
pub use rater::{Phase, Rater, RatingError, SubmitGuard};
pub use surface::{MemorySurface, Surface};
