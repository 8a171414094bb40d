//! Widget configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rater::RatingError;

/// Configuration for mounting a [`Rater`](crate::Rater).
///
/// Immutable after construction. Ratings are `f64` throughout: `stars` may be
/// fractional, and an initial `rating` does not have to be a multiple of
/// `step` — only the pointer mapping quantizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaterConfig {
    /// Maximum rating. Must be positive.
    pub stars: f64,
    /// Interaction granularity. Must be in `(0, 1]`.
    pub step: f64,
    /// Pixel size of one star tile; the surface is sized to
    /// `stars * star_size` by `star_size` at mount.
    pub star_size: f64,
    /// Right-to-left layout.
    pub reverse: bool,
    /// Initial committed rating in `[0, stars]`. Takes priority over a
    /// `data-rating` attribute already present on the surface.
    pub rating: Option<f64>,
    /// Mount in the disabled state.
    pub read_only: bool,
}

impl Default for RaterConfig {
    fn default() -> Self {
        Self {
            stars: 5.0,
            step: 1.0,
            star_size: 16.0,
            reverse: false,
            rating: None,
            read_only: false,
        }
    }
}

impl RaterConfig {
    /// Check the numeric bounds. Called by [`Rater::mount`](crate::Rater::mount).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stars > 0.0) {
            return Err(ConfigError::InvalidStars(self.stars));
        }
        if !(self.step > 0.0 && self.step <= 1.0) {
            return Err(ConfigError::InvalidStep(self.step));
        }
        Ok(())
    }
}

/// Construction-time errors. Fatal: no partial widget is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("step must be greater than 0 and at most 1, got {0}")]
    InvalidStep(f64),
    #[error("stars must be a positive number, got {0}")]
    InvalidStars(f64),
    #[error("initial rating rejected: {0}")]
    Rating(#[from] RatingError),
}
