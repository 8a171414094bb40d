//! egui widgets for ratekit.
//!
//! The interaction logic lives in `ratekit-core`; this crate bridges egui
//! pointer state into the core's event model and paints the star row:
//!
//! - **StarRating**: the widget shown each frame for a persistent
//!   [`Rater`](ratekit_core::Rater)
//! - **mount_star_rating**: convenience constructor for an in-memory-surface
//!   rater sized from its configuration

pub mod star_rating;

pub use star_rating::{StarRating, StarStyle, mount_star_rating};

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Unfilled star color
    pub const STAR_EMPTY: Color32 = Color32::from_rgb(209, 213, 219);
    /// Filled star color (amber)
    pub const STAR_FILLED: Color32 = Color32::from_rgb(245, 158, 11);
    /// Star colors while disabled
    pub const STAR_DISABLED: Color32 = Color32::from_rgb(229, 231, 235);
    /// Filled star color while disabled
    pub const STAR_DISABLED_FILLED: Color32 = Color32::from_rgb(156, 163, 175);
    /// Veil drawn over the row while a commit is pending
    pub const BUSY_VEIL: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 160);
}
