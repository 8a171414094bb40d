//! Mounting-surface abstraction.
//!
//! The widget never draws. It mutates a [`Surface`] — a rectangular mounting
//! region the embedder owns — through fill-width, class, and attribute
//! operations, and reads back its layout width for the pointer mapping.
//! [`MemorySurface`] records everything in memory and backs the tests as well
//! as headless embedders.
//!
//! A surface is exclusively owned: [`Rater::mount`](crate::Rater::mount)
//! takes it by value, so two widgets can never share one mounting region.

use std::collections::{BTreeMap, BTreeSet};

/// Class marking the mounting region as a star-rating widget.
pub const ROOT_CLASS: &str = "star-rating";
/// Class marking a right-to-left layout.
pub const RTL_CLASS: &str = "rtl";
/// Class present while a commit awaits the embedder's completion signal.
pub const BUSY_CLASS: &str = "is-busy";
/// Class present while the widget is disabled.
pub const DISABLED_CLASS: &str = "disabled";

/// Attribute mirroring the committed rating (live preview while hovering).
pub const RATING_ATTR: &str = "data-rating";
/// Attribute carrying embedder-supplied status messaging.
pub const TITLE_ATTR: &str = "title";

/// A rectangular mounting region the widget sizes and decorates.
pub trait Surface {
    /// Current layout width in pixels, used for the pointer mapping.
    fn width(&self) -> f64;

    /// Resize the region. Called once at mount from `stars` and `star_size`.
    fn set_size(&mut self, width: f64, height: f64);

    /// Set the star tile size in pixels. Called once at mount.
    fn set_background_size(&mut self, px: f64);

    /// Set the fill-layer width as a percent of the full row.
    fn set_fill_percent(&mut self, percent: f64);

    /// Collapse the fill layer to nothing.
    ///
    /// Distinct from `set_fill_percent(0.0)`: a cleared widget has no fill
    /// layer at all, while a zero-percent fill is a live layer that can
    /// animate open again.
    fn collapse_fill(&mut self);

    /// Add a style class to the region.
    fn add_class(&mut self, class: &str);

    /// Remove a style class from the region.
    fn remove_class(&mut self, class: &str);

    /// Whether a style class is present.
    fn has_class(&self, class: &str) -> bool;

    /// Set a string attribute on the region.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Remove an attribute from the region.
    fn remove_attribute(&mut self, name: &str);

    /// Read an attribute from the region.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// In-memory surface for tests and headless embedders.
///
/// Records size, fill, classes, and attributes as plain data so embedders
/// (and tests) can read the widget's visual state back out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySurface {
    width: f64,
    height: f64,
    background_size: f64,
    fill: Option<f64>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
}

impl MemorySurface {
    /// Create a surface with an initial layout width.
    ///
    /// Mounting a widget resizes the surface from its configuration, so the
    /// initial width only matters for surfaces used without a mount.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Fill-layer width as a percent, or `None` when collapsed.
    pub fn fill_percent(&self) -> Option<f64> {
        self.fill
    }

    /// Current size as `(width, height)`.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Star tile size in pixels.
    pub fn background_size(&self) -> f64 {
        self.background_size
    }
}

impl Surface for MemorySurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn set_background_size(&mut self, px: f64) {
        self.background_size = px;
    }

    fn set_fill_percent(&mut self, percent: f64) {
        self.fill = Some(percent);
    }

    fn collapse_fill(&mut self) {
        self.fill = None;
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}
