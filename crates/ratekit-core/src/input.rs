//! Pointer and touch events understood by the widget.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A pointer or touch event in surface-local coordinates.
///
/// Mouse and touch lifecycles are unified into one enum so embedders feed a
/// single entry point. `Click` carries no position: a commit always uses the
/// preview established by the preceding move, while a touch release moves to
/// the release point first and then commits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Mouse moved over the surface.
    Move { position: Point },
    /// Mouse left the surface.
    Leave,
    /// Mouse click: commit the current preview.
    Click,
    /// Touch began; treated as a move.
    TouchStart { position: Point },
    /// Touch moved; treated as a move.
    TouchMove { position: Point },
    /// Touch ended: move to the release point, then commit.
    TouchEnd { position: Point },
    /// Touch was cancelled; treated as a leave.
    TouchCancel,
}
