//! Pointer-offset to rating mapping.

/// Map a horizontal offset within the widget to a preview rating.
///
/// `x` is the offset in pixels from the left edge of a surface `width` pixels
/// wide. The linear position is quantized upward to the next multiple of
/// `step` and clamped to `stars` at the top. With `reverse` the surface is
/// read right-to-left.
///
/// There is deliberately no lower clamp beyond what `ceil` yields: any
/// positive offset maps to at least one `step`, so the smallest unit is
/// always shown near the leading edge. Only an exact-zero offset maps to
/// zero.
///
/// A non-positive `width` (surface not laid out yet) maps everything to zero.
pub fn rating_for_offset(x: f64, width: f64, stars: f64, step: f64, reverse: bool) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    let percent = if reverse {
        (width - x) / width * 100.0
    } else {
        x / width * 100.0
    };
    let raw = (percent / 100.0 * stars / step).ceil() * step;
    raw.min(stars)
}
