//! Star-rating row widget.
//!
//! The widget is shown once per frame for a persistent [`Rater`]: egui hover
//! and click state is translated into core [`PointerEvent`]s, then the row is
//! painted from the surface state the core wrote back (fill percent, busy and
//! disabled markers).

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, FontId, Painter, Rect, Response, Sense, Ui, pos2,
    vec2,
};
use kurbo::Point;

use ratekit_core::surface::{BUSY_CLASS, DISABLED_CLASS, RTL_CLASS};
use ratekit_core::{ConfigError, MemorySurface, Phase, PointerEvent, Rater, RaterConfig, Surface};

use crate::theme;

/// Mount a rater on a fresh in-memory surface, sized from its configuration.
pub fn mount_star_rating(config: RaterConfig) -> Result<Rater<MemorySurface>, ConfigError> {
    Rater::mount(MemorySurface::default(), config)
}

/// Colors and glyph for the star row.
#[derive(Debug, Clone)]
pub struct StarStyle {
    /// Glyph painted for each star.
    pub glyph: char,
    /// Unfilled star color.
    pub empty: Color32,
    /// Filled star color.
    pub filled: Color32,
    /// Unfilled star color while disabled.
    pub disabled_empty: Color32,
    /// Filled star color while disabled.
    pub disabled_filled: Color32,
    /// Veil drawn over the row while a commit is pending.
    pub busy_veil: Color32,
}

impl Default for StarStyle {
    fn default() -> Self {
        Self {
            glyph: '★',
            empty: theme::STAR_EMPTY,
            filled: theme::STAR_FILLED,
            disabled_empty: theme::STAR_DISABLED,
            disabled_filled: theme::STAR_DISABLED_FILLED,
            busy_veil: theme::BUSY_VEIL,
        }
    }
}

/// A star-rating input row.
pub struct StarRating<'a> {
    rater: &'a mut Rater<MemorySurface>,
    style: StarStyle,
}

impl<'a> StarRating<'a> {
    /// Create the widget for one frame.
    pub fn new(rater: &'a mut Rater<MemorySurface>) -> Self {
        Self {
            rater,
            style: StarStyle::default(),
        }
    }

    /// Set the row style.
    pub fn style(mut self, style: StarStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the widget and return the row's response.
    pub fn show(self, ui: &mut Ui) -> Response {
        let (width, height) = self.rater.surface().size();
        let (rect, response) = ui.allocate_exact_size(vec2(width as f32, height as f32), Sense::click());

        // Bridge egui pointer state into the core's event model. The core
        // decides what the events mean (disabled and busy states ignore them).
        if let Some(pos) = response.hover_pos() {
            let local = Point::new(f64::from(pos.x - rect.left()), f64::from(pos.y - rect.top()));
            self.rater
                .handle_pointer_event(PointerEvent::Move { position: local });
        } else if self.rater.phase() == Phase::Previewing {
            self.rater.handle_pointer_event(PointerEvent::Leave);
        }
        if response.clicked() {
            self.rater.handle_pointer_event(PointerEvent::Click);
        }

        let (fill, busy, disabled, rtl) = {
            let surface = self.rater.surface();
            (
                surface.fill_percent().unwrap_or(0.0),
                surface.has_class(BUSY_CLASS),
                surface.has_class(DISABLED_CLASS),
                surface.has_class(RTL_CLASS),
            )
        };

        if ui.is_rect_visible(rect) {
            let (empty, filled) = if disabled {
                (self.style.disabled_empty, self.style.disabled_filled)
            } else {
                (self.style.empty, self.style.filled)
            };
            let count = self.rater.stars().ceil() as usize;
            let tile = rect.width() / count as f32;
            let font = FontId::proportional(rect.height() * 0.9);

            let base = ui.painter().with_clip_rect(rect);
            paint_row(&base, rect, count, tile, &font, self.style.glyph, empty);

            let fill_width = rect.width() * fill as f32 / 100.0;
            if fill_width > 0.0 {
                let clip = if rtl {
                    Rect::from_min_max(pos2(rect.right() - fill_width, rect.top()), rect.max)
                } else {
                    Rect::from_min_max(rect.min, pos2(rect.left() + fill_width, rect.bottom()))
                };
                let overlay = ui.painter().with_clip_rect(clip);
                paint_row(&overlay, rect, count, tile, &font, self.style.glyph, filled);
            }

            if busy {
                ui.painter()
                    .rect_filled(rect, CornerRadius::ZERO, self.style.busy_veil);
            }
        }

        if disabled || busy {
            response
        } else {
            response.on_hover_cursor(CursorIcon::PointingHand)
        }
    }
}

fn paint_row(
    painter: &Painter,
    rect: Rect,
    count: usize,
    tile: f32,
    font: &FontId,
    glyph: char,
    color: Color32,
) {
    for i in 0..count {
        let center = pos2(rect.left() + tile * (i as f32 + 0.5), rect.center().y);
        painter.text(center, Align2::CENTER_CENTER, glyph, font.clone(), color);
    }
}
