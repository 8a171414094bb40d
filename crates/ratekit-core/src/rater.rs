//! The rating widget: interaction state machine and control surface.
//!
//! A [`Rater`] owns its mounting surface and converts pointer events into a
//! preview fill, a committed rating, and an asynchronous submit window. The
//! committed value is never written by the widget on a click: the click
//! stages a candidate and hands it to the rate callback together with a
//! [`SubmitGuard`], and it is the embedder's decision to store it (or not)
//! before releasing the widget with [`SubmitGuard::done`].

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use kurbo::Point;
use thiserror::Error;

use crate::config::{ConfigError, RaterConfig};
use crate::input::PointerEvent;
use crate::mapping::rating_for_offset;
use crate::surface::{
    BUSY_CLASS, DISABLED_CLASS, RATING_ATTR, ROOT_CLASS, RTL_CLASS, Surface, TITLE_ATTR,
};

/// Errors raised by [`Rater::set_rating`] and [`SubmitGuard::set_rating`].
///
/// Caller-recoverable and synchronous; the widget state is untouched when
/// one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error("rating must be a number")]
    NotANumber,
    #[error("rating {value} is outside the range 0..={max}")]
    OutOfRange { value: f64, max: f64 },
}

/// Interaction phase of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No interaction in progress.
    #[default]
    Idle,
    /// The pointer is over the widget and a preview is showing.
    Previewing,
    /// A commit is awaiting the embedder's completion signal.
    Submitting,
}

/// State shared between the widget handle and an outstanding [`SubmitGuard`].
struct Shared<S> {
    surface: S,
    stars: f64,
    committed: Option<f64>,
    submitting: bool,
    disabled: bool,
}

impl<S: Surface> Shared<S> {
    /// Store a committed rating and sync the fill and `data-rating` marker.
    ///
    /// Accepts any in-range value, including non-multiples of the interaction
    /// step: externally supplied ratings may be finer-grained than the UI.
    fn set_rating(&mut self, value: f64) -> Result<(), RatingError> {
        if value.is_nan() {
            return Err(RatingError::NotANumber);
        }
        if value < 0.0 || value > self.stars {
            return Err(RatingError::OutOfRange {
                value,
                max: self.stars,
            });
        }
        self.committed = Some(value);
        self.surface.set_fill_percent(value / self.stars * 100.0);
        self.surface.set_attribute(RATING_ATTR, &value.to_string());
        Ok(())
    }
}

/// Single-use completion token for an in-flight commit.
///
/// Handed to the rate callback together with the candidate rating. The widget
/// ignores all pointer interaction until [`done`](Self::done) consumes the
/// guard; dropping it without calling `done` leaves the widget submitting
/// permanently. At most one guard exists per widget at a time.
pub struct SubmitGuard<S: Surface> {
    shared: Rc<RefCell<Shared<S>>>,
}

impl<S: Surface> SubmitGuard<S> {
    /// Commit the rating from inside the callback.
    ///
    /// Same contract as [`Rater::set_rating`]; this exists because the widget
    /// is mutably borrowed while the callback runs.
    pub fn set_rating(&self, value: f64) -> Result<(), RatingError> {
        self.shared.borrow_mut().set_rating(value)
    }

    /// The committed rating as currently stored.
    pub fn rating(&self) -> Option<f64> {
        self.shared.borrow().committed
    }

    /// Signal completion: clear the busy marker and accept input again.
    pub fn done(self) {
        let mut shared = self.shared.borrow_mut();
        if !shared.disabled {
            shared.surface.remove_attribute(TITLE_ATTR);
        }
        shared.submitting = false;
        shared.surface.remove_class(BUSY_CLASS);
        log::debug!("submit completed, rating={:?}", shared.committed);
    }
}

type HoverCallback = Box<dyn FnMut(f64, Option<f64>)>;
type LeaveCallback = Box<dyn FnMut(Option<f64>, Option<f64>)>;

/// The star-rating widget.
///
/// Owns its mounting surface exclusively; feed it [`PointerEvent`]s and use
/// the control surface (`set_rating`, `clear`, `enable`, `disable`,
/// `dispose`) from the embedding application.
pub struct Rater<S: Surface> {
    shared: Rc<RefCell<Shared<S>>>,
    step: f64,
    reverse: bool,
    preview: Option<f64>,
    hovering: bool,
    attached: bool,
    hover_cb: Option<HoverCallback>,
    leave_cb: Option<LeaveCallback>,
    rate_cb: Option<Box<dyn FnMut(f64, SubmitGuard<S>)>>,
}

impl<S: Surface> Rater<S> {
    /// Mount the widget on a surface.
    ///
    /// Validates the configuration, applies the widget classes and sizing,
    /// and seeds the committed rating from `config.rating` or, failing that,
    /// from a parseable `data-rating` attribute already on the surface. An
    /// out-of-range seed fails construction; no partial widget is returned.
    pub fn mount(mut surface: S, config: RaterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        surface.add_class(ROOT_CLASS);
        if config.reverse {
            surface.add_class(RTL_CLASS);
        }
        surface.set_size(config.star_size * config.stars, config.star_size);
        surface.set_background_size(config.star_size);

        // Config takes priority over surface markup. A data-rating attribute
        // that does not parse as a finite number is treated as unset.
        let seed = config.rating.or_else(|| {
            surface
                .attribute(RATING_ATTR)
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .filter(|value| value.is_finite())
        });

        let shared = Rc::new(RefCell::new(Shared {
            surface,
            stars: config.stars,
            committed: None,
            submitting: false,
            disabled: false,
        }));
        let mut rater = Self {
            shared,
            step: config.step,
            reverse: config.reverse,
            preview: None,
            hovering: false,
            attached: true,
            hover_cb: None,
            leave_cb: None,
            rate_cb: None,
        };

        match seed {
            Some(value) => rater.set_rating(value)?,
            None => rater.shared.borrow_mut().surface.collapse_fill(),
        }
        if config.read_only {
            rater.disable();
        }
        log::debug!(
            "mounted rater: stars={} step={} rating={:?}",
            config.stars,
            config.step,
            rater.rating()
        );
        Ok(rater)
    }

    /// Register the hover callback, invoked with `(preview, committed)` on
    /// every preview update.
    pub fn on_hover(&mut self, callback: impl FnMut(f64, Option<f64>) + 'static) {
        self.hover_cb = Some(Box::new(callback));
    }

    /// Register the leave callback, invoked with `(last preview, committed)`
    /// when the pointer leaves the widget.
    pub fn on_leave(&mut self, callback: impl FnMut(Option<f64>, Option<f64>) + 'static) {
        self.leave_cb = Some(Box::new(callback));
    }

    /// Register the rate callback, invoked with the candidate rating and the
    /// completion guard when the user commits. Without one, clicks are no-ops.
    pub fn on_rate(&mut self, callback: impl FnMut(f64, SubmitGuard<S>) + 'static) {
        self.rate_cb = Some(Box::new(callback));
    }

    /// Feed one pointer or touch event through the state machine.
    ///
    /// All events are ignored after [`dispose`](Self::dispose), while
    /// disabled, and (except leave) while a commit is outstanding.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        if !self.attached {
            return;
        }
        match event {
            PointerEvent::Move { position }
            | PointerEvent::TouchStart { position }
            | PointerEvent::TouchMove { position } => self.preview_at(position),
            PointerEvent::Leave | PointerEvent::TouchCancel => self.end_preview(),
            PointerEvent::Click => self.commit(),
            PointerEvent::TouchEnd { position } => {
                self.preview_at(position);
                self.commit();
            }
        }
    }

    /// Programmatically set the committed rating.
    ///
    /// Works in any phase, including while disabled or submitting; the fill
    /// and `data-rating` marker update immediately. Accepts any finite value
    /// in `[0, stars]`, step-aligned or not.
    pub fn set_rating(&mut self, value: f64) -> Result<(), RatingError> {
        self.shared.borrow_mut().set_rating(value)
    }

    /// The committed rating, or `None` when unset.
    pub fn rating(&self) -> Option<f64> {
        self.shared.borrow().committed
    }

    /// Reset to unset: collapse the fill and drop the rating and title
    /// markers. Works in any phase.
    pub fn clear(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.committed = None;
        shared.surface.collapse_fill();
        shared.surface.remove_attribute(RATING_ATTR);
        shared.surface.remove_attribute(TITLE_ATTR);
    }

    /// Allow interaction again and drop the disabled markers.
    pub fn enable(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.disabled = false;
        shared.surface.remove_attribute(TITLE_ATTR);
        shared.surface.remove_class(DISABLED_CLASS);
    }

    /// Block interaction and mark the widget disabled.
    ///
    /// Does not cancel an outstanding commit; the guard stays valid.
    pub fn disable(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.disabled = true;
        shared.surface.add_class(DISABLED_CLASS);
    }

    /// Detach from input. Further events are ignored; the surface's visual
    /// state is left as is. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.attached {
            log::debug!("rater disposed");
        }
        self.attached = false;
    }

    /// Read-only view of the mounting surface.
    pub fn surface(&self) -> Ref<'_, S> {
        Ref::map(self.shared.borrow(), |shared| &shared.surface)
    }

    /// Current interaction phase.
    pub fn phase(&self) -> Phase {
        if self.shared.borrow().submitting {
            Phase::Submitting
        } else if self.hovering {
            Phase::Previewing
        } else {
            Phase::Idle
        }
    }

    /// Whether a commit is awaiting its completion signal.
    pub fn is_submitting(&self) -> bool {
        self.shared.borrow().submitting
    }

    /// Whether interaction is currently disabled.
    pub fn is_disabled(&self) -> bool {
        self.shared.borrow().disabled
    }

    /// Maximum rating, as configured.
    pub fn stars(&self) -> f64 {
        self.shared.borrow().stars
    }

    /// Interaction granularity, as configured.
    pub fn step(&self) -> f64 {
        self.step
    }

    fn preview_at(&mut self, position: Point) {
        let (width, stars, committed) = {
            let shared = self.shared.borrow();
            if shared.disabled || shared.submitting {
                return;
            }
            (shared.surface.width(), shared.stars, shared.committed)
        };
        let preview = rating_for_offset(position.x, width, stars, self.step, self.reverse);
        {
            let mut shared = self.shared.borrow_mut();
            shared.surface.set_fill_percent(preview / stars * 100.0);
            shared
                .surface
                .set_attribute(RATING_ATTR, &preview.to_string());
        }
        self.preview = Some(preview);
        self.hovering = true;
        log::trace!("preview {preview}");
        if let Some(callback) = self.hover_cb.as_mut() {
            callback(preview, committed);
        }
    }

    fn end_preview(&mut self) {
        let committed = {
            let mut shared = self.shared.borrow_mut();
            if shared.submitting {
                return;
            }
            match shared.committed {
                Some(value) => {
                    let percent = value / shared.stars * 100.0;
                    shared.surface.set_fill_percent(percent);
                    shared.surface.set_attribute(RATING_ATTR, &value.to_string());
                }
                None => {
                    shared.surface.set_fill_percent(0.0);
                    shared.surface.remove_attribute(RATING_ATTR);
                }
            }
            shared.committed
        };
        self.hovering = false;
        if let Some(callback) = self.leave_cb.as_mut() {
            callback(self.preview, committed);
        }
    }

    fn commit(&mut self) {
        {
            let shared = self.shared.borrow();
            if shared.disabled || shared.submitting {
                return;
            }
        }
        if self.rate_cb.is_none() {
            return;
        }
        // A click with no preceding move has nothing to commit.
        let Some(candidate) = self.preview else {
            return;
        };
        {
            let mut shared = self.shared.borrow_mut();
            shared.submitting = true;
            shared.surface.add_class(BUSY_CLASS);
        }
        log::debug!("commit candidate {candidate}");
        let guard = SubmitGuard {
            shared: Rc::clone(&self.shared),
        };
        if let Some(callback) = self.rate_cb.as_mut() {
            callback(candidate, guard);
        }
    }
}
