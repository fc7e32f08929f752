//! Photo gallery carousel.
//!
//! Tracks the active slide and decides when the timed auto-advance may run.
//! Two things hold auto-advance back: the pointer resting over the gallery
//! (held until the pointer leaves) and a quiet period after any manual
//! navigation. Suppression is plain data here; the UI layer runs a single
//! free-running interval and asks [`Carousel::auto_advance`] on every fire,
//! so there are no timers to cancel and recreate.

use std::time::{Duration, Instant};

use crate::error::InviteError;

/// Period between automatic slide changes.
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_millis(5000);

/// Quiet period after manual navigation before auto-advance is eligible
/// again.
pub const RESUME_DELAY: Duration = Duration::from_millis(5000);

/// Carousel state machine.
///
/// `current` always indexes a valid slide; `new` rejects an empty slide set
/// so the modular arithmetic in `next`/`prev` can never divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    pointer_over: bool,
    resume_at: Option<Instant>,
}

impl Carousel {
    pub fn new(slide_count: usize) -> Result<Self, InviteError> {
        if slide_count == 0 {
            return Err(InviteError::EmptyCarousel);
        }
        Ok(Self {
            slide_count,
            current: 0,
            pointer_over: false,
            resume_at: None,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Advance to the next slide, wrapping at the end.
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.slide_count;
        self.current
    }

    /// Step back to the previous slide, wrapping at the start.
    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
        self.current
    }

    /// Jump straight to a slide (indicator click). Always applies the
    /// manual-navigation pause-then-resume policy.
    pub fn go_to(&mut self, index: usize, now: Instant) -> Result<usize, InviteError> {
        if index >= self.slide_count {
            return Err(InviteError::SlideOutOfRange {
                index,
                slide_count: self.slide_count,
            });
        }
        self.current = index;
        self.interact(now);
        Ok(self.current)
    }

    /// Record a manual navigation: auto-advance stays suppressed until
    /// [`RESUME_DELAY`] of quiet has passed.
    pub fn interact(&mut self, now: Instant) {
        self.resume_at = Some(now + RESUME_DELAY);
    }

    /// Pointer entered the gallery region: suppress auto-advance until the
    /// pointer leaves.
    pub fn pointer_enter(&mut self) {
        self.pointer_over = true;
    }

    /// Pointer left the gallery region: lift all suppression immediately,
    /// including any pending quiet period.
    pub fn pointer_leave(&mut self) {
        self.pointer_over = false;
        self.resume_at = None;
    }

    /// Whether auto-advance is currently held back.
    pub fn is_suppressed(&self, now: Instant) -> bool {
        self.pointer_over || self.resume_at.is_some_and(|resume_at| now < resume_at)
    }

    /// One fire of the auto-advance timer. Advances (as [`Carousel::next`])
    /// only when not suppressed and returns the new index; a suppressed fire
    /// leaves the index untouched.
    pub fn auto_advance(&mut self, now: Instant) -> Option<usize> {
        if self.resume_at.is_some_and(|resume_at| now >= resume_at) {
            self.resume_at = None;
        }
        if self.pointer_over || self.resume_at.is_some() {
            return None;
        }
        Some(self.next())
    }

    /// Horizontal offset of the slide track, as a percentage of the track
    /// width. The track is `slide_count x 100%` of the viewport wide, so
    /// `-(current * 100 / slide_count)` puts the active slide exactly in
    /// view.
    pub fn track_offset_percent(&self) -> f64 {
        -(self.current as f64 * 100.0 / self.slide_count as f64)
    }
}
