//! Edge case and boundary condition tests
//!
//! These tests pin down the behavior of the countdown and carousel at the
//! exact boundaries the page cares about: the urgency threshold, the target
//! instant itself, and the quiet-period window around manual navigation.

use std::time::{Duration, Instant};

use boda_core::countdown::pad2;
use boda_core::{Carousel, Countdown, CountdownTick, InviteError, TimeRemaining};
use chrono::{NaiveDate, NaiveDateTime};

fn wedding() -> NaiveDateTime {
    boda_core::config::WEDDING.target().unwrap()
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

// ============================================================================
// Countdown boundaries
// ============================================================================

/// Exactly one day before the wedding: 01/00/00/00 and urgent.
#[test]
fn one_day_out_renders_urgent() {
    let mut countdown = Countdown::new(wedding());
    let tick = countdown.tick(at(2026, 3, 20, 15, 0, 0));

    let CountdownTick::Counting(remaining) = tick else {
        panic!("expected Counting, got {tick:?}");
    };
    assert_eq!(
        [
            pad2(remaining.days),
            pad2(remaining.hours),
            pad2(remaining.minutes),
            pad2(remaining.seconds),
        ],
        ["01", "00", "00", "00"]
    );
    assert!(remaining.is_urgent());
}

/// One second past the wedding: zeroed display, completion fires once.
#[test]
fn one_second_past_completes_once() {
    let mut countdown = Countdown::new(wedding());
    let now = at(2026, 3, 21, 15, 0, 1);

    assert_eq!(
        countdown.tick(now),
        CountdownTick::Elapsed {
            just_completed: true
        }
    );
    assert_eq!(
        countdown.tick(now),
        CountdownTick::Elapsed {
            just_completed: false
        }
    );
    assert_eq!(TimeRemaining::zero(), TimeRemaining::from_millis(0));
}

/// The urgency flag flips exactly at the one-day mark, not before.
#[test]
fn urgency_threshold_is_one_day() {
    let just_over_a_day = TimeRemaining::from_millis(2 * 86_400 * 1000);
    let a_day = TimeRemaining::from_millis(86_400 * 1000);
    let just_under = TimeRemaining::from_millis(86_400 * 1000 - 1);

    assert!(!just_over_a_day.is_urgent());
    assert!(a_day.is_urgent());
    assert!(just_under.is_urgent());
}

/// Sub-second remainders are floored away, never rounded up.
#[test]
fn sub_second_remainder_is_dropped() {
    let remaining = TimeRemaining::from_millis(999);
    assert_eq!(remaining, TimeRemaining::zero());
}

/// Day counts past 99 keep all their digits.
#[test]
fn long_countdown_days_keep_all_digits() {
    let remaining = TimeRemaining::from_millis(123 * 86_400 * 1000);
    assert_eq!(pad2(remaining.days), "123");
}

// ============================================================================
// Carousel boundaries
// ============================================================================

/// Eight slides, prev from the first lands on the last.
#[test]
fn prev_from_zero_wraps() {
    let mut c = Carousel::new(8).unwrap();
    assert_eq!(c.prev(), 7);
}

/// A single-slide carousel is legal and every transition stays on slide 0.
#[test]
fn single_slide_carousel_never_moves_anywhere_else() {
    let mut c = Carousel::new(1).unwrap();
    assert_eq!(c.next(), 0);
    assert_eq!(c.prev(), 0);
    assert_eq!(c.auto_advance(Instant::now()), Some(0));
}

/// Zero slides are rejected up front.
#[test]
fn zero_slides_rejected() {
    assert_eq!(Carousel::new(0), Err(InviteError::EmptyCarousel));
}

/// The quiet period after `go_to` is measured from the navigation, and the
/// auto-advance that finally fires continues from the jumped-to slide.
#[test]
fn quiet_period_window_around_go_to() {
    let base = Instant::now();
    let mut c = Carousel::new(8).unwrap();

    c.go_to(3, base).unwrap();
    assert_eq!(c.auto_advance(base + Duration::from_millis(4999)), None);
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.auto_advance(base + Duration::from_millis(5001)), Some(4));
}

/// A second manual navigation restarts the quiet period.
#[test]
fn quiet_period_restarts_on_each_interaction() {
    let base = Instant::now();
    let mut c = Carousel::new(8).unwrap();

    c.next();
    c.interact(base);
    c.next();
    c.interact(base + Duration::from_millis(3000));

    // 5001ms after the *first* interaction, but only 2001ms after the second
    assert_eq!(c.auto_advance(base + Duration::from_millis(5001)), None);
    assert_eq!(c.auto_advance(base + Duration::from_millis(8001)), Some(3));
}

/// Hover wins over an elapsed quiet period.
#[test]
fn hover_outlives_quiet_period() {
    let base = Instant::now();
    let mut c = Carousel::new(8).unwrap();

    c.interact(base);
    c.pointer_enter();
    assert_eq!(c.auto_advance(base + Duration::from_secs(30)), None);

    c.pointer_leave();
    assert_eq!(c.auto_advance(base + Duration::from_secs(30)), Some(1));
}
