//! Countdown to the wedding date.
//!
//! The countdown is a tiny one-shot state machine: it counts down while the
//! target is ahead, and the first tick that observes an elapsed target
//! performs the completion transition exactly once. Callers feed in the
//! current wall clock on every tick, so remaining time is always recomputed
//! from an absolute difference and timer drift cannot accumulate.

use chrono::NaiveDateTime;

/// Period between countdown ticks.
pub const TICK_PERIOD: std::time::Duration = std::time::Duration::from_millis(1000);

/// The display turns urgent once this many days (or fewer) remain.
pub const URGENT_THRESHOLD_DAYS: u64 = 1;

/// Remaining time to the target, decomposed for display.
///
/// Produced by floor division of the millisecond difference: no rounding,
/// so `23:59:59.900` remaining still shows as zero days, 23 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    /// Decompose a non-negative millisecond difference. Negative input is
    /// clamped to zero.
    pub fn from_millis(millis: i64) -> Self {
        let total_seconds = millis.max(0) as u64 / 1000;
        Self {
            days: total_seconds / 86_400,
            hours: total_seconds / 3_600 % 24,
            minutes: total_seconds / 60 % 60,
            seconds: total_seconds % 60,
        }
    }

    /// All fields zero; what the display freezes on after completion.
    pub fn zero() -> Self {
        Self::default()
    }

    /// True when the wedding is a day away or less.
    pub fn is_urgent(&self) -> bool {
        self.days <= URGENT_THRESHOLD_DAYS
    }
}

/// Two-digit zero-padded field rendering. Day counts past 99 simply grow.
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}

/// Outcome of a single countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Target still ahead; render the remaining time.
    Counting(TimeRemaining),
    /// Target reached. `just_completed` is true only on the tick that
    /// crossed it; every later tick reports `false`.
    Elapsed { just_completed: bool },
}

/// Countdown state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    target: NaiveDateTime,
    completed: bool,
}

impl Countdown {
    pub fn new(target: NaiveDateTime) -> Self {
        Self {
            target,
            completed: false,
        }
    }

    pub fn target(&self) -> NaiveDateTime {
        self.target
    }

    /// Whether the one-shot completion transition has already run.
    pub fn has_completed(&self) -> bool {
        self.completed
    }

    /// Advance the countdown against the given wall clock.
    ///
    /// Once completed the countdown stays completed, even if the clock later
    /// reads as before the target again; the display is frozen at zero.
    pub fn tick(&mut self, now: NaiveDateTime) -> CountdownTick {
        if self.completed {
            return CountdownTick::Elapsed {
                just_completed: false,
            };
        }

        let difference = (self.target - now).num_milliseconds();
        if difference <= 0 {
            self.completed = true;
            tracing::debug!(target_date = %self.target, "countdown reached the wedding date");
            CountdownTick::Elapsed {
                just_completed: true,
            }
        } else {
            CountdownTick::Counting(TimeRemaining::from_millis(difference))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn wedding() -> NaiveDateTime {
        at(2026, 3, 21, 15, 0, 0)
    }

    #[test]
    fn decomposes_with_floor_division() {
        // 2d 03:04:05 plus 900ms; the fraction must not round anything up
        let millis = (((2 * 24 + 3) * 3600 + 4 * 60 + 5) * 1000 + 900) as i64;
        let remaining = TimeRemaining::from_millis(millis);
        assert_eq!(
            remaining,
            TimeRemaining {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5,
            }
        );
    }

    #[test]
    fn negative_difference_clamps_to_zero() {
        assert_eq!(TimeRemaining::from_millis(-5000), TimeRemaining::zero());
    }

    #[test]
    fn one_day_before_is_urgent() {
        let mut countdown = Countdown::new(wedding());
        match countdown.tick(at(2026, 3, 20, 15, 0, 0)) {
            CountdownTick::Counting(remaining) => {
                assert_eq!(pad2(remaining.days), "01");
                assert_eq!(pad2(remaining.hours), "00");
                assert_eq!(pad2(remaining.minutes), "00");
                assert_eq!(pad2(remaining.seconds), "00");
                assert!(remaining.is_urgent());
            }
            other => panic!("expected Counting, got {other:?}"),
        }
    }

    #[test]
    fn two_days_before_is_not_urgent() {
        let remaining = TimeRemaining::from_millis(2 * 86_400 * 1000);
        assert!(!remaining.is_urgent());
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut countdown = Countdown::new(wedding());
        let after = at(2026, 3, 21, 15, 0, 1);

        assert_eq!(
            countdown.tick(after),
            CountdownTick::Elapsed {
                just_completed: true
            }
        );
        // Repeated ticks are idempotent
        for _ in 0..3 {
            assert_eq!(
                countdown.tick(after),
                CountdownTick::Elapsed {
                    just_completed: false
                }
            );
        }
        assert!(countdown.has_completed());
    }

    #[test]
    fn exact_target_instant_counts_as_elapsed() {
        let mut countdown = Countdown::new(wedding());
        assert_eq!(
            countdown.tick(wedding()),
            CountdownTick::Elapsed {
                just_completed: true
            }
        );
    }

    #[test]
    fn stays_completed_if_clock_moves_backwards() {
        let mut countdown = Countdown::new(wedding());
        countdown.tick(at(2026, 3, 21, 15, 0, 1));
        assert_eq!(
            countdown.tick(at(2026, 3, 19, 12, 0, 0)),
            CountdownTick::Elapsed {
                just_completed: false
            }
        );
    }

    #[test]
    fn pad2_grows_past_two_digits() {
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(42), "42");
        assert_eq!(pad2(123), "123");
    }
}
