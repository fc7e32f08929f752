//! Wedding Invitation Core Library
//!
//! The stateful heart of the invitation page: a countdown to the wedding
//! date and the photo gallery carousel. Both are plain state machines with
//! wall-clock time injected by the caller, so every transition is
//! deterministic and testable without timers or a UI.
//!
//! ## Quick Start
//!
//! ```
//! use boda_core::{Carousel, Countdown, CountdownTick};
//! use boda_core::config::WEDDING;
//! use std::time::Instant;
//!
//! let mut countdown = Countdown::new(WEDDING.target().unwrap());
//! match countdown.tick(chrono::Local::now().naive_local()) {
//!     CountdownTick::Counting(remaining) => println!("{} days to go", remaining.days),
//!     CountdownTick::Elapsed { .. } => println!("¡Ya nos casamos!"),
//! }
//!
//! let mut gallery = Carousel::new(WEDDING.slide_count).unwrap();
//! gallery.next();
//! assert_eq!(gallery.current_index(), 1);
//! # let _ = gallery.auto_advance(Instant::now());
//! ```

pub mod carousel;
pub mod config;
pub mod countdown;
pub mod error;

// Re-exports
pub use carousel::{Carousel, AUTO_ADVANCE_PERIOD, RESUME_DELAY};
pub use config::WeddingConfig;
pub use countdown::{Countdown, CountdownTick, TimeRemaining, TICK_PERIOD};
pub use error::InviteError;
