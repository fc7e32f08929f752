//! Visual theme for the invitation page.

pub mod colors;
pub mod styles;

pub use styles::GLOBAL_STYLES;
