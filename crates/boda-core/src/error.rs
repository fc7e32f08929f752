//! Error types for the wedding invitation core

use thiserror::Error;

/// Main error type for invitation component setup.
///
/// Every failure here is recoverable at the page level: the affected
/// component logs the error and disables itself, the rest of the page keeps
/// working.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InviteError {
    /// Carousel was configured with zero slides
    #[error("carousel needs at least one slide")]
    EmptyCarousel,

    /// Requested slide index is outside the configured range
    #[error("slide index {index} out of range ({slide_count} slides)")]
    SlideOutOfRange { index: usize, slide_count: usize },

    /// The configured wedding date does not name a valid calendar instant
    #[error("invalid wedding date in configuration: {0}")]
    InvalidDate(String),
}
