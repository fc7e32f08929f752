//! Color constants for the wedding palette.
//!
//! Olive and cream, matching the printed invitations.

#![allow(dead_code)]

// === OLIVE (Primary, Accents) ===
pub const OLIVE: &str = "#556b2f";
pub const OLIVE_LIGHT: &str = "#6b8e23";
pub const OLIVE_SOFT: &str = "rgba(85, 107, 47, 0.15)";

// === CREAM (Backgrounds) ===
pub const CREAM: &str = "#faf7f2";
pub const CREAM_DARK: &str = "#f0ead9";
pub const CARD_BORDER: &str = "#e4dcc8";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#3a3a33";
pub const TEXT_SECONDARY: &str = "rgba(58, 58, 51, 0.7)";
pub const TEXT_ON_OLIVE: &str = "#faf7f2";

// === SEMANTIC ===
pub const URGENT: &str = "#b63a2e";
pub const GOLD: &str = "#c7a252";
