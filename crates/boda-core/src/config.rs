//! Fixed wedding configuration.
//!
//! The date and gallery size are decided once, at build time. Nothing here
//! is runtime-configurable; the one thing that can go wrong is a date that
//! does not exist on the calendar, which `target()` surfaces so the
//! countdown can disable itself instead of counting to garbage.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::InviteError;

/// Build-time wedding configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeddingConfig {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Month name as shown in the hero, in the page's locale
    pub month_name: &'static str,
    /// Number of photos in the gallery carousel
    pub slide_count: usize,
}

/// The wedding: 21 de Marzo de 2026, 15:00, eight gallery photos.
pub const WEDDING: WeddingConfig = WeddingConfig {
    year: 2026,
    month: 3,
    day: 21,
    hour: 15,
    minute: 0,
    second: 0,
    month_name: "Marzo",
    slide_count: 8,
};

impl WeddingConfig {
    /// Resolve the configured fields into the target instant (local time,
    /// naive — the page runs in a single fixed locale).
    pub fn target(&self) -> Result<NaiveDateTime, InviteError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_opt(self.hour, self.minute, self.second))
            .ok_or_else(|| {
                InviteError::InvalidDate(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                    self.year, self.month, self.day, self.hour, self.minute, self.second
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedding_date_is_valid() {
        let target = WEDDING.target().unwrap();
        assert_eq!(
            target,
            NaiveDate::from_ymd_opt(2026, 3, 21)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn impossible_date_is_rejected() {
        let config = WeddingConfig {
            month: 2,
            day: 30,
            ..WEDDING
        };
        assert!(matches!(config.target(), Err(InviteError::InvalidDate(_))));
    }
}
