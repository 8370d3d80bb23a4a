/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the roster views
use chrono::{DateTime, Utc};

/// Format a record timestamp as DD.MM.YYYY for table cells
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a record timestamp as DD.MM.YYYY HH:MM for card subtitles
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y %H:%M").to_string()
}
