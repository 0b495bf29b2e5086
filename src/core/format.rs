use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::BarDatum;

/// Date rendering policy for tooltip labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateStyle {
    /// Abbreviated month plus day of month, e.g. `Mar 1`.
    MonthDay,
    /// The ISO-8601 date string verbatim, e.g. `2024-03-01`.
    Iso,
}

impl Default for DateStyle {
    fn default() -> Self {
        Self::MonthDay
    }
}

#[must_use]
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::MonthDay => date.format("%b %-d").to_string(),
        DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
    }
}

/// Renders the tooltip text for a hovered bar, e.g. `Mar 1: 42`.
#[must_use]
pub fn tooltip_label(datum: BarDatum, style: DateStyle) -> String {
    format!("{}: {}", format_date(datum.date, style), datum.value)
}
