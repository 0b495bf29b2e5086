use chrono::NaiveDate;

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Decoded payload of one data bar group.
///
/// Groups serialize their observation as two string attributes; anything
/// that fails to decode is treated as absence, never as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarDatum {
    pub date: NaiveDate,
    pub value: f64,
}

impl BarDatum {
    #[must_use]
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Decodes the `data-d`/`data-v` attribute pair.
    ///
    /// Returns `None` when the date is not an ISO-8601 calendar date or the
    /// value is not finite numeric text.
    #[must_use]
    pub fn parse(date: &str, value: &str) -> Option<Self> {
        let date = parse_iso_date(date)?;
        let value: f64 = value.trim().parse().ok()?;
        value.is_finite().then_some(Self { date, value })
    }
}
