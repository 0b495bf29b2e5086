pub mod format;
pub mod types;
pub mod url;

pub use format::{DateStyle, format_date, tooltip_label};
pub use types::{BarDatum, parse_iso_date};
pub use url::with_range_params;
