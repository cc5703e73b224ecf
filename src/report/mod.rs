//! Report rendering: CSV export and terminal formatting

mod csv_export;
mod display;

pub use csv_export::{export_csv, fixed2, render_report, write_report, DEFAULT_REPORT_FILE};
pub use display::{format_currency, format_percentage};
