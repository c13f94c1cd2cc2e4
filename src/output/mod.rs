mod csv;
mod format;
mod images;
mod json;
mod table;

pub use csv::{output_errors_csv, output_records_csv};
pub use format::{NumberFormat, format_number, format_percent};
pub use images::{AssetLookup, ImageTable};
pub use json::{output_records_json, output_report_json};
pub use table::{TableOptions, print_check_table, print_records_table, print_summary_line};
