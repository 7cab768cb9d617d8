//! Pipeline entry points for export operations.
//!
//! - `run_export`: Walk the catalog, fetch details, build and write the table
//! - `build_table`: Filter, title-case, and derive the BMI column

pub mod run;
pub mod table;

pub use run::{ExportSummary, run_export};
pub use table::{COLUMNS, ExportRow, build_table, compute_bmi};
