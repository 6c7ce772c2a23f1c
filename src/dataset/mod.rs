//! The time-series table and the date columns inferred from its header.

pub mod schema;
pub mod table;

pub use schema::{infer_date_schema, select_date_columns, DateColumn};
pub use table::Table;
