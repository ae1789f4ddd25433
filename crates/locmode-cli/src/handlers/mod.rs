//! Command handlers
//!
//! Each handler renders its output into a `String` through a pure helper so
//! it can be tested without capturing stdout; `execute_*` only prints.

pub mod check;
pub mod detect;
pub mod query;
pub mod table;

pub use check::execute_check;
pub use detect::execute_detect;
pub use query::execute_query;
pub use table::execute_table;
