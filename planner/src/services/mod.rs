//! Service implementations
//!
//! Real implementations of the I/O traits. Everything that reads or writes
//! files lives here; the planning core never does.

pub mod catalog;
pub mod report_writer;

#[cfg(test)]
mod tests;

pub use catalog::{InMemoryCatalog, JsonCatalog};
pub use report_writer::JsonReportWriter;
