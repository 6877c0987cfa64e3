//! Output rendering (text and JSON)

pub mod report;

pub use report::{write_classification, write_derivation, Report};
