// Public fallible APIs in this crate share one concrete error contract
// (`MimeTallyError`). Repeating per-function `# Errors` boilerplate obscures
// behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod aggregate;
pub mod classify;
pub mod counts;
pub mod discover;
pub mod error;
pub mod mapping;
pub mod pipeline;
pub mod report;

pub use error::{MimeTallyError, Result};
pub use mapping::MimeTable;
pub use pipeline::{Pipeline, RunSummary};
