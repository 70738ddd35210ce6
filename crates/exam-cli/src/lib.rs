//! Library components of the `exam-validator` command line tool.

pub mod logging;
pub mod summary;
pub mod types;
