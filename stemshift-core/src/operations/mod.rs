//! High-level operations that correspond to a CLI run
//!
//! These sequence the scanner, prompt and executor, separated from CLI
//! concerns like argument parsing, logging setup and exit codes.

pub mod shift;

pub use shift::shift_operation;
