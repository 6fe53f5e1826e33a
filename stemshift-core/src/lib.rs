#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod executor;
pub mod operations;
pub mod output;
pub mod prompt;
pub mod scanner;
pub mod transform;

pub use config::{Config, InvalidCountPolicy};
pub use error::{Result, ShiftError};
pub use executor::{rename_all, RenameRecord};
pub use operations::shift_operation;
pub use output::{format_summary, ShiftResult, SUCCESS_MESSAGE};
pub use prompt::{read_count, COUNT_PROMPT};
pub use scanner::{scan_directory, FileList};
pub use transform::{shift_name, split_name, ShiftedName};
