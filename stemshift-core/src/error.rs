use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShiftError>;

/// Every failure a run can hit. None of them is recovered locally; the driver
/// decides the exit status from the variant.
#[derive(Debug, Error)]
pub enum ShiftError {
    #[error("failed to scan directory")]
    Scan(#[from] walkdir::Error),

    #[error("invalid character count {input:?}: expected a base-10 integer")]
    Parse { input: String },

    #[error("cannot move {count} characters of {file:?}: stem is only {stem_len} characters long")]
    Bounds {
        file: String,
        count: i64,
        stem_len: usize,
    },

    #[error("failed to rename {} to {}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load config from {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("console I/O failed")]
    Io(#[from] io::Error),
}

impl ShiftError {
    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Rename { .. } => 1,
            Self::Parse { .. } | Self::Bounds { .. } | Self::Config { .. } => 2,
            Self::Scan(_) | Self::Io(_) => 3,
        }
    }
}
