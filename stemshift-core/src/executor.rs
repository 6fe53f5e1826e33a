use crate::error::{Result, ShiftError};
use crate::transform::shift_name;
use std::fs;
use std::io::Write;
use std::path::Path;

/// A rename that has been carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    /// 1-based position in the batch
    pub index: usize,
    pub from: String,
    pub to: String,
}

/// Rename every file in `files` inside `root`, in order, reporting each one
/// on `output`.
///
/// Stops at the first failure. Files renamed before it stay renamed and
/// files after it are not touched.
pub fn rename_all<W: Write>(
    root: &Path,
    files: &[String],
    count: i64,
    output: &mut W,
) -> Result<Vec<RenameRecord>> {
    let mut done = Vec::with_capacity(files.len());

    for (i, file) in files.iter().enumerate() {
        let shifted = shift_name(file, count)?;

        let from = root.join(file);
        let to = root.join(&shifted.new_name);
        fs::rename(&from, &to).map_err(|source| ShiftError::Rename {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        tracing::debug!(from = %from.display(), to = %to.display(), "Renamed");

        let index = i + 1;
        writeln!(output, "{index}\t{file} renamed to {}", shifted.remainder)?;

        done.push(RenameRecord {
            index,
            from: file.clone(),
            to: shifted.new_name,
        });
    }

    Ok(done)
}
