use crate::config::Config;
use crate::error::Result;
use crate::executor::rename_all;
use crate::output::ShiftResult;
use crate::prompt::read_count;
use crate::scanner::scan_directory;
use std::io::{BufRead, Write};
use std::path::Path;

/// One full run: scan `working_dir`, ask for the count on `input`/`output`,
/// then rename every scanned file.
///
/// The scan happens before the prompt, so a directory that cannot be read
/// fails without asking anything.
pub fn shift_operation<R: BufRead, W: Write>(
    working_dir: &Path,
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<ShiftResult> {
    let files = scan_directory(working_dir, config)?;
    let count = read_count(input, output, config.on_invalid_count)?;
    tracing::info!(files = files.len(), count, "Renaming");

    let renames = rename_all(working_dir, &files, count, output)?;
    Ok(ShiftResult { renames })
}
