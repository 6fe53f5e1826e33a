//! The filename rule: the first `n` characters of the stem move to the end,
//! after an underscore, and the result is trimmed at its outer edges.

use crate::error::{Result, ShiftError};

/// One computed rename, valid between planning and the filesystem call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftedName {
    /// Stem with the moved characters removed, before trimming
    pub remainder: String,
    /// The characters taken off the front of the stem
    pub moved: String,
    pub new_name: String,
}

/// Split a base name at its last `.` into `(stem, extension)`.
///
/// The extension keeps the dot and is empty when there is none, so
/// `.gitignore` has an empty stem and `README` an empty extension.
pub fn split_name(file: &str) -> (&str, &str) {
    match file.rfind('.') {
        Some(idx) => file.split_at(idx),
        None => (file, ""),
    }
}

/// Compute the new name for `file` with `count` characters moved.
///
/// Counts are in characters, not bytes. A negative count or one larger than
/// the stem is a [`ShiftError::Bounds`].
pub fn shift_name(file: &str, count: i64) -> Result<ShiftedName> {
    let (stem, extension) = split_name(file);
    let stem_len = stem.chars().count();

    let n = usize::try_from(count)
        .ok()
        .filter(|n| *n <= stem_len)
        .ok_or_else(|| ShiftError::Bounds {
            file: file.to_string(),
            count,
            stem_len,
        })?;

    let split_at = stem.char_indices().nth(n).map_or(stem.len(), |(i, _)| i);
    let (moved, remainder) = stem.split_at(split_at);

    let new_stem = format!("{remainder}_{moved}");
    let new_name = format!("{}{extension}", new_stem.trim());

    Ok(ShiftedName {
        remainder: remainder.to_string(),
        moved: moved.to_string(),
        new_name,
    })
}
