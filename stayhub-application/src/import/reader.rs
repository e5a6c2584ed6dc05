use std::{fs, path::Path};

use super::ImportError;

/// Reads the whole source file and yields its non-blank lines together
/// with their 1-based line numbers, in file order.
///
/// Single pass; a fresh read starts over from line 1. Line numbers
/// count every physical line, so failure reports stay aligned with the
/// source file even when blank lines are skipped.
pub fn read_lines(path: &Path) -> Result<impl Iterator<Item = (usize, String)>, ImportError> {
    let raw = fs::read_to_string(path).map_err(|source| ImportError::SourceUnreadable {
        path: path.into(),
        source,
    })?;
    let lines: Vec<String> = raw.split('\n').map(str::to_owned).collect();
    Ok(lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line)))
}
