//! Plaintext line format for the note collection.
//!
//! One record per line: `title|content\n`. Only the first separator splits
//! a record, so content may contain `|`.

use crate::error::{NotesError, Result};
use crate::notes::{Notes, SEPARATOR};

/// Serialize notes into the line format.
pub fn encode(notes: &Notes) -> String {
    let mut out = String::new();
    for (title, content) in notes {
        out.push_str(title);
        out.push(SEPARATOR);
        out.push_str(content);
        out.push('\n');
    }
    out
}

/// Parse the line format back into notes.
///
/// Duplicate titles keep the last record.
///
/// # Errors
///
/// Returns `NotesError::Format` if the bytes are not UTF-8, a line is empty,
/// a line has no separator, or a title is empty.
pub fn decode(plaintext: &[u8]) -> Result<Notes> {
    let text = std::str::from_utf8(plaintext)
        .map_err(|e| NotesError::format(0, format!("plaintext is not UTF-8: {}", e)))?;

    let mut notes = Notes::new();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let (title, content) = line
            .split_once(SEPARATOR)
            .ok_or_else(|| NotesError::format(line_number, "missing separator"))?;
        if title.is_empty() {
            return Err(NotesError::format(line_number, "empty title"));
        }
        notes.insert_unchecked(title.to_string(), content.to_string());
    }
    Ok(notes)
}
