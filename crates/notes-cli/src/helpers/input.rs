//! Line input for note titles and content.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;
use notes_core::notes::strip_line_terminator;

/// Use `value` if given, otherwise prompt on a TTY or read one line from stdin.
///
/// A trailing line terminator is stripped so keys never differ by a newline.
pub fn read_field(label: &str, value: Option<String>) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(strip_line_terminator(&value).to_string());
    }

    if io::stdin().is_terminal() {
        let entered: String = Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label.to_lowercase(), e))?;
        return Ok(strip_line_terminator(&entered).to_string());
    }

    read_line_from(io::stdin().lock(), label)
}

fn read_line_from(mut reader: impl BufRead, label: &str) -> anyhow::Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    if read == 0 {
        return Err(anyhow::anyhow!(
            "No {} provided on stdin",
            label.to_lowercase()
        ));
    }
    Ok(strip_line_terminator(&line).to_string())
}
