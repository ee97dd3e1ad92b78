//! Output formatting for note listings.

use notes_core::Notes;

use crate::errors::CliError;
use crate::ui::notes_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Table,
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unknown format \"{}\" (expected plain or table)",
            other
        ))
        .into()),
    }
}

/// Notes sorted by title, so listings are stable between runs.
fn sorted(notes: &Notes) -> Vec<(&str, &str)> {
    let mut rows: Vec<(&str, &str)> = notes.iter().collect();
    rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
    rows
}

/// Render notes as `N: title`, the content, and a blank line per note.
pub fn render_plain(notes: &Notes) -> String {
    let mut out = String::new();
    for (index, (title, content)) in sorted(notes).into_iter().enumerate() {
        out.push_str(&format!("{}: {}\n{}\n\n", index + 1, title, content));
    }
    out
}

pub fn render_table(notes: &Notes) -> String {
    notes_table(&sorted(notes))
}

pub fn render_json(notes: &Notes) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(notes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Notes {
        let mut notes = Notes::new();
        notes.insert("groceries", "milk, eggs").unwrap();
        notes.insert("beach", "towel").unwrap();
        notes
    }

    #[test]
    fn test_render_plain_sorted() {
        assert_eq!(
            render_plain(&sample()),
            "1: beach\ntowel\n\n2: groceries\nmilk, eggs\n\n"
        );
    }

    #[test]
    fn test_render_plain_empty() {
        assert_eq!(render_plain(&Notes::new()), "");
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "groceries": "milk, eggs", "beach": "towel" })
        );
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("table")).unwrap(),
            Some(OutputFormat::Table)
        );
        assert!(parse_output_format(Some("yaml")).is_err());
    }
}
