//! UI primitives for the notes CLI.
//!
//! - **Context**: color detection (TTY, NO_COLOR, TERM=dumb, --no-color)
//! - **Render**: error and hint lines, the notes table

use std::io::IsTerminal;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use owo_colors::OwoColorize;

/// Terminal context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled on stderr
    pub color: bool,
}

impl UiContext {
    pub fn from_env(no_color_flag: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self {
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
        }
    }
}

/// Format an error message with optional hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let label = if ctx.color {
        format!("{}", "Error:".red().bold())
    } else {
        "Error:".to_string()
    };
    let mut out = format!("{} {}", label, message);
    if let Some(h) = error_hint {
        out.push('\n');
        if ctx.color {
            out.push_str(&format!("{}", h.dimmed()));
        } else {
            out.push_str(h);
        }
    }
    out
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

/// Render `(title, content)` rows as a bordered table.
pub fn notes_table(rows: &[(&str, &str)]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "TITLE", "CONTENT"]);
    for (index, (title, content)) in rows.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), title.to_string(), content.to_string()]);
    }
    table.to_string()
}
