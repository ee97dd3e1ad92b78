//! The in-memory note collection.

use std::collections::hash_map;
use std::collections::HashMap;

use serde::Serialize;

use crate::error::{NotesError, Result};

/// Reserved delimiter between title and content in the plaintext format.
pub const SEPARATOR: char = '|';

/// A set of title → content pairs.
///
/// Titles are unique and non-empty, and contain neither [`SEPARATOR`] nor a
/// line terminator. Content may contain the separator but no line terminator.
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Notes {
    entries: HashMap<String, String>,
}

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a note after validating title and content.
    ///
    /// Returns the previous content for `title`, if any.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Option<String>> {
        let title = title.into();
        let content = content.into();
        validate_title(&title)?;
        validate_content(&content)?;
        Ok(self.entries.insert(title, content))
    }

    /// Remove a note, returning its content if it existed.
    pub fn remove(&mut self, title: &str) -> Option<String> {
        self.entries.remove(title)
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.entries.get(title).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Insert without validation; used by the decoder, which checks records itself.
    pub(crate) fn insert_unchecked(&mut self, title: String, content: String) {
        self.entries.insert(title, content);
    }
}

/// Iterator over `(title, content)` pairs.
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(title, content)| (title.as_str(), content.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Notes {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Strip one trailing line terminator (`\n` or `\r\n`) from line input.
pub fn strip_line_terminator(input: &str) -> &str {
    let input = input.strip_suffix('\n').unwrap_or(input);
    input.strip_suffix('\r').unwrap_or(input)
}

fn has_line_terminator(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(NotesError::InvalidInput(
            "Title cannot be empty".to_string(),
        ));
    }
    if title.contains(SEPARATOR) {
        return Err(NotesError::InvalidInput(format!(
            "Title cannot contain '{}'",
            SEPARATOR
        )));
    }
    if has_line_terminator(title) {
        return Err(NotesError::InvalidInput(
            "Title cannot contain a line break".to_string(),
        ));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<()> {
    if has_line_terminator(content) {
        return Err(NotesError::InvalidInput(
            "Content cannot contain a line break".to_string(),
        ));
    }
    Ok(())
}
