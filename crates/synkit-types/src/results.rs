use serde::{Deserialize, Serialize};

/// Leading marker of a line that belongs to the preceding keyword
pub const CHILD_MARKER: char = '\t';

/// Flattened lookup output in append order.
///
/// Lines are either a bare keyword or a child line (definition or synonym)
/// that starts with [`CHILD_MARKER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultList {
    lines: Vec<String>,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Append without any duplicate check
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn push_child(&mut self, text: &str) {
        self.lines.push(format!("{CHILD_MARKER}{text}"));
    }

    /// Append `line` unless an identical string is already present
    pub fn push_unique(&mut self, line: &str) -> bool {
        if self.contains(line) {
            return false;
        }
        self.lines.push(line.to_string());
        true
    }

    /// Merge a batch, keeping first occurrences only. Returns how many lines were added.
    pub fn merge_unique(&mut self, batch: &ResultList) -> usize {
        batch.iter().filter(|line| self.push_unique(line)).count()
    }

    /// Child lines with the marker removed
    pub fn children(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(child_text)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.lines
    }
}

/// Returns the text after the marker if `line` is a child line
pub fn child_text(line: &str) -> Option<&str> {
    line.strip_prefix(CHILD_MARKER)
}

/// Text a host should insert for `line`: marker and surrounding whitespace removed
pub fn insertion_text(line: &str) -> &str {
    child_text(line).unwrap_or(line).trim()
}

impl From<Vec<String>> for ResultList {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl FromIterator<String> for ResultList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ResultList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

/// A keyword with its ordered definitions or synonyms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub keyword: String,
    pub definitions: Vec<String>,
}

impl DictionaryEntry {
    pub fn new(keyword: impl Into<String>, definitions: Vec<String>) -> Self {
        Self {
            keyword: keyword.into(),
            definitions,
        }
    }

    /// Keyword line followed by one child line per definition
    pub fn flatten_into(&self, results: &mut ResultList) {
        results.push(self.keyword.clone());
        for definition in &self.definitions {
            results.push_child(definition);
        }
    }
}
