use std::path::Path;

use synkit_types::{DictionaryEntry, ResultList};

/// User-maintained synonym list.
///
/// One entry per line: `keyword, synonym, synonym...`. Lines starting with
/// the comment character are skipped, fields are trimmed and empty fields dropped.
#[derive(Debug, Clone, Default)]
pub struct CustomDictionary {
    entries: Vec<DictionaryEntry>,
}

impl CustomDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(content: &str, comment_char: char) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with(comment_char))
            .filter_map(parse_line)
            .collect();

        Self { entries }
    }

    pub fn load_from_file(path: &Path, comment_char: char) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading custom dictionary: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let dictionary = Self::parse(&content, comment_char);
        tracing::info!("Loaded {} custom dictionary entries", dictionary.entry_count());
        Ok(dictionary)
    }

    /// Append the entries of `other` after ours
    pub fn merge(mut self, other: CustomDictionary) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries whose keyword contains `word`, flattened as keyword then child lines
    pub fn lookup(&self, word: &str) -> ResultList {
        let mut results = ResultList::new();
        if word.is_empty() {
            return results;
        }

        for entry in self.entries.iter().filter(|e| e.keyword.contains(word)) {
            entry.flatten_into(&mut results);
        }
        results
    }

    /// (keyword, synonym) pairs in file order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|entry| {
            entry
                .definitions
                .iter()
                .map(move |d| (entry.keyword.as_str(), d.as_str()))
        })
    }
}

fn parse_line(line: &str) -> Option<DictionaryEntry> {
    let mut fields = line.split(',').map(str::trim).filter(|f| !f.is_empty());
    let keyword = fields.next()?;
    Some(DictionaryEntry::new(
        keyword,
        fields.map(str::to_string).collect(),
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
