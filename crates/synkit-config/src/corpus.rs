use serde::{Deserialize, Serialize};

fn default_max_suggestions() -> usize {
    100
}

fn default_min_word_len() -> usize {
    2
}

fn default_max_word_len() -> usize {
    100
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CorpusConfig {
    /// File extensions tokenised into the word index, e.g. ".md"
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Exclusive lower bound on word length in chars
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    /// Exclusive upper bound on word length in chars
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            extensions: vec![],
            max_suggestions: default_max_suggestions(),
            min_word_len: default_min_word_len(),
            max_word_len: default_max_word_len(),
        }
    }
}

impl CorpusConfig {
    pub fn is_corpus_file(&self, path: &std::path::Path) -> bool {
        crate::dictionary::has_extension(path, &self.extensions)
    }
}
