use serde::{Deserialize, Serialize};

/// Placeholder replaced by the encoded query in URL templates
pub const QUERY_PLACEHOLDER: &str = "{query}";
/// Placeholder replaced by [`KoreanSearchKind`] in the Korean template
pub const KIND_PLACEHOLDER: &str = "{kind}";

fn default_english_url() -> String {
    "http://endic.naver.com/search.nhn?query={query}&searchOption=thesaurus".to_string()
}

fn default_korean_url() -> String {
    "http://krdic.naver.com/search.nhn?kind={kind}&query={query}".to_string()
}

fn default_japanese_url() -> String {
    "http://jpdic.naver.com/search.nhn?range=word&q={query}".to_string()
}

fn default_max_query_depth() -> usize {
    20
}

fn default_encode_english_query() -> bool {
    true
}

fn default_custom_dictionary_extensions() -> Vec<String> {
    vec![".cwkcsv".to_string()]
}

fn default_comment_char() -> char {
    '#'
}

/// Which part of a Korean dictionary page the query searches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KoreanSearchKind {
    /// Headwords and body text
    #[default]
    All,
    /// Headwords only
    Keyword,
}

impl KoreanSearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KoreanSearchKind::All => "all",
            KoreanSearchKind::Keyword => "keyword",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_english_url")]
    pub english_url: String,
    #[serde(default = "default_korean_url")]
    pub korean_url: String,
    #[serde(default)]
    pub korean_kind: KoreanSearchKind,
    /// Declared but never queried: Japanese lookups are not implemented
    #[serde(default = "default_japanese_url")]
    pub japanese_url: String,
    /// Total fetches allowed in one Korean expansion session
    #[serde(default = "default_max_query_depth")]
    pub max_query_depth: usize,
    #[serde(default = "default_encode_english_query")]
    pub encode_english_query: bool,
    #[serde(default = "default_custom_dictionary_extensions")]
    pub custom_dictionary_extensions: Vec<String>,
    #[serde(default = "default_comment_char")]
    pub comment_char: char,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            english_url: default_english_url(),
            korean_url: default_korean_url(),
            korean_kind: KoreanSearchKind::default(),
            japanese_url: default_japanese_url(),
            max_query_depth: default_max_query_depth(),
            encode_english_query: default_encode_english_query(),
            custom_dictionary_extensions: default_custom_dictionary_extensions(),
            comment_char: default_comment_char(),
        }
    }
}

impl DictionaryConfig {
    pub fn is_custom_dictionary(&self, path: &std::path::Path) -> bool {
        has_extension(path, &self.custom_dictionary_extensions)
    }
}

/// Extension match against a list written with the leading dot (".txt")
pub fn has_extension(path: &std::path::Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|candidate| candidate.strip_prefix('.').unwrap_or(candidate) == ext)
}
