use synkit_config::dictionary::{DictionaryConfig, KIND_PLACEHOLDER, KoreanSearchKind, QUERY_PLACEHOLDER};
use synkit_types::Script;

/// Renders dictionary-specific query URLs
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    english_url: String,
    korean_url: String,
    japanese_url: String,
    korean_kind: KoreanSearchKind,
    encode_english: bool,
}

impl QueryBuilder {
    pub fn new(config: &DictionaryConfig) -> Self {
        Self {
            english_url: config.english_url.clone(),
            korean_url: config.korean_url.clone(),
            japanese_url: config.japanese_url.clone(),
            korean_kind: config.korean_kind,
            encode_english: config.encode_english_query,
        }
    }

    /// URL for `word` on the dictionary of `script`, `None` for unclassified text
    pub fn url(&self, script: Script, word: &str) -> Option<String> {
        match script {
            Script::English => {
                let query = if self.encode_english {
                    urlencoding::encode(word).into_owned()
                } else {
                    word.to_string()
                };
                Some(self.english_url.replace(QUERY_PLACEHOLDER, &query))
            }
            Script::Korean => Some(
                self.korean_url
                    .replace(KIND_PLACEHOLDER, self.korean_kind.as_str())
                    .replace(QUERY_PLACEHOLDER, &urlencoding::encode(word)),
            ),
            Script::Japanese => Some(
                self.japanese_url
                    .replace(QUERY_PLACEHOLDER, &urlencoding::encode(word)),
            ),
            Script::Unknown => None,
        }
    }
}
