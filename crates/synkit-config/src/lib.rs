use std::env;

use serde::{Deserialize, Serialize};

use self::corpus::CorpusConfig;
use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;
use self::ui::UiConfig;
use self::voice::VoiceConfig;

pub mod corpus;
pub mod dictionary;
pub mod network;
pub mod ui;
pub mod voice;

pub const ENV_TIMEOUT_SECONDS: &str = "SYNKIT_TIMEOUT_SECONDS";
pub const ENV_MAX_QUERY_DEPTH: &str = "SYNKIT_MAX_QUERY_DEPTH";
pub const ENV_DEBUG: &str = "SYNKIT_DEBUG";

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Verbose logging when RUST_LOG is not set
    pub debug: bool,
    pub network: NetworkConfig,
    pub dictionary: DictionaryConfig,
    pub voice: VoiceConfig,
    pub corpus: CorpusConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Apply `SYNKIT_*` environment overrides
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_overrides(|key| env::var(key).ok());
        self
    }

    /// Apply overrides from any key/value source. Unparsable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECONDS).and_then(|v| v.parse().ok()) {
            self.network.timeout_seconds = timeout;
        }

        if let Some(depth) = lookup(ENV_MAX_QUERY_DEPTH).and_then(|v| v.parse().ok()) {
            self.dictionary.max_query_depth = depth;
        }

        if let Some(debug) = lookup(ENV_DEBUG).and_then(|v| parse_flag(&v)) {
            self.debug = debug;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use synkit_types::DisplayMethod;

    use super::*;
    use crate::dictionary::KoreanSearchKind;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.network.timeout_seconds, 20);
        assert_eq!(config.dictionary.max_query_depth, 20);
        assert_eq!(config.dictionary.korean_kind, KoreanSearchKind::All);
        assert_eq!(config.corpus.max_suggestions, 100);
        assert_eq!(config.ui.display_method, DisplayMethod::QuickPanel);
        assert!(!config.voice.read_aloud);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "debug": true, "dictionary": { "max_query_depth": 5, "korean_kind": "keyword" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert!(config.debug);
        assert_eq!(config.dictionary.max_query_depth, 5);
        assert_eq!(config.dictionary.korean_kind, KoreanSearchKind::Keyword);
        assert!(config.dictionary.english_url.contains("{query}"));
        assert_eq!(config.network.timeout_seconds, 20);
    }

    #[test]
    fn test_unknown_display_method_is_rejected() {
        let json = r#"{ "ui": { "display_method": "balloon" } }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_TIMEOUT_SECONDS, "5"),
            (ENV_MAX_QUERY_DEPTH, "not-a-number"),
            (ENV_DEBUG, "yes"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.network.timeout_seconds, 5);
        assert_eq!(config.dictionary.max_query_depth, 20);
        assert!(config.debug);
    }

    #[test]
    fn test_extension_matching() {
        let dictionary = DictionaryConfig::default();
        assert!(dictionary.is_custom_dictionary(Path::new("words/animals.cwkcsv")));
        assert!(!dictionary.is_custom_dictionary(Path::new("notes.md")));

        let corpus = CorpusConfig {
            extensions: vec![".md".to_string(), "txt".to_string()],
            ..CorpusConfig::default()
        };
        assert!(corpus.is_corpus_file(Path::new("a/b.md")));
        assert!(corpus.is_corpus_file(Path::new("c.txt")));
        assert!(!corpus.is_corpus_file(Path::new("Makefile")));
    }
}
