use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use synkit_config::Config;
use synkit_core::dictionary::CustomDictionary;

use crate::corpus::{Corpus, WordSource};

/// Unicode word characters, which covers Latin, Hangul and CJK text
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Paths containing this are archived and never indexed
const ARCHIVE_MARKER: &str = "/_";

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Index every corpus and custom dictionary file under `roots`
pub fn collect(roots: &[PathBuf], config: &Config) -> Result<Corpus, CorpusError> {
    let mut corpus = Corpus::new();
    let mut file_count = 0;

    for root in roots {
        if is_archived(root) {
            tracing::debug!("Skipping the archived folder: {}", root.display());
            continue;
        }

        for file in word_files(root, config)? {
            if is_archived(&file) {
                tracing::debug!("Skipping the archived file: {}", file.display());
                continue;
            }
            collect_file(&mut corpus, &file, config);
            file_count += 1;
        }
    }

    if file_count > 0 {
        tracing::info!(
            "{} word(s) found in {} corpus file(s)",
            corpus.len(),
            file_count
        );
    } else {
        tracing::info!("No corpus file found.");
    }

    Ok(corpus)
}

fn is_archived(path: &Path) -> bool {
    path.to_string_lossy().contains(ARCHIVE_MARKER)
}

/// Recursive listing of indexable files, hidden entries skipped
fn word_files(folder: &Path, config: &Config) -> Result<Vec<PathBuf>, CorpusError> {
    let io_error = |source| CorpusError::Io {
        path: folder.to_path_buf(),
        source,
    };

    let mut entries: Vec<_> = fs::read_dir(folder)
        .map_err(io_error)?
        .collect::<Result<_, _>>()
        .map_err(io_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut files = Vec::new();
    for entry in entries {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            files.extend(word_files(&path, config)?);
        } else if config.corpus.is_corpus_file(&path) || config.dictionary.is_custom_dictionary(&path)
        {
            files.push(path);
        }
    }

    Ok(files)
}

fn collect_file(corpus: &mut Corpus, path: &Path, config: &Config) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Error reading {}: {}", path.display(), e);
            return;
        }
    };

    if config.corpus.is_corpus_file(path) {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        for word in tokenize(&content, config.corpus.min_word_len, config.corpus.max_word_len) {
            corpus.add_word(word, WordSource::File(file_name.clone()));
        }
    } else {
        let dictionary = CustomDictionary::parse(&content, config.dictionary.comment_char);
        for (keyword, synonym) in dictionary.pairs() {
            corpus.add_word(keyword, WordSource::Synonym(synonym.to_string()));
        }
    }
}

/// Words with a char count strictly between `min_len` and `max_len`
pub fn tokenize(text: &str, min_len: usize, max_len: usize) -> impl Iterator<Item = &str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).filter(move |word| {
        let len = word.chars().count();
        len > min_len && len < max_len
    })
}
