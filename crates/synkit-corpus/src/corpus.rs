use std::collections::HashSet;

/// Where an indexed word came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// File name of the corpus document
    File(String),
    /// Synonym listed for the word in a custom dictionary
    Synonym(String),
}

impl WordSource {
    fn label(&self) -> &str {
        match self {
            WordSource::File(name) | WordSource::Synonym(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusWord {
    pub name: String,
    pub source: WordSource,
}

/// One autocomplete row: what the host lists and what it inserts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub label: String,
    pub insert: String,
}

/// Word index built from project files
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: Vec<CorpusWord>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn add_word(&mut self, name: impl Into<String>, source: WordSource) {
        self.words.push(CorpusWord {
            name: name.into(),
            source,
        });
    }

    /// Words containing `prefix` in index order.
    ///
    /// Corpus words are listed once per name; dictionary pairs are all kept
    /// and insert their synonym instead of the keyword.
    pub fn autocomplete(&self, prefix: &str, max_suggestions: usize) -> Vec<Completion> {
        let mut seen = HashSet::new();
        let mut completions = Vec::new();

        for word in self.words.iter().filter(|w| w.name.contains(prefix)) {
            if completions.len() >= max_suggestions {
                break;
            }

            let is_new = seen.insert(word.name.as_str());
            let insert = match &word.source {
                WordSource::File(_) if !is_new => continue,
                WordSource::File(_) => word.name.clone(),
                WordSource::Synonym(synonym) => synonym.clone(),
            };

            completions.push(Completion {
                label: format!("{}\t{}", word.name, word.source.label()),
                insert,
            });
        }

        completions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        let mut corpus = Corpus::new();
        corpus.add_word("writing", WordSource::File("notes.md".into()));
        corpus.add_word("writing", WordSource::File("draft.md".into()));
        corpus.add_word("rewrite", WordSource::File("draft.md".into()));
        corpus.add_word("write", WordSource::Synonym("compose".into()));
        corpus.add_word("write", WordSource::Synonym("pen".into()));
        corpus.add_word("reading", WordSource::File("notes.md".into()));
        corpus
    }

    #[test]
    fn test_autocomplete_dedupes_corpus_words() {
        let completions = corpus().autocomplete("writ", 100);
        let labels: Vec<&str> = completions.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["writing\tnotes.md", "rewrite\tdraft.md", "write\tcompose", "write\tpen"]
        );
    }

    #[test]
    fn test_dictionary_pairs_insert_synonym() {
        let completions = corpus().autocomplete("write", 100);
        let inserts: Vec<&str> = completions.iter().map(|c| c.insert.as_str()).collect();
        assert_eq!(inserts, vec!["rewrite", "compose", "pen"]);
    }

    #[test]
    fn test_autocomplete_limit() {
        assert_eq!(corpus().autocomplete("", 2).len(), 2);
        assert!(corpus().autocomplete("zzz", 10).is_empty());
    }
}
