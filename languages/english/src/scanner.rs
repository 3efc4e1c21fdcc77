//! Thesaurus section of the English dictionary.
//!
//! The page lists synonyms as
//!
//! ```text
//! <span>[유의어]</span><a>headword</a><span>gloss, gloss, gloss</span>
//! ```
//!
//! Each completed match yields the headword as a keyword line followed by
//! one child line per comma-separated gloss.

use synkit_core::{MarkupEvent, MarkupScanner, StartTag};
use synkit_types::{CHILD_MARKER, ResultList};

pub const BLOCK_TAG: &str = "span";
pub const SYNONYM_TAG: &str = "a";
pub const SYNONYM_LABEL: &str = "[유의어]";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    /// Block tag seen, waiting for the section label
    BlockOpened,
    /// Label matched, waiting for the synonym link
    InBlock,
    LinkOpened,
    /// Headword captured, the next block tag carries the glosses
    SynonymCaptured { synonym: String },
    Definitions { synonym: String },
    /// Another block tag before the glosses: the text is either a new
    /// section label or the glosses
    DefinitionsOrLabel { synonym: String },
}

impl State {
    fn in_block(&self) -> bool {
        matches!(
            self,
            State::InBlock | State::LinkOpened | State::SynonymCaptured { .. }
        )
    }
}

#[derive(Debug, Default)]
pub struct EnglishScanner {
    state: State,
    results: ResultList,
}

impl EnglishScanner {
    pub fn new() -> Self {
        Self::default()
    }

    fn on_start_tag(&mut self, tag: &StartTag) {
        let state = std::mem::take(&mut self.state);

        self.state = if tag.is(BLOCK_TAG) {
            match state {
                State::SynonymCaptured { synonym } => State::Definitions { synonym },
                State::Definitions { synonym } | State::DefinitionsOrLabel { synonym } => {
                    State::DefinitionsOrLabel { synonym }
                }
                State::Idle | State::BlockOpened => State::BlockOpened,
                other => other,
            }
        } else if tag.is(SYNONYM_TAG) && state.in_block() {
            State::LinkOpened
        } else {
            State::Idle
        };
    }

    fn on_text(&mut self, text: &str) {
        let state = std::mem::take(&mut self.state);

        self.state = match state {
            State::BlockOpened | State::DefinitionsOrLabel { .. }
                if text.trim() == SYNONYM_LABEL =>
            {
                State::InBlock
            }
            State::LinkOpened => State::SynonymCaptured {
                synonym: text.to_string(),
            },
            State::Definitions { synonym } | State::DefinitionsOrLabel { synonym } => {
                self.emit(synonym, text);
                State::Idle
            }
            _ => State::Idle,
        };
    }

    fn emit(&mut self, synonym: String, definitions: &str) {
        tracing::debug!("appending synonym: {}", synonym);
        self.results.push(synonym);

        // Glosses keep whatever whitespace follows the comma, empty ones included
        for gloss in definitions.split(',') {
            tracing::debug!("appending def: {}", gloss);
            self.results.push(format!("{CHILD_MARKER} {gloss}"));
        }
    }
}

impl MarkupScanner for EnglishScanner {
    fn handle_event(&mut self, event: &MarkupEvent) {
        match event {
            MarkupEvent::StartTag(tag) => self.on_start_tag(tag),
            MarkupEvent::Text(text) => self.on_text(text),
            MarkupEvent::EndTag(_) => {}
        }
    }

    fn into_results(self) -> ResultList {
        self.results
    }
}
