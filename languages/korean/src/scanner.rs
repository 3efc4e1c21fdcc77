//! Headword blocks of the Korean dictionary.
//!
//! A block opens at `<span class="head_word">` and closes at
//! `<div class="btn_showmore">`. Inside it, `<strong>` introduces the
//! headword (emitted bare) and `<a class="syno">` introduces synonyms
//! (emitted as child lines, Korean text only).

use synkit_core::language::is_korean;
use synkit_core::{MarkupEvent, MarkupScanner, StartTag, strip_tags};
use synkit_types::ResultList;

pub const BLOCK_TAG: &str = "span";
pub const BLOCK_CLASS: &str = "head_word";
pub const BLOCK_END_TAG: &str = "div";
pub const BLOCK_END_CLASS: &str = "btn_showmore";
pub const SYNONYM_TAG: &str = "a";
pub const SYNONYM_CLASS: &str = "syno";
pub const KEYWORD_TAG: &str = "strong";

/// What the next text node inside a block is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Inner {
    #[default]
    Idle,
    /// Stays active for every following text until an unrelated tag
    Synonym,
    /// One-shot: cleared by the next text
    Keyword,
    SynonymKeyword,
}

impl Inner {
    fn on_start_tag(self, tag: &StartTag) -> Inner {
        if tag.is(SYNONYM_TAG) {
            if !tag.has_attr_value("class", SYNONYM_CLASS) {
                return self;
            }
            match self {
                Inner::Idle | Inner::Synonym => Inner::Synonym,
                Inner::Keyword | Inner::SynonymKeyword => Inner::SynonymKeyword,
            }
        } else if tag.is(KEYWORD_TAG) {
            match self {
                Inner::Idle | Inner::Keyword => Inner::Keyword,
                Inner::Synonym | Inner::SynonymKeyword => Inner::SynonymKeyword,
            }
        } else {
            Inner::Idle
        }
    }

    fn collects_synonym(self) -> bool {
        matches!(self, Inner::Synonym | Inner::SynonymKeyword)
    }

    fn collects_keyword(self) -> bool {
        matches!(self, Inner::Keyword | Inner::SynonymKeyword)
    }

    fn after_keyword(self) -> Inner {
        match self {
            Inner::SynonymKeyword => Inner::Synonym,
            Inner::Keyword => Inner::Idle,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Block {
    #[default]
    Outside,
    Inside(Inner),
}

#[derive(Debug, Default)]
pub struct KoreanScanner {
    block: Block,
    results: ResultList,
}

impl KoreanScanner {
    pub fn new() -> Self {
        Self::default()
    }

    fn on_start_tag(&mut self, tag: &StartTag) {
        if tag.matches(BLOCK_TAG, BLOCK_CLASS) {
            self.block = Block::Inside(Inner::Idle);
        } else if tag.matches(BLOCK_END_TAG, BLOCK_END_CLASS) {
            self.block = Block::Outside;
        } else if let Block::Inside(inner) = self.block {
            self.block = Block::Inside(inner.on_start_tag(tag));
        }
    }

    fn on_text(&mut self, raw: &str) {
        let Block::Inside(inner) = self.block else {
            return;
        };

        let text = strip_tags(raw);

        if inner.collects_synonym() && is_korean(&text) {
            tracing::debug!("appending synonym: {}", text);
            self.results.push_child(&text);
        }

        if inner.collects_keyword() {
            if !text.trim().is_empty() {
                tracing::debug!("appending keyword: {}", text);
                self.results.push(text.into_owned());
            }
            self.block = Block::Inside(inner.after_keyword());
        }
    }
}

impl MarkupScanner for KoreanScanner {
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
