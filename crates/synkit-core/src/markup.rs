//! Streaming markup events and the scanner seam.
//!
//! Documents are tokenised with the html5ever tokenizer (no tree builder),
//! so scanners see tags in source order. Consecutive character tokens are
//! joined into a single [`MarkupEvent::Text`] that is flushed at the next
//! tag, comment or end of input. `<script>` and `<style>` bodies arrive as
//! one text event, never as tags.

use std::borrow::Cow;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use once_cell::sync::Lazy;
use regex::Regex;
use synkit_types::ResultList;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Remove tag-like fragments (`<b>`, `</sup>`) that survive inside text nodes
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    TAG_PATTERN.replace_all(text, "")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
}

impl StartTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Exact comparison of the whole attribute value
    pub fn has_attr_value(&self, name: &str, value: &str) -> bool {
        self.attrs.iter().any(|(n, v)| n == name && v == value)
    }

    /// `<name class="class">`
    pub fn matches(&self, name: &str, class: &str) -> bool {
        self.is(name) && self.has_attr_value("class", class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    StartTag(StartTag),
    EndTag(String),
    Text(String),
}

/// A dictionary-specific state machine fed one event at a time.
///
/// Scanners never fail: markup they do not recognise resets them and
/// yields fewer lines.
pub trait MarkupScanner {
    fn handle_event(&mut self, event: &MarkupEvent);

    fn into_results(self) -> ResultList;
}

/// Tokenise `html` and run `scanner` over it
pub fn scan_document<S: MarkupScanner>(html: &str, scanner: S) -> ResultList {
    let sink = ScannerSink {
        scanner,
        text: String::new(),
    };

    let mut tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
    let mut input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    let mut sink = tokenizer.sink;
    sink.flush_text();
    sink.scanner.into_results()
}

/// Run `scanner` over already tokenised events
pub fn scan_events<S, I>(events: I, mut scanner: S) -> ResultList
where
    S: MarkupScanner,
    I: IntoIterator<Item = MarkupEvent>,
{
    for event in events {
        scanner.handle_event(&event);
    }
    scanner.into_results()
}

struct ScannerSink<S> {
    scanner: S,
    text: String,
}

impl<S: MarkupScanner> ScannerSink<S> {
    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        self.scanner.handle_event(&MarkupEvent::Text(text));
    }
}

impl<S: MarkupScanner> TokenSink for ScannerSink<S> {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(chunk) => self.text.push_str(&chunk),
            Token::NullCharacterToken => {}
            Token::ParseError(message) => {
                tracing::trace!("Markup parse error: {}", message);
            }
            Token::TagToken(tag) => {
                self.flush_text();

                let name = tag.name.to_string();
                let raw_kind = match (tag.kind, name.as_str()) {
                    (TagKind::StartTag, "script") => Some(RawKind::ScriptData),
                    (TagKind::StartTag, "style") => Some(RawKind::Rawtext),
                    _ => None,
                };
                let event = match tag.kind {
                    TagKind::StartTag => MarkupEvent::StartTag(StartTag {
                        name,
                        attrs: tag
                            .attrs
                            .iter()
                            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                            .collect(),
                    }),
                    TagKind::EndTag => MarkupEvent::EndTag(name),
                };
                self.scanner.handle_event(&event);

                if let Some(kind) = raw_kind {
                    return TokenSinkResult::RawData(kind);
                }
            }
            _ => self.flush_text(),
        }

        TokenSinkResult::Continue
    }
}
