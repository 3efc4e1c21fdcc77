use serde::{Deserialize, Serialize};

use crate::results::ResultList;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Start a lookup for the word under the cursor of `slot`
    Lookup(LookupRequest),
    /// Stop whatever session is running for `slot`
    Cancel {
        slot: String,
    },
    ShowResults {
        slot: String,
        word: String,
        results: ResultList,
    },
    StatusUpdate {
        slot: String,
        status: String,
    },
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Logical lookup slot, usually the document id
    pub slot: String,
    pub word: String,
    /// Forces the scanner and URL template instead of classifying `word`
    pub language: Option<Script>,
}

impl LookupRequest {
    pub fn new(slot: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            word: word.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: Option<Script>) -> Self {
        self.language = language;
        self
    }
}

/// Writing system of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Korean,
    English,
    Japanese,
    Unknown,
}

impl Script {
    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Korean => "korean",
            Script::English => "english",
            Script::Japanese => "japanese",
            Script::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the host shows a result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMethod {
    /// Window-level filterable list
    #[default]
    QuickPanel,
    /// Menu anchored at the cursor
    Popup,
}

/// Outcome of a host selection prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Cancelled,
    Index(usize),
}

impl Selection {
    /// Hosts report a cancelled prompt as -1
    pub const CANCELLED_INDEX: i64 = -1;

    pub fn from_index(index: i64) -> Self {
        match usize::try_from(index) {
            Ok(i) => Selection::Index(i),
            Err(_) => Selection::Cancelled,
        }
    }
}
