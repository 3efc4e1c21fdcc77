//! In-memory page source for dispatcher and expansion tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use synkit_config::dictionary::DictionaryConfig;
use synkit_types::Script;

use crate::error::FetchError;
use crate::fetcher::PageFetcher;
use crate::query::QueryBuilder;

pub struct MockFetcher {
    queries: QueryBuilder,
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            queries: QueryBuilder::new(&DictionaryConfig::default()),
            pages: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_page(mut self, script: Script, word: &str, html: String) -> Self {
        let url = self.queries.url(script, word).unwrap();
        self.pages.insert(url, html);
        self
    }

    pub fn with_korean(self, keyword: &str, synonyms: &[&str]) -> Self {
        self.with_page(Script::Korean, keyword, korean_page(keyword, synonyms))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().ok_or(FetchError::Status(404))
    }
}

pub fn korean_page(keyword: &str, synonyms: &[&str]) -> String {
    let links: String = synonyms
        .iter()
        .map(|s| format!(r#"<a class="syno" href="/search?q={s}">{s}</a>, "#))
        .collect();
    format!(
        r#"<html><body><div class="word"><span class="head_word"><strong>{keyword}</strong></span><p>{links}</p><div class="btn_showmore">more</div></div></body></html>"#
    )
}

pub fn english_page(headword: &str, glosses: &str) -> String {
    format!(
        r#"<html><body><div><span>[유의어]</span><a href="/w">{headword}</a><span>{glosses}</span></div></body></html>"#
    )
}

pub fn korean_url(word: &str) -> String {
    QueryBuilder::new(&DictionaryConfig::default())
        .url(Script::Korean, word)
        .unwrap()
}
