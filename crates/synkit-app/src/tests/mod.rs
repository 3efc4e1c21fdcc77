use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use synkit_config::Config;
use synkit_types::Script;
use synkit_web::{FetchError, PageFetcher, QueryBuilder, SynonymService};
use tokio::sync::Semaphore;

use crate::state::AppState;


/// Dictionary pages served from memory. Every request waits for a permit
/// on `gate`, so tests can hold sessions mid-fetch.
pub struct StubFetcher {
    pages: HashMap<String, String>,
    gate: Arc<Semaphore>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn open() -> Self {
        Self::with_gate(Arc::new(Semaphore::new(Semaphore::MAX_PERMITS)))
    }

    pub fn with_gate(gate: Arc<Semaphore>) -> Self {
        Self {
            pages: HashMap::new(),
            gate,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_korean(self, keyword: &str, synonyms: &[&str]) -> Self {
        self.with_page(Script::Korean, keyword, korean_page(keyword, synonyms))
    }

    pub fn with_english(self, word: &str, headword: &str, glosses: &str) -> Self {
        self.with_page(Script::English, word, english_page(headword, glosses))
    }

    fn with_page(mut self, script: Script, word: &str, html: String) -> Self {
        let url = QueryBuilder::new(&Config::default().dictionary)
            .url(script, word)
            .unwrap();
        self.pages.insert(url, html);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let _permit = self.gate.acquire().await.unwrap();
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
        r#"<html><body><span class="head_word"><strong>{keyword}</strong></span><p>{links}</p><div class="btn_showmore">more</div></body></html>"#
    )
}

pub fn english_page(headword: &str, glosses: &str) -> String {
    format!(
        r#"<html><body><div><span>[유의어]</span><a href="/w">{headword}</a><span>{glosses}</span></div></body></html>"#
    )
}

pub fn test_state(fetcher: Arc<StubFetcher>) -> Arc<AppState> {
    let config = Config::default();
    let service = SynonymService::with_fetcher(&config, fetcher);
    Arc::new(AppState::with_service(config, service))
}
