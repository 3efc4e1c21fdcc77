use std::sync::Arc;

use synkit_core::Token;
use synkit_types::{ResultList, Script};

use crate::error::FetchError;
use crate::fetcher::PageFetcher;
use crate::query::QueryBuilder;

/// Routes a token to the right dictionary page and scanner
#[derive(Clone)]
pub struct WebDictionary {
    fetcher: Arc<dyn PageFetcher>,
    queries: QueryBuilder,
}

impl WebDictionary {
    pub fn new(fetcher: Arc<dyn PageFetcher>, queries: QueryBuilder) -> Self {
        Self { fetcher, queries }
    }

    /// Fetch and scan one page for `token`.
    ///
    /// `language` overrides the token's own script. Japanese and unclassified
    /// text are not looked up and yield an empty list.
    pub async fn fetch(
        &self,
        token: &Token,
        language: Option<Script>,
    ) -> Result<ResultList, FetchError> {
        let script = language.unwrap_or(token.script());

        let scan: fn(&str) -> ResultList = match script {
            Script::English => synkit_lang_english::scan,
            Script::Korean => synkit_lang_korean::scan,
            Script::Japanese => {
                tracing::info!("Japanese lookup is not implemented yet");
                return Ok(ResultList::new());
            }
            Script::Unknown => {
                tracing::debug!("No dictionary for '{}'", token.text());
                return Ok(ResultList::new());
            }
        };

        let Some(url) = self.queries.url(script, token.text()) else {
            return Ok(ResultList::new());
        };

        tracing::debug!("Fetching {} page: {}", script, url);
        let page = self.fetcher.fetch_page(&url).await?;

        let results = scan(&page);
        tracing::debug!("{} line(s) scanned from {}", results.len(), url);
        Ok(results)
    }
}
