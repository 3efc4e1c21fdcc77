use std::sync::Arc;

use synkit_config::Config;
use synkit_core::Token;
use synkit_types::{ResultList, Script};
use tokio_util::sync::CancellationToken;

use crate::dispatcher::WebDictionary;
use crate::error::FetchError;
use crate::expansion::expand;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::query::QueryBuilder;

/// Entry point for one lookup: a single page for English, the expanded
/// closure for Korean.
#[derive(Clone)]
pub struct SynonymService {
    dictionary: WebDictionary,
    max_query_depth: usize,
}

impl SynonymService {
    pub fn new(dictionary: WebDictionary, max_query_depth: usize) -> Self {
        Self {
            dictionary,
            max_query_depth,
        }
    }

    pub fn with_fetcher(config: &Config, fetcher: Arc<dyn PageFetcher>) -> Self {
        let queries = QueryBuilder::new(&config.dictionary);
        Self::new(
            WebDictionary::new(fetcher, queries),
            config.dictionary.max_query_depth,
        )
    }

    /// Service backed by real HTTP requests
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(&config.network)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Look `token` up. Only cancellation is reported as an error, every other
    /// failure degrades to an empty list.
    pub async fn lookup(
        &self,
        token: &Token,
        language: Option<Script>,
        cancel: &CancellationToken,
    ) -> Result<ResultList, FetchError> {
        if token.is_empty() {
            return Ok(ResultList::new());
        }

        match language.unwrap_or(token.script()) {
            Script::Korean => {
                let expansion = expand(&self.dictionary, token, self.max_query_depth, cancel).await?;
                tracing::debug!(
                    "Expanded '{}' with {} quer(ies)",
                    token.text(),
                    expansion.queries
                );
                Ok(expansion.results)
            }
            script => {
                if cancel.is_cancelled() {
                    return Err(FetchError::Cancelled);
                }
                let results = match self.dictionary.fetch(token, Some(script)).await {
                    Ok(results) => results,
                    Err(e) => {
                        tracing::warn!("Lookup of '{}' failed: {}", token.text(), e);
                        ResultList::new()
                    }
                };

                // The request itself is not aborted, its outcome is dropped
                if cancel.is_cancelled() {
                    return Err(FetchError::Cancelled);
                }
                Ok(results)
            }
        }
    }
}
