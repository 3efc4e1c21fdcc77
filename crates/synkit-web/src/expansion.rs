//! Transitive Korean synonym expansion.
//!
//! Every synonym found on a page is looked up in turn, depth first in page
//! order, until `max_queries` pages have been fetched in total. The limit is
//! shared by the whole session, not per branch. Lines are merged into the
//! session list by exact string; the same word may still be fetched again
//! from another branch.

use synkit_core::Token;
use synkit_types::{ResultList, Script};
use tokio_util::sync::CancellationToken;

use crate::dispatcher::WebDictionary;
use crate::error::FetchError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    pub results: ResultList,
    /// Pages requested, failed ones included
    pub queries: usize,
}

/// Expand `seed` on the Korean dictionary.
///
/// Fetch failures count as pages with no entries. The cancellation token is
/// checked before every fetch; a request already in flight runs to completion.
pub async fn expand(
    dictionary: &WebDictionary,
    seed: &Token,
    max_queries: usize,
    cancel: &CancellationToken,
) -> Result<Expansion, FetchError> {
    let mut expansion = Expansion::default();
    let mut pending = vec![seed.text().to_string()];

    while let Some(word) = pending.pop() {
        if expansion.queries >= max_queries {
            tracing::debug!(
                "Query limit {} reached, {} word(s) left unvisited",
                max_queries,
                pending.len() + 1
            );
            break;
        }

        if cancel.is_cancelled() {
            tracing::debug!("Expansion of '{}' cancelled", seed.text());
            return Err(FetchError::Cancelled);
        }

        expansion.queries += 1;
        let batch = match dictionary.fetch(&Token::new(word.as_str()), Some(Script::Korean)).await {
            Ok(batch) => batch,
            Err(e) => {
                tracing::warn!("Lookup of '{}' failed: {}", word, e);
                continue;
            }
        };

        let added = expansion.results.merge_unique(&batch);
        tracing::debug!("'{}': {} line(s), {} new", word, batch.len(), added);

        // Children of this page only, reversed so the first one is popped next
        let children: Vec<String> = batch.children().map(str::to_string).collect();
        pending.extend(children.into_iter().rev());
    }

    if cancel.is_cancelled() {
        return Err(FetchError::Cancelled);
    }

    Ok(expansion)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use synkit_config::dictionary::DictionaryConfig;

    use super::*;
    use crate::query::QueryBuilder;
    use crate::testing::{MockFetcher, korean_url};

    fn dictionary(fetcher: Arc<MockFetcher>) -> WebDictionary {
        WebDictionary::new(fetcher, QueryBuilder::new(&DictionaryConfig::default()))
    }

    #[tokio::test]
    async fn test_expansion_is_transitive_and_depth_first() {
        let fetcher = Arc::new(
            MockFetcher::new()
                .with_korean("빠르다", &["신속하다", "재빠르다"])
                .with_korean("신속하다", &["날래다"])
                .with_korean("날래다", &[])
                .with_korean("재빠르다", &[]),
        );

        let expansion = expand(
            &dictionary(fetcher.clone()),
            &Token::new("빠르다"),
            10,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(
            fetcher.requests(),
            vec![
                korean_url("빠르다"),
                korean_url("신속하다"),
                korean_url("날래다"),
                korean_url("재빠르다"),
            ]
        );
        assert_eq!(
            expansion.results.into_vec(),
            vec![
                "빠르다",
                "\t신속하다",
                "\t재빠르다",
                "신속하다",
                "\t날래다",
                "날래다",
                "재빠르다",
            ]
        );
        assert_eq!(expansion.queries, 4);
    }

    #[tokio::test]
    async fn test_query_limit_is_global() {
        let synonyms: Vec<String> = (0..30).map(|i| format!("가{i}")).collect();
        let refs: Vec<&str> = synonyms.iter().map(String::as_str).collect();
        let fetcher = Arc::new(MockFetcher::new().with_korean("나무", &refs));

        let expansion = expand(
            &dictionary(fetcher.clone()),
            &Token::new("나무"),
            10,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(fetcher.request_count(), 10);
        assert_eq!(expansion.queries, 10);
        assert_eq!(expansion.results.len(), 31);
    }

    #[tokio::test]
    async fn test_cycles_stop_at_limit_without_duplicates() {
        let fetcher = Arc::new(
            MockFetcher::new()
                .with_korean("크다", &["거대하다"])
                .with_korean("거대하다", &["크다"]),
        );

        let expansion = expand(
            &dictionary(fetcher.clone()),
            &Token::new("크다"),
            7,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(fetcher.request_count(), 7);

        let lines = expansion.results.into_vec();
        let unique: HashSet<&String> = lines.iter().collect();
        assert_eq!(unique.len(), lines.len());
        assert_eq!(lines, vec!["크다", "\t거대하다", "거대하다", "\t크다"]);
    }

    #[tokio::test]
    async fn test_failed_branch_does_not_abort_session() {
        let fetcher = Arc::new(
            MockFetcher::new()
                .with_korean("작다", &["없는말", "조그맣다"])
                .with_korean("조그맣다", &["자그마하다"]),
        );

        let expansion = expand(
            &dictionary(fetcher.clone()),
            &Token::new("작다"),
            10,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(fetcher.request_count(), 4);
        assert!(expansion.results.contains("조그맣다"));
        assert!(expansion.results.contains("\t자그마하다"));
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let fetcher = Arc::new(MockFetcher::new().with_korean("크다", &["거대하다"]));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = expand(&dictionary(fetcher.clone()), &Token::new("크다"), 10, &cancel).await;

        assert!(matches!(result, Err(FetchError::Cancelled)));
        assert_eq!(fetcher.request_count(), 0);
    }

    #[tokio::test]
    async fn test_zero_limit_fetches_nothing() {
        let fetcher = Arc::new(MockFetcher::new().with_korean("크다", &[]));
        let expansion = expand(
            &dictionary(fetcher.clone()),
            &Token::new("크다"),
            0,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert!(expansion.results.is_empty());
        assert_eq!(fetcher.request_count(), 0);
    }
}
