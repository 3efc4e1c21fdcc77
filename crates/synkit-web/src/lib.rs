pub mod dispatcher;
pub mod error;
pub mod expansion;
pub mod fetcher;
pub mod query;
pub mod service;

pub use dispatcher::WebDictionary;
pub use error::FetchError;
pub use expansion::{Expansion, expand};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use query::QueryBuilder;
pub use service::SynonymService;

#[cfg(test)]
pub(crate) mod testing;
