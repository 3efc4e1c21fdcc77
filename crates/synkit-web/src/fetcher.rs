use async_trait::async_trait;
use synkit_config::network::NetworkConfig;

use crate::error::FetchError;

/// Source of dictionary pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return the body decoded as UTF-8
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &NetworkConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(String::from_utf8(body.to_vec())?)
    }
}
