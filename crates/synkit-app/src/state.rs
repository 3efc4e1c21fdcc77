use std::sync::Arc;

use synkit_config::Config;
use synkit_web::SynonymService;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub service: SynonymService,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let service = SynonymService::from_config(&config)?;
        Ok(Self::with_service(config, service))
    }

    pub fn with_service(config: Config, service: SynonymService) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            service,
        }
    }
}
