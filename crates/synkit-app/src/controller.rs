use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use synkit_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub host_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_host: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            host_to_app: kanal::bounded_async(64),  // lookups and cancels
            app_to_host: kanal::bounded_async(256), // status bursts
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.host_to_app.1.clone(),
            self.channels.app_to_host.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    /// Sender the host uses to request lookups
    pub fn host_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.host_to_app.0.clone()
    }

    /// Receiver of results and status updates for the host
    pub fn host_receiver(&self) -> AsyncReceiver<AppEvent> {
        self.channels.app_to_host.1.clone()
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
