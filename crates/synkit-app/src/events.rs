use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use synkit_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::sessions::SessionRegistry;
use crate::state::AppState;

pub mod lookup;

use lookup::handle_lookup;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    host_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_host_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let sessions = Arc::new(SessionRegistry::new(cancel.clone()));

    tracing::debug!("[EVENT_LOOP] Waiting for events");
    loop {
        let event = tokio::select! {
            event = host_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        if !handle_events(state.clone(), &sessions, &app_to_host_tx, event).await {
            break;
        }
    }

    sessions.cancel_all().await;
    tracing::debug!("[EVENT_LOOP] Stopped");

    Ok(())
}

/// Returns false once the loop should stop
async fn handle_events(
    state: Arc<AppState>,
    sessions: &Arc<SessionRegistry>,
    app_to_host_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> bool {
    match event {
        AppEvent::Lookup(request) => {
            tracing::debug!("Lookup requested for '{}' in '{}'", request.word, request.slot);
            handle_lookup(state, sessions.clone(), request, app_to_host_tx.clone()).await;
            tracing::debug!("{} session(s) active", sessions.active_count().await);
        }
        AppEvent::Cancel { slot } => {
            if sessions.cancel(&slot).await {
                tracing::info!("Lookup in '{}' cancelled", slot);
            }
        }
        AppEvent::Shutdown => return false,
        AppEvent::ShowResults { .. } | AppEvent::StatusUpdate { .. } => {
            // Host-only events, ignore in backend
        }
    }

    true
}
