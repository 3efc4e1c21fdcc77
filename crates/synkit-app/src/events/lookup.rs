use std::sync::Arc;

use kanal::AsyncSender;
use synkit_core::Token;
use synkit_core::preprocess::{DefaultPreprocessor, Preprocessor};
use synkit_types::{AppEvent, LookupRequest};
use synkit_web::FetchError;
use tokio_util::sync::CancellationToken;

use crate::sessions::SessionRegistry;
use crate::state::AppState;

pub const STATUS_STARTING: &str = "Starting web dic lookup";

/// Start a background session for `request`, replacing any session already
/// running in the same slot.
pub async fn handle_lookup(
    state: Arc<AppState>,
    sessions: Arc<SessionRegistry>,
    request: LookupRequest,
    app_to_host_tx: AsyncSender<AppEvent>,
) {
    let handle = sessions.start(&request.slot).await;

    tokio::spawn(async move {
        if let Err(e) = run_session(&state, &request, &handle.cancel, &app_to_host_tx).await {
            tracing::error!("Lookup session for '{}' failed: {}", request.word, e);
        }
        sessions.finish(&handle).await;
    });
}

pub async fn run_session(
    state: &AppState,
    request: &LookupRequest,
    cancel: &CancellationToken,
    app_to_host_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let token = Token::new(DefaultPreprocessor.process(&request.word));
    if token.is_empty() {
        tracing::debug!("Empty query, nothing to look up");
        return Ok(());
    }

    send_status(app_to_host_tx, &request.slot, STATUS_STARTING).await?;

    let voice = state.config.read().await.voice.clone();
    if let Err(e) = synkit_io::read_aloud(token.text(), &voice).await {
        tracing::warn!("Read aloud failed: {}", e);
    }

    tracing::info!("Looking up '{}' ({})", token.text(), token.script());
    let results = match state.service.lookup(&token, request.language, cancel).await {
        Ok(results) => results,
        Err(FetchError::Cancelled) => {
            tracing::info!("Lookup of '{}' cancelled", token.text());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if cancel.is_cancelled() {
        tracing::info!("Lookup of '{}' superseded, dropping results", token.text());
        return Ok(());
    }

    let status = found_status(results.len(), token.text());
    tracing::info!("{}", status);
    send_status(app_to_host_tx, &request.slot, &status).await?;

    app_to_host_tx
        .send(AppEvent::ShowResults {
            slot: request.slot.clone(),
            word: token.text().to_string(),
            results,
        })
        .await?;

    Ok(())
}

pub fn found_status(count: usize, word: &str) -> String {
    format!("{count} synonym(s) found for '{word}'")
}

async fn send_status(
    app_to_host_tx: &AsyncSender<AppEvent>,
    slot: &str,
    status: &str,
) -> anyhow::Result<()> {
    app_to_host_tx
        .send(AppEvent::StatusUpdate {
            slot: slot.to_string(),
            status: status.to_string(),
        })
        .await?;
    Ok(())
}
