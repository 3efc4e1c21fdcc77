use std::process::ExitStatus;

use synkit_config::voice::VoiceConfig;
use synkit_core::classify;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Failed to start the speech command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Speech command exited with {0}")]
    Failed(ExitStatus),
}

/// Speak `message` with the voice configured for its script.
///
/// Does nothing when read-aloud is off, the message is blank, or the
/// platform has no synthesiser.
pub async fn read_aloud(message: &str, voice: &VoiceConfig) -> Result<(), SpeechError> {
    if !voice.read_aloud || message.trim().is_empty() {
        return Ok(());
    }

    let voice_name = voice.voice_for(classify(message));
    tracing::debug!("Reading aloud '{}' with voice {:?}", message, voice_name);

    speak(&say_args(message, voice_name)).await
}

fn say_args(message: &str, voice: Option<&str>) -> Vec<String> {
    let mut args = Vec::with_capacity(3);
    if let Some(voice) = voice {
        args.push("-v".to_string());
        args.push(voice.to_string());
    }
    args.push(message.to_string());
    args
}

#[cfg(target_os = "macos")]
async fn speak(args: &[String]) -> Result<(), SpeechError> {
    const SAY_COMMAND: &str = "/usr/bin/say";

    let status = tokio::process::Command::new(SAY_COMMAND)
        .args(args)
        .status()
        .await?;

    if status.success() {
        Ok(())
    } else {
        Err(SpeechError::Failed(status))
    }
}

#[cfg(not(target_os = "macos"))]
async fn speak(_args: &[String]) -> Result<(), SpeechError> {
    tracing::debug!("Read aloud is not available on this platform");
    Ok(())
}
