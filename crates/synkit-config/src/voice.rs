use serde::{Deserialize, Serialize};
use synkit_types::Script;

/// Read-aloud side channel. Voice names are platform voice profiles.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct VoiceConfig {
    pub read_aloud: bool,
    pub english_voice: Option<String>,
    pub korean_voice: Option<String>,
    pub japanese_voice: Option<String>,
}

impl VoiceConfig {
    pub fn voice_for(&self, script: Script) -> Option<&str> {
        match script {
            Script::English => self.english_voice.as_deref(),
            Script::Korean => self.korean_voice.as_deref(),
            Script::Japanese => self.japanese_voice.as_deref(),
            Script::Unknown => None,
        }
    }
}
