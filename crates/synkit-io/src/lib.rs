pub mod speech;

pub use speech::{SpeechError, read_aloud};
