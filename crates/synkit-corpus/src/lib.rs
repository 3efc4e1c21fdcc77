pub mod collector;
pub mod corpus;

pub use collector::{CorpusError, collect};
pub use corpus::{Completion, Corpus, CorpusWord, WordSource};
