pub mod dictionary;
pub mod language;
pub mod markup;
pub mod preprocess;

pub use language::{Token, classify};
pub use markup::{MarkupEvent, MarkupScanner, StartTag, scan_document, scan_events, strip_tags};
