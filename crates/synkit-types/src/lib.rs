pub mod results;
pub mod types;

pub use results::{CHILD_MARKER, DictionaryEntry, ResultList, child_text, insertion_text};
pub use types::{AppEvent, DisplayMethod, LookupRequest, Script, Selection};
