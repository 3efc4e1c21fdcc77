pub mod scanner;

pub use scanner::EnglishScanner;

use synkit_types::ResultList;

/// Extract thesaurus entries from an English dictionary page
pub fn scan(html: &str) -> ResultList {
    synkit_core::scan_document(html, EnglishScanner::new())
}
