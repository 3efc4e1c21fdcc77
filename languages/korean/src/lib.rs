pub mod scanner;

pub use scanner::KoreanScanner;

use synkit_types::ResultList;

/// Extract headwords and synonyms from a Korean dictionary page
pub fn scan(html: &str) -> ResultList {
    synkit_core::scan_document(html, KoreanScanner::new())
}
