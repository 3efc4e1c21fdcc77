use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default word preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Compose decomposed jamo and accents (NFC)
        text = text.nfc().collect();

        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
