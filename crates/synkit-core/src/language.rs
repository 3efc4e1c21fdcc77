use synkit_types::Script;

/// Classify `text` by the characters it starts with (Korean, English) or
/// contains (Japanese). Total and side-effect free.
///
/// Korean is tested before English before Japanese, so a single input only
/// ever gets one of them.
pub fn classify(text: &str) -> Script {
    match text.chars().next() {
        Some(c) if is_hangul_syllable(c) => Script::Korean,
        Some(c) if c.is_ascii_alphabetic() => Script::English,
        Some(_) if text.chars().any(is_japanese_char) => Script::Japanese,
        _ => Script::Unknown,
    }
}

pub fn is_korean(text: &str) -> bool {
    classify(text) == Script::Korean
}

fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

fn is_japanese_char(c: char) -> bool {
    // CJK unified ideographs, hiragana, katakana
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3041}'..='\u{3096}').contains(&c)
        || ('\u{30A1}'..='\u{30FA}').contains(&c)
}

/// A word or phrase with its script fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    script: Script,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let script = classify(&text);
        Self { text, script }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
