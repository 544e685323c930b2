//! Character-level Unicode classification for kana input.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// Small tsu (促音) in either script.
pub fn is_sokuon(c: char) -> bool {
    matches!(c, 'っ' | 'ッ')
}

pub fn contains_kana(s: &str) -> bool {
    s.chars().any(is_kana)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('あ'));
        assert!(is_kana('ん'));
        assert!(is_kana('ン'));
        assert!(!is_kana('漢'));
        assert!(!is_kana('a'));
    }

    #[test]
    fn test_sokuon() {
        assert!(is_sokuon('っ'));
        assert!(is_sokuon('ッ'));
        assert!(!is_sokuon('つ'));
        assert!(!is_sokuon('ツ'));
    }

    #[test]
    fn test_contains_kana() {
        assert!(contains_kana("東京タワー"));
        assert!(contains_kana("abcか"));
        assert!(!contains_kana("東京"));
        assert!(!contains_kana("tokyo"));
        assert!(!contains_kana(""));
    }
}
