// Kana classification and hiragana-to-katakana folding.

// ---------------------------------------------------------------------------
// Code point ranges
// ---------------------------------------------------------------------------

/// First hiragana letter (ぁ, U+3041).
const HIRAGANA_FIRST: char = '\u{3041}';

/// Last hiragana letter (ゖ, U+3096).
const HIRAGANA_LAST: char = '\u{3096}';

/// First katakana letter (ァ, U+30A1).
const KATAKANA_FIRST: char = '\u{30A1}';

/// Last katakana letter (ヶ, U+30F6).
const KATAKANA_LAST: char = '\u{30F6}';

/// Distance between a hiragana letter and its katakana counterpart.
pub const HIRAGANA_TO_KATAKANA_OFFSET: u32 = 0x60;

/// Long-vowel mark (ー, U+30FC). Shared by hiragana and katakana spelling.
pub const CHOONPU: char = '\u{30FC}';

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a character is hiragana.
///
/// The long-vowel mark counts as hiragana here because it appears inside
/// hiragana words such as "らーめん".
pub fn is_hiragana(c: char) -> bool {
    (HIRAGANA_FIRST..=HIRAGANA_LAST).contains(&c) || c == CHOONPU
}

/// Check whether a character is katakana (including the long-vowel mark).
pub fn is_katakana(c: char) -> bool {
    (KATAKANA_FIRST..=KATAKANA_LAST).contains(&c) || c == CHOONPU
}

// ---------------------------------------------------------------------------
// Folding
// ---------------------------------------------------------------------------

/// Fold a hiragana letter to katakana.
///
/// Characters outside the hiragana letter range (including `ー`, ASCII and
/// kanji) are returned unchanged.
pub fn fold_to_katakana(c: char) -> char {
    if (HIRAGANA_FIRST..=HIRAGANA_LAST).contains(&c) {
        char::from_u32(c as u32 + HIRAGANA_TO_KATAKANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Fold every hiragana letter of a string to katakana.
pub fn to_katakana(input: &str) -> String {
    input.chars().map(fold_to_katakana).collect()
}
