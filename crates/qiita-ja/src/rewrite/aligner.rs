// Reading-to-surface alignment.
//
// Maps every character of a katakana reading back to the index of the
// surface character that produced it. Kana in the surface map one-to-one;
// any other character (kanji, symbols) is looked up on its own and may
// expand to several reading characters.

use std::ops::Index;

use qiita_core::kana::{fold_to_katakana, is_hiragana, is_katakana};

/// Surface-character index for each reading character.
///
/// Only produced by a successful [`align`], so its length always equals the
/// reading length. Values never decrease; a run of equal values is one
/// surface character expanding to several kana.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment(Vec<usize>);

impl Alignment {
    /// Number of aligned reading characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the alignment is empty (empty reading).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the last reading character, if any.
    pub fn last_index(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    /// Surface indices in reading order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Index<usize> for Alignment {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.0[index]
    }
}

/// Align `reading` onto `surface`.
///
/// `char_reading` returns the reading of a single non-kana surface character.
/// Returns `None` on the first mismatch, when a non-kana character has no
/// reading of its own, or when the surface runs out before every reading
/// character is mapped. Trailing surface characters beyond the
/// reading are allowed.
pub fn align<F>(surface: &[char], reading: &[char], char_reading: F) -> Option<Alignment>
where
    F: Fn(char) -> String,
{
    let mut indices = Vec::with_capacity(reading.len());
    let mut si = 0;
    let mut pi = 0;

    while si < surface.len() && pi < reading.len() {
        let c = surface[si];

        if is_hiragana(c) {
            if fold_to_katakana(c) != reading[pi] {
                return None;
            }
            indices.push(si);
            si += 1;
            pi += 1;
            continue;
        }

        if is_katakana(c) {
            if c != reading[pi] {
                return None;
            }
            indices.push(si);
            si += 1;
            pi += 1;
            continue;
        }

        // Expand the character through its own reading.
        let local = char_reading(c);
        if local.is_empty() {
            return None;
        }
        let mut kana = local.chars().peekable();
        while let Some(k) = kana.next() {
            if reading.get(pi) != Some(&k) {
                return None;
            }
            indices.push(si);
            pi += 1;
            if pi >= reading.len() && kana.peek().is_some() {
                return None;
            }
        }
        si += 1;
    }

    (indices.len() == reading.len()).then_some(Alignment(indices))
}
