// In-memory lexicon analyzer.
//
// Segments text by greedy longest match against a fixed surface -> reading
// table. Used for tests and benches, and for embedding callers that already
// know the vocabulary they care about.

use std::collections::HashMap;

use qiita_core::token::Token;

use super::Analyzer;

/// Analyzer backed by a surface -> reading table.
///
/// At each position the longest lexicon entry starting there is taken. A
/// character that starts no entry becomes a one-character token without a
/// reading.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer {
    entries: HashMap<String, String>,
    /// Length in characters of the longest entry.
    max_entry_chars: usize,
}

impl LexiconAnalyzer {
    /// Create an empty lexicon. Every character tokenizes on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, surface: impl Into<String>, reading: impl Into<String>) {
        let surface = surface.into();
        let len = surface.chars().count();
        if len == 0 {
            return;
        }
        self.max_entry_chars = self.max_entry_chars.max(len);
        self.entries.insert(surface, reading.into());
    }

    /// Look up the reading of an exact surface.
    pub fn get(&self, surface: &str) -> Option<&str> {
        self.entries.get(surface).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the longest entry starting at `chars[0]`.
    fn longest_prefix(&self, chars: &[char]) -> Option<(usize, &str)> {
        let limit = self.max_entry_chars.min(chars.len());
        let mut candidate = String::new();
        let mut best = None;
        for (i, c) in chars[..limit].iter().enumerate() {
            candidate.push(*c);
            if let Some(reading) = self.entries.get(&candidate) {
                best = Some((i + 1, reading.as_str()));
            }
        }
        best
    }
}

impl Analyzer for LexiconAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < chars.len() {
            match self.longest_prefix(&chars[pos..]) {
                Some((len, reading)) => {
                    let surface: String = chars[pos..pos + len].iter().collect();
                    tokens.push(Token::with_reading(surface, reading));
                    pos += len;
                }
                None => {
                    tokens.push(Token::bare(chars[pos].to_string()));
                    pos += 1;
                }
            }
        }
        tokens
    }
}

impl<S, R> FromIterator<(S, R)> for LexiconAnalyzer
where
    S: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, R)>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        for (surface, reading) in iter {
            lexicon.insert(surface, reading);
        }
        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qiita_core::token::join_surfaces;

    fn sample() -> LexiconAnalyzer {
        [
            ("話", "ハナシ"),
            ("を", "ヲ"),
            ("聞い", "キイ"),
            ("聞", "キ"),
            ("た", "タ"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn longest_match_wins() {
        let tokens = sample().tokenize("話を聞いた");
        assert_eq!(
            tokens,
            vec![
                Token::with_reading("話", "ハナシ"),
                Token::with_reading("を", "ヲ"),
                Token::with_reading("聞い", "キイ"),
                Token::with_reading("た", "タ"),
            ]
        );
    }

    #[test]
    fn unknown_chars_are_bare_tokens() {
        let tokens = sample().tokenize("話\n!");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::bare("\n"));
        assert_eq!(tokens[2], Token::bare("!"));
    }

    #[test]
    fn surfaces_reproduce_input() {
        let text = "今日、話を聞いた。Qiita";
        assert_eq!(join_surfaces(&sample().tokenize(text)), text);
    }

    #[test]
    fn empty_input() {
        assert!(sample().tokenize("").is_empty());
        assert!(LexiconAnalyzer::new().tokenize("").is_empty());
    }

    #[test]
    fn char_reading_from_single_entry() {
        let lex = sample();
        assert_eq!(lex.char_reading('聞'), "キ");
        assert_eq!(lex.char_reading('北'), "");
    }

    #[test]
    fn insert_replaces_and_ignores_empty() {
        let mut lex = LexiconAnalyzer::new();
        lex.insert("北", "ホク");
        lex.insert("北", "キタ");
        lex.insert("", "ア");
        assert_eq!(lex.len(), 1);
        assert_eq!(lex.get("北"), Some("キタ"));
    }
}
