// Morphological analyzer abstraction and backends.

mod lexicon;
#[cfg(feature = "vibrato")]
mod vibrato;

pub use lexicon::LexiconAnalyzer;
#[cfg(feature = "vibrato")]
pub use self::vibrato::{IPADIC_PRONUNCIATION_FIELD, VibratoAnalyzer};
#[cfg(all(test, feature = "vibrato"))]
pub(crate) use self::vibrato::test_dictionary;

use qiita_core::token::Token;

/// Trait for morphological analyzers.
///
/// Implementations segment text into tokens carrying a surface form and an
/// optional katakana reading. Calls go through `&self`, so a loaded analyzer
/// can serve any number of sequential conversions.
pub trait Analyzer {
    /// Segment `text` into tokens in document order.
    ///
    /// Concatenating the surfaces of the result must reproduce `text`.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Reading of a single character analyzed on its own.
    ///
    /// The default implementation tokenizes the character and concatenates
    /// the readings of the resulting sub-tokens. Sub-tokens without a reading
    /// contribute nothing, so the result may be empty.
    fn char_reading(&self, c: char) -> String {
        let mut buf = [0u8; 4];
        concat_readings(&self.tokenize(c.encode_utf8(&mut buf)))
    }
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        (**self).tokenize(text)
    }

    fn char_reading(&self, c: char) -> String {
        (**self).char_reading(c)
    }
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        (**self).tokenize(text)
    }

    fn char_reading(&self, c: char) -> String {
        (**self).char_reading(c)
    }
}

/// Concatenate the readings of a token sequence, skipping absent ones.
pub fn concat_readings(tokens: &[Token]) -> String {
    tokens.iter().map(Token::reading_or_empty).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Analyzer that splits into single characters and reads each one from a table.
    struct CharTable(&'static [(char, &'static str)]);

    impl Analyzer for CharTable {
        fn tokenize(&self, text: &str) -> Vec<Token> {
            text.chars()
                .map(|c| {
                    let reading = self
                        .0
                        .iter()
                        .find(|(k, _)| *k == c)
                        .map(|(_, r)| (*r).to_string());
                    Token::new(c.to_string(), reading)
                })
                .collect()
        }
    }

    #[test]
    fn default_char_reading_uses_tokenize() {
        let a = CharTable(&[('聞', "キ"), ('今', "イマ")]);
        assert_eq!(a.char_reading('聞'), "キ");
        assert_eq!(a.char_reading('今'), "イマ");
    }

    #[test]
    fn default_char_reading_empty_when_unknown() {
        let a = CharTable(&[]);
        assert_eq!(a.char_reading('〒'), "");
    }

    #[test]
    fn concat_skips_absent_readings() {
        let tokens = vec![
            Token::with_reading("聞い", "キイ"),
            Token::bare(" "),
            Token::with_reading("た", "タ"),
        ];
        assert_eq!(concat_readings(&tokens), "キイタ");
    }

    #[test]
    fn references_and_boxes_are_analyzers() {
        let a = CharTable(&[('北', "キタ")]);
        let by_ref: &dyn Analyzer = &a;
        assert_eq!(by_ref.char_reading('北'), "キタ");
        let boxed: Box<dyn Analyzer> = Box::new(CharTable(&[('北', "ホク")]));
        assert_eq!(boxed.char_reading('北'), "ホク");
    }
}
