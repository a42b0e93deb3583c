// Token type produced by morphological analyzers.

/// A morpheme as produced by a morphological analyzer.
///
/// `surface` is the exact slice of input text the token covers. `reading` is
/// the katakana pronunciation, absent for tokens the dictionary does not know
/// (whitespace, symbols, unknown words).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form as written in the input.
    pub surface: String,

    /// Katakana pronunciation, if the analyzer provides one.
    pub reading: Option<String>,
}

impl Token {
    /// Create a new token.
    pub fn new(surface: impl Into<String>, reading: Option<String>) -> Self {
        Self {
            surface: surface.into(),
            reading,
        }
    }

    /// Create a token with a known reading.
    pub fn with_reading(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self::new(surface, Some(reading.into()))
    }

    /// Create a token without a reading.
    pub fn bare(surface: impl Into<String>) -> Self {
        Self::new(surface, None)
    }

    /// Length of the surface in characters.
    pub fn surface_len(&self) -> usize {
        self.surface.chars().count()
    }

    /// The reading, or the empty string when absent.
    pub fn reading_or_empty(&self) -> &str {
        self.reading.as_deref().unwrap_or("")
    }
}

/// Concatenate the surfaces of a token sequence.
pub fn join_surfaces(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.surface.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_with_reading() {
        let tok = Token::with_reading("聞い", "キイ");
        assert_eq!(tok.surface, "聞い");
        assert_eq!(tok.reading.as_deref(), Some("キイ"));
        assert_eq!(tok.reading_or_empty(), "キイ");
    }

    #[test]
    fn token_bare() {
        let tok = Token::bare("\n");
        assert!(tok.reading.is_none());
        assert_eq!(tok.reading_or_empty(), "");
    }

    #[test]
    fn surface_len_counts_chars() {
        // 3 characters, 9 bytes in UTF-8
        let tok = Token::bare("北海道");
        assert_eq!(tok.surface_len(), 3);
    }

    #[test]
    fn join_reproduces_text() {
        let tokens = vec![
            Token::with_reading("話", "ハナシ"),
            Token::with_reading("を", "ヲ"),
            Token::bare("\n"),
        ];
        assert_eq!(join_surfaces(&tokens), "話を\n");
        assert_eq!(join_surfaces(&[]), "");
    }
}
