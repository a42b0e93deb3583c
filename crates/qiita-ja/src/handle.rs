// QiitaHandle: owns a loaded analyzer and exposes text-in/text-out conversion.
//
// The analyzer is built once (dictionary loading can be slow) and then used
// read-only for every conversion. Callers that re-run conversion on each
// edit keep one handle around.

use qiita_core::token::Token;

use crate::analyzer::Analyzer;
use crate::rewrite;

/// Text the editor starts with.
pub const DEFAULT_SAMPLE: &str = "今北産業\n\n話を聞いた";

/// Error type for handle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum QiitaError {
    /// The dictionary file could not be read.
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// The dictionary data could not be decoded.
    #[error("failed to load dictionary: {0}")]
    Dictionary(String),
}

/// Top-level handle pairing an analyzer with the rewriter.
pub struct QiitaHandle<A> {
    analyzer: A,
}

impl<A: Analyzer> QiitaHandle<A> {
    /// Wrap a ready analyzer.
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// Rewrite キタ / キイタ readings in `text` to "Qiita".
    ///
    /// Never fails; units that cannot be rewritten safely are kept as written.
    pub fn convert(&self, text: &str) -> String {
        let tokens = self.analyzer.tokenize(text);
        rewrite::rewrite(&tokens, &self.analyzer)
    }

    /// Tokenize text with the underlying analyzer.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        self.analyzer.tokenize(text)
    }

    /// The analyzer this handle was built with.
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }
}

#[cfg(feature = "vibrato")]
impl QiitaHandle<crate::analyzer::VibratoAnalyzer> {
    /// Create a handle from an uncompressed vibrato dictionary in memory.
    pub fn from_dictionary_bytes(data: &[u8]) -> Result<Self, QiitaError> {
        crate::analyzer::VibratoAnalyzer::from_bytes(data).map(Self::new)
    }

    /// Create a handle from an uncompressed vibrato dictionary stream.
    pub fn from_dictionary_reader<R: std::io::Read>(reader: R) -> Result<Self, QiitaError> {
        crate::analyzer::VibratoAnalyzer::from_reader(reader).map(Self::new)
    }
}
