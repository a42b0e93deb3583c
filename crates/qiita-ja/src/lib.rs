// qiita-ja: rewrite the readings キタ / キイタ in Japanese text to "Qiita".

pub mod analyzer;
pub mod handle;
pub mod rewrite;

pub use analyzer::{Analyzer, LexiconAnalyzer};
#[cfg(feature = "vibrato")]
pub use analyzer::VibratoAnalyzer;
pub use handle::{DEFAULT_SAMPLE, QiitaError, QiitaHandle};
pub use rewrite::{QIITA, rewrite, rewrite_token};
