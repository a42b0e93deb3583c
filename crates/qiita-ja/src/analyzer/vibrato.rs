// Dictionary-backed analyzer using the vibrato Viterbi tokenizer.
//
// vibrato reads MeCab-compatible compiled dictionaries. Each token carries
// the dictionary's comma-separated feature string; the pronunciation column
// of that string, folded to katakana, becomes the token reading.

use std::io::Read;

use qiita_core::kana::to_katakana;
use qiita_core::token::Token;
use vibrato::{Dictionary, Tokenizer};

use super::Analyzer;
use crate::handle::QiitaError;

/// Index of the pronunciation column (発音) in IPADIC feature strings.
///
/// IPADIC features are
/// `品詞,品詞細分類1,品詞細分類2,品詞細分類3,活用型,活用形,原形,読み,発音`.
/// Unknown words carry only the first seven columns.
pub const IPADIC_PRONUNCIATION_FIELD: usize = 8;

/// Feature value used by MeCab dictionaries for "no value".
const EMPTY_FEATURE: &str = "*";

/// Morphological analyzer wrapping a loaded vibrato dictionary.
///
/// The dictionary is loaded once; every `tokenize` call creates its own
/// lattice worker, so the analyzer only needs `&self`.
pub struct VibratoAnalyzer {
    tokenizer: Tokenizer,
    pronunciation_field: usize,
}

impl VibratoAnalyzer {
    /// Load a compiled (uncompressed) vibrato dictionary from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QiitaError> {
        let dict =
            Dictionary::read(reader).map_err(|e| QiitaError::Dictionary(e.to_string()))?;
        tracing::debug!("vibrato dictionary loaded");
        Ok(Self::new(dict))
    }

    /// Load a compiled (uncompressed) vibrato dictionary from memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self, QiitaError> {
        Self::from_reader(data)
    }

    /// Wrap an already loaded dictionary.
    pub fn new(dict: Dictionary) -> Self {
        Self {
            tokenizer: Tokenizer::new(dict),
            pronunciation_field: IPADIC_PRONUNCIATION_FIELD,
        }
    }

    /// Read pronunciations from a different feature column.
    pub fn with_pronunciation_field(mut self, index: usize) -> Self {
        self.pronunciation_field = index;
        self
    }

    /// The feature column readings are taken from.
    pub fn pronunciation_field(&self) -> usize {
        self.pronunciation_field
    }
}

impl Analyzer for VibratoAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        if text.is_empty() {
            return Vec::new();
        }
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();
        worker
            .token_iter()
            .map(|t| {
                let reading = pronunciation(t.feature(), self.pronunciation_field);
                Token::new(t.surface(), reading.map(to_katakana))
            })
            .collect()
    }
}

/// Extract the pronunciation column from a feature string.
fn pronunciation(feature: &str, field: usize) -> Option<&str> {
    feature
        .split(',')
        .nth(field)
        .filter(|v| !v.is_empty() && *v != EMPTY_FEATURE)
}

// ----------------------------------------------------------------------------
// Test dictionary
// ----------------------------------------------------------------------------

/// Compile a small IPADIC-shaped dictionary in memory.
///
/// Unknown characters become one-character tokens without a pronunciation;
/// spaces form their own category.
#[cfg(test)]
pub(crate) fn test_dictionary() -> Dictionary {
    const LEXICON: &str = "\
話,0,0,1,名詞,一般,*,*,*,*,話,ハナシ,ハナシ
を,0,0,1,助詞,格助詞,一般,*,*,*,を,ヲ,ヲ
は,0,0,1,助詞,係助詞,*,*,*,*,は,ハ,ワ
聞い,0,0,1,動詞,自立,*,*,五段・カ行イ音便,連用タ接続,聞く,キイ,キイ
た,0,0,1,助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
〆,0,0,1,記号,一般,*,*,*,*,〆,*,*
北,0,0,1,名詞,一般,*,*,*,*,北,きた,きた
";
    const MATRIX: &str = "1 1\n0 0 0\n";
    const CHAR_DEF: &str = "DEFAULT 0 0 1\nSPACE 0 1 0\n0x0020 SPACE\n";
    const UNK_DEF: &str = "\
DEFAULT,0,0,100,名詞,一般,*,*,*,*,*
SPACE,0,0,100,記号,空白,*,*,*,*,*
";

    vibrato::SystemDictionaryBuilder::from_readers(
        LEXICON.as_bytes(),
        MATRIX.as_bytes(),
        CHAR_DEF.as_bytes(),
        UNK_DEF.as_bytes(),
    )
    .expect("test dictionary builds")
}
