// WASM bindings for kita-to-Qiita rewriting.
//
// Provides a `WasmQiita` class exported via wasm-bindgen that wraps a
// `QiitaHandle` over a vibrato dictionary. Tokens are serialized to
// JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const qiita = new WasmQiita(dictBytes);      // uncompressed system.dic
//   qiita.convert("話を聞いた");                  // => "話をQiita"
//   qiita.tokens("話を聞いた");                   // => [{ surface: "話", reading: "ハナシ" }, ...]
//   WasmQiita.defaultSample();                    // => "今北産業\n\n話を聞いた"

use serde::Serialize;
use wasm_bindgen::prelude::*;

use qiita_core::token::Token;
use qiita_ja::{DEFAULT_SAMPLE, QiitaError, QiitaHandle, VibratoAnalyzer};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a token.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsToken {
    surface: String,
    reading: Option<String>,
}

impl From<Token> for JsToken {
    fn from(token: Token) -> Self {
        Self {
            surface: token.surface,
            reading: token.reading,
        }
    }
}

fn qiita_error_to_js(e: QiitaError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmQiita
// ============================================================================

/// kita-to-Qiita converter for WebAssembly.
///
/// Construct once after the dictionary has been fetched, then call
/// `convert` on every edit.
#[wasm_bindgen]
pub struct WasmQiita {
    handle: QiitaHandle<VibratoAnalyzer>,
}

#[wasm_bindgen]
impl WasmQiita {
    /// Create a new converter from an uncompressed vibrato dictionary.
    #[wasm_bindgen(constructor)]
    pub fn new(dict_data: &[u8]) -> Result<WasmQiita, JsError> {
        let handle = QiitaHandle::from_dictionary_bytes(dict_data).map_err(qiita_error_to_js)?;
        Ok(WasmQiita { handle })
    }

    /// Rewrite キタ / キイタ readings in `text` to "Qiita".
    pub fn convert(&self, text: &str) -> String {
        self.handle.convert(text)
    }

    /// Tokenize text into `{ surface, reading }` objects.
    pub fn tokens(&self, text: &str) -> Result<JsValue, JsError> {
        let tokens: Vec<JsToken> = self.handle.tokens(text).into_iter().map(JsToken::from).collect();
        serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsError::new(&e.to_string()))
    }

    /// The text the editor starts with.
    #[wasm_bindgen(js_name = defaultSample)]
    pub fn default_sample() -> String {
        DEFAULT_SAMPLE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_token_from_token() {
        let js = JsToken::from(Token::with_reading("話", "ハナシ"));
        assert_eq!(js.surface, "話");
        assert_eq!(js.reading.as_deref(), Some("ハナシ"));

        let js = JsToken::from(Token::bare("\n"));
        assert!(js.reading.is_none());
    }

    #[test]
    fn default_sample_text() {
        assert_eq!(WasmQiita::default_sample(), "今北産業\n\n話を聞いた");
    }
}
