// Final assembly: join rewritten pieces and apply the literal fallback.

use std::borrow::Borrow;
use std::sync::LazyLock;

use regex::Regex;

use super::QIITA;

/// Literal spellings replaced after the token pass, in priority order.
const FALLBACK_SPELLINGS: &str = "きた|きいた|キタ|キイタ";

static FALLBACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FALLBACK_SPELLINGS).expect("fallback pattern is a valid regex"));

/// Join `pieces` and replace the leftmost literal きた / きいた / キタ / キイタ
/// with "Qiita". At most one replacement is made.
pub fn assemble<S: Borrow<str>>(pieces: &[S]) -> String {
    replace_first_literal(&pieces.concat())
}

/// Replace the leftmost fallback spelling in `text`, if any.
pub fn replace_first_literal(text: &str) -> String {
    FALLBACK.replacen(text, 1, QIITA).into_owned()
}
