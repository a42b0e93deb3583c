// Token-level rewriting of キタ / キイタ readings to "Qiita".
//
// Each token is tried on its own, then together with the following token
// (for patterns straddling a token boundary). Tokens that cannot be safely
// rewritten keep their surface. A single literal replacement over the
// assembled text catches what the token pass missed.

pub mod aligner;
pub mod assembler;
pub mod locator;

use qiita_core::token::Token;

use crate::analyzer::Analyzer;
use aligner::align;
use locator::{PATTERNS, find_qiita_match};

/// Replacement text.
pub const QIITA: &str = "Qiita";

/// Why a substitution attempt kept the surface as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// The reading could not be reconciled with the surface.
    AlignmentFailure,
    /// The reading contains neither キタ nor キイタ.
    NoPatternFound,
    /// Cutting at the match would split one surface character's reading.
    UnsafeBoundary,
}

impl Skip {
    /// Short label used as the trace reason.
    pub fn as_str(self) -> &'static str {
        match self {
            Skip::AlignmentFailure => "alignment failure",
            Skip::NoPatternFound => "no pattern",
            Skip::UnsafeBoundary => "unsafe boundary",
        }
    }
}

/// Rewrite a single (surface, reading) unit.
///
/// A reading that is exactly キタ or キイタ becomes "Qiita" whatever the
/// surface. Otherwise the reading is aligned onto the surface and the first
/// safe occurrence is cut out. `None` means the surface should be kept.
pub fn rewrite_token<F>(surface: &str, reading: &str, char_reading: F) -> Option<String>
where
    F: Fn(char) -> String,
{
    match try_rewrite(surface, reading, char_reading) {
        Ok(replaced) => Some(replaced),
        Err(skip) => {
            tracing::trace!(surface, reading, reason = skip.as_str(), "rewrite skip");
            None
        }
    }
}

fn try_rewrite<F>(surface: &str, reading: &str, char_reading: F) -> Result<String, Skip>
where
    F: Fn(char) -> String,
{
    let reading: Vec<char> = reading.chars().collect();
    if PATTERNS.iter().any(|p| reading.as_slice() == *p) {
        return Ok(QIITA.to_string());
    }

    let surface: Vec<char> = surface.chars().collect();
    let alignment = align(&surface, &reading, char_reading).ok_or(Skip::AlignmentFailure)?;
    let m = find_qiita_match(&reading, &alignment)?;

    let mut out: String = surface[..alignment[m.start]].iter().collect();
    out.push_str(QIITA);
    if alignment.last_index() != Some(m.end) {
        out.extend(&surface[alignment[m.end + 1]..]);
    }
    Ok(out)
}

/// Rewrite a token sequence and assemble the final text.
///
/// Consumes one token per step, or two when the pair window matched.
pub fn rewrite<A: Analyzer + ?Sized>(tokens: &[Token], analyzer: &A) -> String {
    let char_reading = |c: char| analyzer.char_reading(c);
    let mut pieces: Vec<String> = Vec::with_capacity(tokens.len());
    let mut substitutions = 0usize;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        if let Some(replaced) =
            rewrite_token(&token.surface, token.reading_or_empty(), char_reading)
        {
            pieces.push(replaced);
            substitutions += 1;
            i += 1;
            continue;
        }

        if let Some(next) = tokens.get(i + 1) {
            if let (Some(r1), Some(r2)) = (&token.reading, &next.reading) {
                let surface = format!("{}{}", token.surface, next.surface);
                let reading = format!("{r1}{r2}");
                if let Some(replaced) = rewrite_token(&surface, &reading, char_reading) {
                    pieces.push(replaced);
                    substitutions += 1;
                    i += 2;
                    continue;
                }
            }
        }

        pieces.push(token.surface.clone());
        i += 1;
    }

    tracing::debug!(tokens = tokens.len(), substitutions, "token pass done");
    assembler::assemble(&pieces)
}
