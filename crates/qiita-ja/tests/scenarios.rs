//! Scenario tests: run the data-driven cases in `tests/data/scenarios.json`
//! through a lexicon-backed handle, plus hand-built token sequences for cases
//! a greedy lexicon cannot produce.

use std::path::PathBuf;

use qiita_core::token::Token;
use qiita_ja::rewrite::aligner::align;
use qiita_ja::{Analyzer, LexiconAnalyzer, QIITA, QiitaHandle, rewrite, rewrite_token};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Scenario file
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ScenarioFile {
    lexicon: Vec<(String, String)>,
    cases: Vec<Case>,
}

#[derive(Deserialize)]
struct Case {
    name: String,
    input: String,
    expected: String,
}

fn load_scenarios() -> ScenarioFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/scenarios.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}

#[test]
fn scenario_file_cases() {
    let scenarios = load_scenarios();
    let handle = QiitaHandle::new(scenarios.lexicon.into_iter().collect::<LexiconAnalyzer>());

    let mut failures = Vec::new();
    for case in &scenarios.cases {
        let actual = handle.convert(&case.input);
        if actual != case.expected {
            failures.push(format!(
                "{}: input {:?}, expected {:?}, got {:?}",
                case.name, case.input, case.expected, actual
            ));
        }
    }
    assert!(failures.is_empty(), "scenario failures:\n{}", failures.join("\n"));
}

#[test]
fn scenario_outputs_are_stable_under_rerun() {
    let scenarios = load_scenarios();
    let handle = QiitaHandle::new(scenarios.lexicon.into_iter().collect::<LexiconAnalyzer>());
    for case in &scenarios.cases {
        // Rewriting an output again must not touch an existing "Qiita"
        let once = handle.convert(&case.input);
        if !once.contains("きた") && !once.contains("キタ") {
            assert_eq!(handle.convert(&once), once, "{}", case.name);
        }
    }
}

// ---------------------------------------------------------------------------
// Hand-built token sequences
// ---------------------------------------------------------------------------

#[test]
fn split_kanji_and_okurigana_merge_via_pair() {
    let tokens = vec![Token::with_reading("聞", "キ"), Token::with_reading("いた", "イタ")];
    assert_eq!(rewrite(&tokens, &LexiconAnalyzer::new()), QIITA);
}

#[test]
fn whole_reading_tokens_regardless_of_surface() {
    let none = |_: char| String::new();
    for (surface, reading) in [("来た", "キタ"), ("着いた", "キイタ"), ("聞いた", "キイタ"), ("北", "キタ")] {
        assert_eq!(rewrite_token(surface, reading, none).as_deref(), Some(QIITA), "{surface}");
    }
}

#[test]
fn readingless_tokens_between_pattern_halves_block_pair() {
    let tokens = vec![
        Token::with_reading("聞", "キ"),
        Token::bare(" "),
        Token::with_reading("いた", "イタ"),
    ];
    assert_eq!(rewrite(&tokens, &LexiconAnalyzer::new()), "聞 いた");
}

// ---------------------------------------------------------------------------
// Alignment through the analyzer
// ---------------------------------------------------------------------------

#[test]
fn alignment_uses_single_character_readings() {
    let lexicon: LexiconAnalyzer = [("聞", "キ"), ("今", "イマ")].into_iter().collect();
    let read = |c: char| lexicon.char_reading(c);

    let kiita: Vec<char> = "キイタ".chars().collect();
    let a = align(&"聞いた".chars().collect::<Vec<_>>(), &kiita, read).expect("aligns");
    assert_eq!(a.as_slice(), &[0, 1, 2]);

    let imakita: Vec<char> = "イマキタ".chars().collect();
    let a = align(&"今きた".chars().collect::<Vec<_>>(), &imakita, read).expect("aligns");
    assert_eq!(a.len(), imakita.len());
    assert_eq!(a[0], 0);
    assert_eq!(a[1], 0);
    assert_eq!(&a.as_slice()[2..], &[1, 2]);
}
