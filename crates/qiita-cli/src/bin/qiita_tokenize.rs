// qiita-tokenize: Show how the analyzer segments stdin.
//
// Prints each token with its character range, surface and reading. Useful
// for seeing why a passage was or was not rewritten.
//
// Usage:
//   qiita-tokenize [-d DICT_PATH] [--pron-field N]
//
// Options:
//   -d, --dict-path PATH   Dictionary file, or directory containing system.dic(.zst)
//   --pron-field N         Feature column holding the pronunciation (IPADIC: 8)
//   -h, --help             Print help

use std::io::{self, Read, Write};

fn main() {
    qiita_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = qiita_cli::parse_dict_path(&args);
    let (pron_field, args) = qiita_cli::parse_pron_field(&args);

    if qiita_cli::wants_help(&args) {
        println!("qiita-tokenize: Show analyzer tokens and readings.");
        println!();
        println!("Usage: qiita-tokenize [-d DICT_PATH] [--pron-field N]");
        println!();
        println!("Reads text from stdin, prints one token per line:");
        println!("  [start..end] <surface>  <reading or ->");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file, or directory containing system.dic(.zst)");
        println!("  --pron-field N         Feature column holding the pronunciation (IPADIC: 8)");
        println!("  -h, --help             Print this help");
        return;
    }

    let handle = qiita_cli::load_handle(dict_path.as_deref(), pron_field)
        .unwrap_or_else(|e| qiita_cli::fatal(&e));

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| qiita_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut pos = 0;
    for token in handle.tokens(&input) {
        let end = pos + token.surface_len();
        let display_surface = token
            .surface
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        let reading = token.reading.as_deref().unwrap_or("-");
        let _ = writeln!(out, "[{pos:>4}..{end:>4}] {display_surface}\t{reading}");
        pos = end;
    }
}
