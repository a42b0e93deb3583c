// qiita-convert: Rewrite キタ / キイタ readings to "Qiita".
//
// Converts TEXT arguments, the built-in sample, or all of stdin.
//
// Usage:
//   qiita-convert [-d DICT_PATH] [--pron-field N] [--sample] [TEXT...]
//
// Options:
//   -d, --dict-path PATH   Dictionary file, or directory containing system.dic(.zst)
//   --pron-field N         Feature column holding the pronunciation (IPADIC: 8)
//   --sample               Convert the built-in sample text
//   -h, --help             Print help

use std::io::{self, Read, Write};

use qiita_ja::DEFAULT_SAMPLE;

fn main() {
    qiita_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = qiita_cli::parse_dict_path(&args);
    let (pron_field, args) = qiita_cli::parse_pron_field(&args);

    if qiita_cli::wants_help(&args) {
        println!("qiita-convert: Rewrite キタ / キイタ readings in Japanese text to \"Qiita\".");
        println!();
        println!("Usage: qiita-convert [-d DICT_PATH] [--pron-field N] [--sample] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, converts each one.");
        println!("With --sample, converts the built-in sample text.");
        println!("Otherwise converts all of stdin.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file, or directory containing system.dic(.zst)");
        println!("  --pron-field N         Feature column holding the pronunciation (IPADIC: 8)");
        println!("  --sample               Convert the built-in sample text");
        println!("  -h, --help             Print this help");
        return;
    }

    let use_sample = args.iter().any(|a| a == "--sample");
    let texts: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let handle = qiita_cli::load_handle(dict_path.as_deref(), pron_field)
        .unwrap_or_else(|e| qiita_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if use_sample {
        let _ = writeln!(out, "{DEFAULT_SAMPLE}");
        let _ = writeln!(out, "⬇");
        let _ = writeln!(out, "{}", handle.convert(DEFAULT_SAMPLE));
    } else if !texts.is_empty() {
        for text in &texts {
            let _ = writeln!(out, "{}", handle.convert(text));
        }
    } else {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .unwrap_or_else(|e| qiita_cli::fatal(&format!("failed to read stdin: {e}")));
        let _ = write!(out, "{}", handle.convert(&input));
    }
}
