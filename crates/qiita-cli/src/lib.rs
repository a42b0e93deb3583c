// qiita-cli: shared utilities for CLI tools.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

use qiita_ja::{QiitaError, QiitaHandle, VibratoAnalyzer};
use tracing_subscriber::EnvFilter;

/// Dictionary file names probed inside a directory, in order.
const DICT_FILES: &[&str] = &["system.dic.zst", "system.dic"];

/// Environment variable naming a dictionary file or directory.
const DICT_ENV: &str = "QIITA_DICT_PATH";

/// Handle type used by the command-line tools.
pub type Handle = QiitaHandle<VibratoAnalyzer>;

/// Install a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Search for a dictionary and create a handle.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `QIITA_DICT_PATH` environment variable
/// 3. `~/.qiita`
/// 4. `/usr/local/share/qiita`, `/usr/share/qiita`
/// 5. Current working directory
///
/// Each entry may name a dictionary file directly or a directory holding
/// `system.dic.zst` or `system.dic`.
pub fn load_handle(dict_path: Option<&str>, pron_field: Option<usize>) -> Result<Handle, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        let Some(file) = resolve_dictionary_file(candidate) else {
            continue;
        };
        tracing::info!(path = %file.display(), "loading dictionary");
        let mut analyzer = open_dictionary(&file)
            .map_err(|e| format!("failed to load {}: {e}", file.display()))?;
        if let Some(field) = pron_field {
            analyzer = analyzer.with_pronunciation_field(field);
        }
        tracing::debug!(field = analyzer.pronunciation_field(), "pronunciation column");
        return Ok(QiitaHandle::new(analyzer));
    }

    Err(format!(
        "could not find a dictionary ({}) in any of the search paths:\n{}",
        DICT_FILES.join(" or "),
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Open a dictionary file, decompressing `.zst` files on the fly.
pub fn open_dictionary(path: &Path) -> Result<VibratoAnalyzer, QiitaError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "zst") {
        VibratoAnalyzer::from_reader(zstd::Decoder::new(file)?)
    } else {
        VibratoAnalyzer::from_reader(BufReader::new(file))
    }
}

/// Map a search-path entry to a dictionary file, if one exists there.
fn resolve_dictionary_file(candidate: &Path) -> Option<PathBuf> {
    if candidate.is_file() {
        return Some(candidate.to_path_buf());
    }
    if candidate.is_dir() {
        return DICT_FILES
            .iter()
            .map(|name| candidate.join(name))
            .find(|p| p.is_file());
    }
    None
}

/// Build the list of locations to search for a dictionary.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".qiita"));
    }

    paths.push(PathBuf::from("/usr/local/share/qiita"));
    paths.push(PathBuf::from("/usr/share/qiita"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Extract `--NAME=VALUE`, `--NAME VALUE` or `-S VALUE` from the arguments.
///
/// Returns `(value, remaining_args)`. A missing value is reported as an error.
pub fn parse_option(
    args: &[String],
    long: &str,
    short: Option<&str>,
) -> Result<(Option<String>, Vec<String>), String> {
    let long_flag = format!("--{long}");
    let long_prefix = format!("--{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(v) = arg.strip_prefix(&long_prefix) {
            value = Some(v.to_string());
        } else if *arg == long_flag || short.is_some_and(|s| arg == s) {
            match iter.next() {
                Some(v) => value = Some(v.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Parse `--dict-path=PATH`, `--dict-path PATH` or `-d PATH`.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, "dict-path", Some("-d")).unwrap_or_else(|e| fatal(&e))
}

/// Parse `--pron-field=N` or `--pron-field N`.
///
/// Returns `(field_index, remaining_args)`.
pub fn parse_pron_field(args: &[String]) -> (Option<usize>, Vec<String>) {
    let (value, remaining) = parse_option(args, "pron-field", None).unwrap_or_else(|e| fatal(&e));
    let field = value.map(|v| {
        v.parse::<usize>()
            .unwrap_or_else(|_| fatal(&format!("--pron-field expects a column index, got {v:?}")))
    });
    (field, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
