//! hilite - print source files with ANSI syntax coloring

use std::env;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use hilite::{highlight, Config, HighlightError, LanguageRegistry, Result};

/// Language used when nothing else picks one
const FALLBACK_LANGUAGE: &str = "javascript";

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    file: Option<PathBuf>,
    language: Option<String>,
    protect: bool,
    no_color: bool,
    list_languages: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(options) = parse_args(&args)? else {
        return Ok(());
    };

    let config = Config::load();

    let mut registry = LanguageRegistry::new()?;
    if let Some(dir) = &config.language_dir {
        registry.load_dir(dir)?;
    }

    if options.list_languages {
        for name in registry.list_languages() {
            println!("{}", name);
        }
        return Ok(());
    }

    let data = match &options.file {
        Some(path) => fs::read(path)?,
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            data
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if options.no_color || !config.color {
        out.write_all(&data)?;
        out.flush()?;
        return Ok(());
    }

    let lang = match &options.language {
        Some(name) => registry
            .get_language(name)
            .ok_or_else(|| HighlightError::UnknownLanguage(name.clone()))?,
        None => {
            let detected = options.file.as_deref().and_then(|p| registry.detect_language(p));
            match detected {
                Some(lang) => lang,
                None => {
                    let name = config.default_language.as_deref().unwrap_or(FALLBACK_LANGUAGE);
                    registry
                        .get_language(name)
                        .ok_or_else(|| HighlightError::UnknownLanguage(name.to_string()))?
                }
            }
        }
    };
    debug!(language = %lang.name, "selected language");

    let tokens = lang.tokenize(&data);
    highlight(&data, &mut out, options.protect || config.protect, tokens.into_iter())?;
    out.flush()?;

    Ok(())
}

/// Parse command line arguments
///
/// Returns `None` when the invocation was fully handled (help, version).
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(None);
            }
            "--protect" | "-p" => options.protect = true,
            "--no-color" => options.no_color = true,
            "--list-languages" => options.list_languages = true,
            "--language" | "-l" => {
                let name = iter.next().ok_or_else(|| {
                    HighlightError::Message(format!("{} requires a language name", arg))
                })?;
                options.language = Some(name.clone());
            }
            "-" => options.file = None,
            other if other.starts_with('-') => {
                return Err(HighlightError::Message(format!("unknown option: {}", other)));
            }
            path => {
                if options.file.is_some() {
                    return Err(HighlightError::Message("only one file may be given".to_string()));
                }
                options.file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Some(options))
}

fn print_usage() {
    println!("hilite {} - print source with ANSI syntax coloring", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: hilite [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE, or standard input when FILE is absent or '-'.");
    println!();
    println!("Options:");
    println!("  -l, --language NAME  Force the language instead of detecting it");
    println!("  -p, --protect        Wrap escapes in \\001 ... \\002 markers");
    println!("      --no-color       Copy input through unchanged");
    println!("      --list-languages List known languages and exit");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Settings are read from ~/.hilite.conf; set RUST_LOG for diagnostics.");
}

fn print_version() {
    println!("hilite {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_file_and_flags() {
        let options = parse_args(&args(&["-p", "--language", "c", "main.c"])).unwrap().unwrap();
        assert!(options.protect);
        assert_eq!(options.language.as_deref(), Some("c"));
        assert_eq!(options.file, Some(PathBuf::from("main.c")));
    }

    #[test]
    fn test_parse_stdin() {
        let options = parse_args(&args(&["-"])).unwrap().unwrap();
        assert!(options.file.is_none());
        assert!(!options.protect);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--language"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["a.js", "b.js"])).is_err());
    }
}
