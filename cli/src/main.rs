use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use flag_cands_core::{ExtractorConfig, FlagCandsError};
use flag_cands_extract::builtin::BUILD_FLAGS;
use flag_cands_extract::extract_from_reader;
use flag_cands_extract::output::{OutputFormat, format_candidates, write_candidate};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gen-build-flags")]
#[command(about = "Print shell-completion candidates for build-tool flags")]
struct Cli {
    /// Help text to read instead of the embedded build flags (`-` reads stdin).
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "cand")]
    format: OutputFormat,
    /// YAML file overriding the flag marker and sentence terminator.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log extraction details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => ExtractorConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => ExtractorConfig::default(),
    };
    let reader = open_input(cli.input.as_deref())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.format.is_streaming() {
        extract_from_reader(reader, config, |candidate| {
            write_candidate(&mut out, &candidate).map_err(FlagCandsError::from)
        })
        .map_err(|err| format!("Failed to extract candidates: {err}"))?;
    } else {
        let mut candidates = Vec::new();
        extract_from_reader::<_, _, FlagCandsError>(reader, config, |candidate| {
            candidates.push(candidate);
            Ok(())
        })
        .map_err(|err| format!("Failed to read help text: {err}"))?;

        let rendered = format_candidates(&candidates, cli.format)
            .map_err(|err| format!("Failed to serialize candidates: {err}"))?;
        out.write_all(rendered.as_bytes())
            .map_err(|err| format!("Failed to write candidates: {err}"))?;
    }

    out.flush()
        .map_err(|err| format!("Failed to write candidates: {err}"))
}

fn open_input(input: Option<&Path>) -> Result<Box<dyn BufRead>, String> {
    match input {
        None => {
            debug!("Reading embedded build flag help text");
            Ok(Box::new(BUILD_FLAGS.as_bytes()))
        }
        Some(path) if path == Path::new("-") => {
            debug!("Reading help text from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
        Some(path) => {
            debug!(path = %path.display(), "Reading help text from file");
            let file = File::open(path)
                .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["gen-build-flags"]);
        assert!(cli.input.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.format, OutputFormat::Cand);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parses_format_and_input() {
        let cli = Cli::parse_from(["gen-build-flags", "--input", "-", "--format", "json", "-v"]);
        assert_eq!(cli.input.as_deref(), Some(Path::new("-")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_open_input_defaults_to_embedded_text() {
        let mut text = String::new();
        open_input(None).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, BUILD_FLAGS);
    }

    #[test]
    fn test_open_input_missing_file_names_path() {
        let err = open_input(Some(Path::new("/nonexistent/help.txt"))).err().unwrap();
        assert!(err.contains("/nonexistent/help.txt"));
    }
}
