//! Output formatting for candidates.

use std::io::Write;

use flag_cands_core::{Candidate, Result};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// One `cand <flag> "<description>"` line per candidate.
    #[default]
    Cand,
    Json,
    Yaml,
}

impl OutputFormat {
    /// `true` when candidates can be written as soon as they are produced.
    pub fn is_streaming(self) -> bool {
        matches!(self, OutputFormat::Cand)
    }
}

/// Writes a single `cand` line, including the trailing newline.
pub fn write_candidate<W: Write>(writer: &mut W, candidate: &Candidate) -> std::io::Result<()> {
    writeln!(writer, "{candidate}")
}

/// Formats a list of candidates in the requested output format.
pub fn format_candidates(candidates: &[Candidate], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Cand => {
            let mut buf = Vec::new();
            for candidate in candidates {
                write_candidate(&mut buf, candidate)?;
            }
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(candidates)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(candidates)?),
    }
}
