//! Flag completion candidates from build-tool help text.
//!
//! Help text lists flags at column 0 (e.g. `-asmflags 'flag list'`) with
//! indented description lines below. This crate turns each flag into a
//! [`Candidate`] carrying the first sentence of its description, ready to be
//! printed as a `cand` line for a shell-completion generator.
//!
//! # Main entry points
//!
//! - [`extract_candidates`] — collect candidates from a block of text.
//! - [`candidates`] — lazily iterate candidates from a block of text.
//! - [`extract_from_reader`] — stream candidates from any [`BufRead`] as each
//!   flag completes.
//! - [`builtin::build_flag_candidates`] — candidates for the embedded build
//!   flag documentation.
//!
//! # Example
//!
//! ```
//! use flag_cands_extract::extract_candidates;
//!
//! let help = "\
//! -n
//!         print the commands but do not run them.
//! -x
//!         print the commands.
//! ";
//!
//! let lines: Vec<String> = extract_candidates(help)
//!     .iter()
//!     .map(|cand| cand.to_cand_line())
//!     .collect();
//! assert_eq!(lines, [
//!     r#"cand -n "print the commands but do not run them""#,
//!     r#"cand -x "print the commands""#,
//! ]);
//! ```
//!
//! [`BufRead`]: std::io::BufRead

pub mod builtin;
pub mod extractor;
pub mod lines;
pub mod output;

use std::borrow::Cow;
use std::io::BufRead;

use flag_cands_core::{Candidate, ExtractorConfig};
use tracing::{info, warn};

pub use extractor::{Candidates, FlagTextExtractor};
pub use lines::{HelpLines, help_lines};

/// Lazily yields candidates from `text` in input order.
pub fn candidates(text: &str, config: ExtractorConfig) -> Candidates<HelpLines<'_>> {
    Candidates::new(help_lines(text), config)
}

/// Collects candidates from `text` using the default configuration.
pub fn extract_candidates(text: &str) -> Vec<Candidate> {
    extract_candidates_with(text, ExtractorConfig::default())
}

/// Collects candidates from `text` using `config`.
pub fn extract_candidates_with(text: &str, config: ExtractorConfig) -> Vec<Candidate> {
    candidates(text, config).collect()
}

/// Streams candidates from `reader`, calling `emit` as soon as each flag is
/// complete. Returns the number of candidates emitted.
///
/// Lines are split like [`help_lines`]. Bytes that are not valid UTF-8 are
/// replaced with `U+FFFD` and the line is still processed.
///
/// # Errors
///
/// Propagates read failures from `reader` and any error returned by `emit`.
/// Candidates emitted before the failure stay emitted.
pub fn extract_from_reader<R, F, E>(mut reader: R, config: ExtractorConfig, mut emit: F) -> Result<usize, E>
where
    R: BufRead,
    F: FnMut(Candidate) -> Result<(), E>,
    E: From<std::io::Error>,
{
    let mut extractor = FlagTextExtractor::new(config);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let chunk = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = chunk {
            warn!(line = %chunk.trim_end(), "Replaced invalid UTF-8 in help text");
        }
        for line in help_lines(&chunk) {
            if let Some(candidate) = extractor.feed_line(line) {
                emit(candidate)?;
            }
        }
    }
    if let Some(candidate) = extractor.finish() {
        emit(candidate)?;
    }

    info!(
        emitted = extractor.emitted(),
        discarded_fragments = extractor.discarded_fragments(),
        "Finished extracting flag candidates"
    );
    Ok(extractor.emitted())
}
