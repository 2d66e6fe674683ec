//! Core types for flag completion candidates.
//!
//! A [`Candidate`] pairs a flag token (e.g. `-asmflags`) with the first
//! sentence of its help description. Candidates are rendered as
//! `cand <flag> "<description>"` lines for a shell-completion generator.
//!
//! # Example
//!
//! ```
//! use flag_cands_core::Candidate;
//!
//! let cand = Candidate::new("-x", "print the commands");
//! assert_eq!(cand.to_cand_line(), r#"cand -x "print the commands""#);
//! ```

mod config;
mod error;
mod types;

pub use config::{DEFAULT_MARKER, DEFAULT_SENTENCE_TERMINATOR, ExtractorConfig};
pub use error::{FlagCandsError, Result};
pub use types::{Candidate, escape_quotes, first_sentence};
