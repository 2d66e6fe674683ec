//! Line-driven flag extractor.
//!
//! Help text is scanned one line at a time. A line starting with the marker
//! opens a new flag, indented lines describe it, and the next flag line (or
//! the end of input) flushes it into a [`Candidate`].

use flag_cands_core::{Candidate, ExtractorConfig};
use tracing::debug;

/// Flag currently collecting description fragments.
#[derive(Debug)]
struct PendingFlag {
    name: String,
    fragments: Vec<String>,
}

/// Accumulate-then-flush state machine over help lines.
///
/// At most one flag is pending at a time. Each call to [`feed_line`] returns
/// the candidate completed by that line, if any; [`finish`] flushes the last
/// one.
///
/// # Examples
///
/// ```
/// use flag_cands_core::ExtractorConfig;
/// use flag_cands_extract::FlagTextExtractor;
///
/// let mut extractor = FlagTextExtractor::new(ExtractorConfig::default());
/// assert!(extractor.feed_line("-x").is_none());
/// assert!(extractor.feed_line("        print the commands.").is_none());
///
/// let cand = extractor.finish().unwrap();
/// assert_eq!(cand.to_cand_line(), r#"cand -x "print the commands""#);
/// assert!(extractor.finish().is_none());
/// ```
///
/// [`feed_line`]: FlagTextExtractor::feed_line
/// [`finish`]: FlagTextExtractor::finish
#[derive(Debug)]
pub struct FlagTextExtractor {
    config: ExtractorConfig,
    pending: Option<PendingFlag>,
    emitted: usize,
    discarded_fragments: usize,
}

impl FlagTextExtractor {
    /// Creates an extractor with no pending flag.
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            pending: None,
            emitted: 0,
            discarded_fragments: 0,
        }
    }

    /// Classifies one line and updates the pending flag.
    ///
    /// Returns the previous flag's candidate when `line` starts a new flag.
    /// A trailing `\n` or `\r\n` is ignored.
    pub fn feed_line(&mut self, line: &str) -> Option<Candidate> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            return None;
        }

        if line.starts_with(self.config.marker) {
            let flushed = self.flush();
            if let Some(token) = line.split_whitespace().next() {
                self.pending = Some(PendingFlag {
                    name: token.to_string(),
                    fragments: Vec::new(),
                });
            }
            return flushed;
        }

        let fragment = line.trim();
        match self.pending.as_mut() {
            Some(pending) => pending.fragments.push(fragment.to_string()),
            None => {
                self.discarded_fragments += 1;
                debug!(fragment, "Discarding description line with no pending flag");
            }
        }
        None
    }

    /// Flushes the last pending flag. Calling it again is a no-op.
    pub fn finish(&mut self) -> Option<Candidate> {
        self.flush()
    }

    /// Number of candidates produced so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Number of description lines dropped because no flag was pending.
    pub fn discarded_fragments(&self) -> usize {
        self.discarded_fragments
    }

    fn flush(&mut self) -> Option<Candidate> {
        let pending = self.pending.take()?;
        let candidate = Candidate::from_fragments(
            &pending.name,
            &pending.fragments,
            self.config.sentence_terminator,
        );
        self.emitted += 1;
        debug!(
            flag = %candidate.flag,
            fragments = pending.fragments.len(),
            "Flushed flag candidate"
        );
        Some(candidate)
    }
}

/// Iterator adapter yielding candidates lazily from a line source.
///
/// Created by [`candidates`](crate::candidates).
#[derive(Debug)]
pub struct Candidates<I> {
    lines: I,
    extractor: FlagTextExtractor,
    done: bool,
}

impl<I> Candidates<I> {
    /// Wraps a line iterator; nothing is read until the first `next`.
    pub fn new(lines: I, config: ExtractorConfig) -> Self {
        Self {
            lines,
            extractor: FlagTextExtractor::new(config),
            done: false,
        }
    }
}

impl<I> Iterator for Candidates<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.done {
            return None;
        }
        for line in self.lines.by_ref() {
            if let Some(candidate) = self.extractor.feed_line(line.as_ref()) {
                return Some(candidate);
            }
        }
        self.done = true;
        self.extractor.finish()
    }
}
