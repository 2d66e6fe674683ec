//! Candidate record and description helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One completion entry: a flag token and a short description.
///
/// The description is stored unescaped; quoting happens only when the
/// candidate is rendered as a `cand` line.
///
/// # Examples
///
/// ```
/// use flag_cands_core::Candidate;
///
/// let cand = Candidate::from_fragments(
///     "-p",
///     &["the number of programs, such as build commands or", "test binaries."],
///     '.',
/// );
/// assert_eq!(cand.description, "the number of programs, such as build commands or test binaries");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Flag token as it appeared at the start of the help line (e.g. `-race`).
    pub flag: String,
    /// First sentence of the description, without the terminator.
    pub description: String,
}

impl Candidate {
    /// Creates a candidate from an already-truncated description.
    pub fn new(flag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            description: description.into(),
        }
    }

    /// Builds a candidate from accumulated description fragments.
    ///
    /// Fragments are joined with a single space and cut at the first
    /// `terminator`. No fragments yields an empty description.
    pub fn from_fragments<S: AsRef<str>>(flag: &str, fragments: &[S], terminator: char) -> Self {
        let joined = fragments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            flag: flag.to_string(),
            description: first_sentence(&joined, terminator).to_string(),
        }
    }

    /// Renders the candidate as `cand <flag> "<escaped description>"`.
    pub fn to_cand_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cand {} \"{}\"", self.flag, escape_quotes(&self.description))
    }
}

/// Returns the text before the first `terminator`, or all of `text` if the
/// terminator does not occur.
pub fn first_sentence(text: &str, terminator: char) -> &str {
    match text.find(terminator) {
        Some(idx) => &text[..idx],
        None => text,
    }
}

/// Escapes double quotes with a backslash. Nothing else is touched.
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sentence_cuts_at_first_period() {
        assert_eq!(
            first_sentence("force rebuilding of packages that are already up-to-date.", '.'),
            "force rebuilding of packages that are already up-to-date"
        );
        assert_eq!(
            first_sentence("build mode to use. See 'go help buildmode' for more.", '.'),
            "build mode to use"
        );
    }

    #[test]
    fn test_first_sentence_without_terminator_keeps_everything() {
        assert_eq!(first_sentence("link against shared libraries", '.'), "link against shared libraries");
        assert_eq!(first_sentence("", '.'), "");
    }

    #[test]
    fn test_first_sentence_cuts_inside_words() {
        // A period inside a token still ends the sentence.
        assert_eq!(
            first_sentence("name of compiler to use, as in runtime.Compiler (gccgo or gc).", '.'),
            "name of compiler to use, as in runtime"
        );
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_quotes("no quotes"), "no quotes");
        assert_eq!(escape_quotes("it's 'single'"), "it's 'single'");
    }

    #[test]
    fn test_from_fragments_joins_with_single_space() {
        let cand = Candidate::from_fragments(
            "-work",
            &[
                "print the name of the temporary work directory and",
                "do not delete it when exiting.",
            ],
            '.',
        );
        assert_eq!(cand.flag, "-work");
        assert_eq!(
            cand.description,
            "print the name of the temporary work directory and do not delete it when exiting"
        );
    }

    #[test]
    fn test_from_fragments_empty_yields_empty_description() {
        let cand = Candidate::from_fragments::<&str>("-v", &[], '.');
        assert_eq!(cand.description, "");
        assert_eq!(cand.to_cand_line(), r#"cand -v """#);
    }

    #[test]
    fn test_cand_line_escapes_quotes_once() {
        let cand = Candidate::new("-q", r#"use "quiet" mode"#);
        assert_eq!(cand.to_cand_line(), r#"cand -q "use \"quiet\" mode""#);
        // The stored description stays unescaped, so rendering twice is stable.
        assert_eq!(cand.to_cand_line(), cand.to_string());
        assert_eq!(cand.description, r#"use "quiet" mode"#);
    }

    #[test]
    fn test_candidate_serializes_as_plain_fields() {
        let cand = Candidate::new("-x", "print the commands");
        let json = serde_json::to_value(&cand).unwrap();
        assert_eq!(json["flag"], "-x");
        assert_eq!(json["description"], "print the commands");
    }
}
