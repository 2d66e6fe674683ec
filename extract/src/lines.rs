//! Line splitting for help text.
//!
//! Breaks on `\n`, `\r\n` and a lone `\r`. A terminator at the very end does
//! not produce an extra empty line.

/// Iterator over the lines of a help-text block.
///
/// # Examples
///
/// ```
/// use flag_cands_extract::lines::help_lines;
///
/// let lines: Vec<&str> = help_lines("-a\r  first.\r\n-b\n").collect();
/// assert_eq!(lines, ["-a", "  first.", "-b"]);
/// ```
#[derive(Debug, Clone)]
pub struct HelpLines<'a> {
    rest: &'a str,
}

/// Splits `text` into lines on `\n`, `\r\n` or `\r`.
pub fn help_lines(text: &str) -> HelpLines<'_> {
    HelpLines { rest: text }
}

impl<'a> Iterator for HelpLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(|ch: char| ch == '\n' || ch == '\r') {
            Some(idx) => {
                let line = &self.rest[..idx];
                let after = &self.rest[idx..];
                let skip = if after.starts_with("\r\n") { 2 } else { 1 };
                self.rest = &after[skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
