//! Input resolution for command invocations.
//!
//! Text comes from, in precedence order: a `--lines` range of the file
//! (the selection), the whole file, or stdin when no file is given.
//! Resolving to empty text is not an error here; commands decide whether
//! an empty input is a silent no-op.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{LegibleError, Result};

/// A 1-based, inclusive range of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Parse a range spec of the form "A:B".
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |message: &str| LegibleError::InvalidLineRange {
            range: spec.to_string(),
            message: message.to_string(),
        };

        let (start, end) = spec
            .split_once(':')
            .ok_or_else(|| invalid("expected START:END"))?;
        let start: usize = start
            .trim()
            .parse()
            .map_err(|_| invalid("start is not a number"))?;
        let end: usize = end
            .trim()
            .parse()
            .map_err(|_| invalid("end is not a number"))?;

        if start == 0 || end == 0 {
            return Err(invalid("line numbers are 1-based"));
        }
        if start > end {
            return Err(invalid("start is after end"));
        }
        Ok(Self { start, end })
    }

    /// Extract the range from the given text.
    pub fn apply(&self, text: &str) -> Result<String> {
        let lines: Vec<&str> = text.lines().collect();
        if self.end > lines.len() {
            return Err(LegibleError::InvalidLineRange {
                range: format!("{}:{}", self.start, self.end),
                message: format!("input has only {} lines", lines.len()),
            });
        }
        Ok(lines[self.start - 1..self.end].join("\n"))
    }
}

/// Read a file to a string, mapping a missing file to a domain error.
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LegibleError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Resolve the text for a command invocation.
pub fn resolve_text(file: Option<&PathBuf>, lines: Option<&str>) -> Result<String> {
    let text = match file {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };
    match lines {
        Some(spec) => LineRange::parse(spec)?.apply(&text),
        None => Ok(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_range() {
        assert_eq!(LineRange::parse("3:7").unwrap(), LineRange { start: 3, end: 7 });
        assert_eq!(LineRange::parse("1:1").unwrap(), LineRange { start: 1, end: 1 });
    }

    #[test]
    fn parse_rejects_missing_colon() {
        assert!(LineRange::parse("37").is_err());
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!(LineRange::parse("a:7").is_err());
        assert!(LineRange::parse("3:b").is_err());
    }

    #[test]
    fn parse_rejects_zero_based() {
        assert!(LineRange::parse("0:5").is_err());
    }

    #[test]
    fn parse_rejects_inverted_range() {
        let err = LineRange::parse("9:3").unwrap_err();
        assert!(err.to_string().contains("start is after end"));
    }

    #[test]
    fn apply_extracts_inclusive_range() {
        let text = "one\ntwo\nthree\nfour";
        let range = LineRange { start: 2, end: 3 };
        assert_eq!(range.apply(text).unwrap(), "two\nthree");
    }

    #[test]
    fn apply_single_line() {
        let range = LineRange { start: 1, end: 1 };
        assert_eq!(range.apply("only\nmore").unwrap(), "only");
    }

    #[test]
    fn apply_rejects_out_of_range() {
        let range = LineRange { start: 1, end: 99 };
        let err = range.apply("one\ntwo").unwrap_err();
        assert!(err.to_string().contains("only 2 lines"));
    }

    #[test]
    fn read_file_missing_is_domain_error() {
        let err = read_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, LegibleError::FileNotFound { .. }));
    }

    #[test]
    fn resolve_text_from_file_with_range() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "alpha\nbeta\ngamma\n").unwrap();
        let path = temp.path().to_path_buf();

        let text = resolve_text(Some(&path), Some("2:3")).unwrap();
        assert_eq!(text, "beta\ngamma");
    }

    #[test]
    fn resolve_text_whole_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "alpha\nbeta\n").unwrap();
        let path = temp.path().to_path_buf();

        let text = resolve_text(Some(&path), None).unwrap();
        assert_eq!(text, "alpha\nbeta\n");
    }
}
