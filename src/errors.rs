use std::fmt::{self, Display};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// What was wrong with a line of a cube file.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatIssue {
    /// The file ended before this line could be read.
    /// MissingLine(what the line should hold)
    MissingLine(String),
    /// The line had fewer fields than required.
    /// MissingField(field)
    MissingField(String),
    /// A field could not be read as a number.
    /// InvalidNumber(field, value)
    InvalidNumber(String, String),
    /// The header declared a negative number of atoms.
    NegativeAtomCount(i64),
    /// The product of the voxel counts does not fit in memory.
    GridTooLarge([usize; 3]),
    /// The voxel stream ended early.
    /// Truncated(expected, found)
    Truncated(usize, usize),
}

impl Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLine(what) => {
                write!(f, "the file ends before the {} line", what)
            }
            Self::MissingField(field) => {
                write!(f, "the field \"{}\" is missing", field)
            }
            Self::InvalidNumber(field, value) => write!(
                f,
                "the value \"{}\" for the field \"{}\" is not a number",
                value, field
            ),
            Self::NegativeAtomCount(n) => write!(
                f,
                "negative atom count ({}): orbital cubes with a DSET_IDS line are not supported",
                n
            ),
            Self::GridTooLarge(n) => write!(
                f,
                "the grid {} x {} x {} is too large",
                n[0], n[1], n[2]
            ),
            Self::Truncated(expected, found) => write!(
                f,
                "expected {} voxel values but only {} are present",
                expected, found
            ),
        }
    }
}

/// Errors raised while reading a cube file.
#[derive(Debug, Error)]
pub enum CubeError {
    /// The file could not be opened or read.
    #[error("Unable to read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file does not follow the cube layout.
    #[error("Cannot read {} as cube file (line {line}): {issue}", .path.display())]
    Format {
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        issue: FormatIssue,
    },
}

/// Errors raised by the reducer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReduceError {
    /// The integral of the squared grid is exactly zero.
    #[error("IPR is undefined: the integral of the squared grid is zero (cell volume {cell_volume})")]
    DivisionByZero { cell_volume: f64 },
}

/// Every error the analysis pipeline can return.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Cube(#[from] CubeError),
    #[error(transparent)]
    Reduce(#[from] ReduceError),
    /// Listing the prefix directory or writing the report failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
    /// The prefix produced an unusable glob pattern.
    #[error("Invalid file pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    /// The prefix did not match any cube file.
    #[error("No files match {0}")]
    NoMatches(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_display() {
        let e = CubeError::Format { path: PathBuf::from("wf.cube"),
                                    line: 3,
                                    issue: FormatIssue::InvalidNumber(
            String::from("origin x"),
            String::from("abc"),
        ) };
        assert_eq!(e.to_string(),
                   "Cannot read wf.cube as cube file (line 3): the value \"abc\" for the field \"origin x\" is not a number");
    }

    #[test]
    fn file_access_display() {
        let e = CubeError::FileAccess {
            path: PathBuf::from("missing.cube"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(e.to_string().starts_with("Unable to read missing.cube"));
    }

    #[test]
    fn truncated_display() {
        let issue = FormatIssue::Truncated(8, 5);
        assert_eq!(issue.to_string(),
                   "expected 8 voxel values but only 5 are present")
    }

    #[test]
    fn error_from_reduce() {
        let e: Error = ReduceError::DivisionByZero { cell_volume: 1. }.into();
        assert!(matches!(e, Error::Reduce(_)))
    }
}
