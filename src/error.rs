use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while locating or reading chat exports
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read export {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse export {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid export pattern {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no message_<n>.json exports found in {}", .0.display())]
    NoExports(PathBuf),
}

/// Failures while turning messages into an analysis or report
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("timestamp {0} ms is outside the representable range")]
    InvalidTimestamp(i64),

    #[error("{subject} has no qualifying messages, nothing to report")]
    NoOccurrences { subject: String },
}
