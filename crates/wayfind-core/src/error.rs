//! Error types and exit codes for wayfind
//!
//! Exit codes:
//! - 0: Success (including "no path" / "no ladder" results)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range vertex)
//! - 3: Data error (malformed graph file, unreadable dictionary)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the wayfind CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input files (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfind operations
#[derive(Error, Debug)]
pub enum WayfindError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("vertex {vertex} out of range (graph has {num_vertices} vertices)")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("cannot read graph file {path:?}: {source}")]
    GraphFileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed graph file {path:?} at line {line}: {reason}")]
    MalformedGraph {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("cannot read dictionary file {path:?}: {source}")]
    DictionaryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfindError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::UnknownFormat(_)
            | WayfindError::VertexOutOfRange { .. }
            | WayfindError::UsageError(_) => ExitCode::Usage,

            WayfindError::GraphFileUnreadable { .. }
            | WayfindError::MalformedGraph { .. }
            | WayfindError::DictionaryUnreadable { .. } => ExitCode::Data,

            WayfindError::Io(_) | WayfindError::Json(_) | WayfindError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WayfindError::UnknownFormat(_) => "unknown_format",
            WayfindError::VertexOutOfRange { .. } => "vertex_out_of_range",
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::GraphFileUnreadable { .. } => "graph_file_unreadable",
            WayfindError::MalformedGraph { .. } => "malformed_graph",
            WayfindError::DictionaryUnreadable { .. } => "dictionary_unreadable",
            WayfindError::Io(_) => "io_error",
            WayfindError::Json(_) => "json_error",
            WayfindError::Other(_) => "other",
        }
    }
}

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, WayfindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_exit_2() {
        let err = WayfindError::VertexOutOfRange {
            vertex: 9,
            num_vertices: 4,
        };
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(i32::from(err.exit_code()), 2);
    }

    #[test]
    fn test_data_errors_exit_3() {
        let err = WayfindError::MalformedGraph {
            path: PathBuf::from("g.txt"),
            line: 3,
            reason: "negative weight".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn test_error_json_envelope() {
        let err = WayfindError::UnknownFormat("yaml".to_string());
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "unknown_format");
    }
}
