//! Error types for the advisor core

use thiserror::Error;

/// Errors raised while loading catalog or curriculum documents
///
/// All variants are startup-fatal: the service must not come up on bad data.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed to load
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid JSON or does not match the expected shape
    #[error("malformed data in {path}: {source}")]
    Malformed {
        /// Path of the file that failed to parse
        path: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Prerequisites or offerings reference identifiers that do not exist
    #[error("invalid references:\n{}", .0.join("\n"))]
    InvalidReferences(Vec<String>),
}

/// Client-input errors for service requests
///
/// These are reported back to the caller; they never take the service down.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The requested college identifier is not in the curriculum map
    #[error("unknown college: '{0}'")]
    UnknownCollege(String),

    /// A course identifier in the request is not in the catalog
    #[error("unknown course: '{0}'")]
    UnknownCourse(String),
}

/// Failures of the external text-generation call
///
/// Narration errors are caught at the narrator boundary; callers degrade to
/// the heuristic narrator and never surface these to the schedule contract.
#[derive(Debug, Error)]
pub enum NarrationError {
    /// The service was unreachable, timed out, or returned an error status
    #[error("text generation service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The service replied, but the reply could not be parsed
    #[error("unparseable narration response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for NarrationError {
    fn from(err: reqwest::Error) -> Self {
        Self::ServiceUnavailable(err.to_string())
    }
}
