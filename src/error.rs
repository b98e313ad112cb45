//! Error types for the clex lexical analyzer
//!
//! Only the collaborator boundary (loading source text) can fail. The
//! scanner itself has no failure outcome: every byte of input maps to
//! whitespace, comment text, or a token, and lexical anomalies such as
//! unterminated strings are recovered locally.

use thiserror::Error;

/// Errors surfaced by the reporting layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Source file could not be opened or read
    ///
    /// **Triggered by:** missing file, permission problems, non-UTF-8 content
    /// **Recovery:** none; the run aborts without invoking the scanner
    #[error("could not read source file {path}: {source}")]
    Io {
        /// Path of the file that failed to load
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for clex operations
pub type Result<T> = std::result::Result<T, Error>;
