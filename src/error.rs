//! Error types for the invdex library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`InvdexError`] enum. Only failures that abort a run travel through this
//! type: a document that cannot be opened or an output file that cannot be
//! created is logged and counted, never returned.
//!
//! # Examples
//!
//! ```
//! use invdex::error::{InvdexError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(InvdexError::invalid_config("map worker count must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for invdex operations.
#[derive(Error, Debug)]
pub enum InvdexError {
    /// I/O errors (manifest, documents, output files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A worker thread could not be started
    #[error("Thread spawn error: {0}")]
    ThreadSpawn(String),

    /// A worker thread could not be joined
    #[error("Thread join error: {0}")]
    ThreadJoin(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with InvdexError.
pub type Result<T> = std::result::Result<T, InvdexError>;

impl InvdexError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        InvdexError::Config(msg.into())
    }

    /// Create a new thread spawn error.
    pub fn thread_spawn<S: Into<String>>(msg: S) -> Self {
        InvdexError::ThreadSpawn(msg.into())
    }

    /// Create a new thread join error.
    pub fn thread_join<S: Into<String>>(msg: S) -> Self {
        InvdexError::ThreadJoin(msg.into())
    }
}
