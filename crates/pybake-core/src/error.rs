//! Unified error types for pybake.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while baking, cleaning up, or verifying a project.
#[derive(Error, Debug)]
pub enum BakeError {
    // --- Configuration ---

    /// The answers file passed with `--config` was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The answers file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration could not be serialized into an answers file.
    #[error("failed to write config to {path}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An override names an unknown option or carries a value the option cannot take.
    #[error("invalid value for option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },

    /// The project directory name cannot be split into `<namespace>.<package>`.
    #[error("invalid project slug '{0}' (expected <namespace>.<package>)")]
    InvalidSlug(String),

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Project ---

    /// Attempted to bake a project into a directory that already exists.
    #[error("project directory already exists: {0}")]
    ProjectExists(PathBuf),

    // --- Test commands ---

    /// The generated project's test runner (e.g., `pytest`, `make`) is not installed.
    #[error("required tool '{name}' not found — install: {install}")]
    MissingTool { name: String, install: String },

    /// The generated project's test command exited with a non-zero status.
    #[error("test command `{command}` failed with {status}")]
    TestCommandFailed { command: String, status: String },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, BakeError>`.
pub type Result<T> = std::result::Result<T, BakeError>;
