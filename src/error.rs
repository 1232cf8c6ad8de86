//! Error types for the generation pipeline.
//!
//! Every failure inside the pipeline (type resolution, field parsing, template
//! loading and rendering) surfaces as a single [`PlasterError`] whose
//! [`ErrorCause`] says what went wrong. Nothing is rendered once an error has
//! been raised, so callers never observe partial output.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the pipeline.
pub type Result<T, E = PlasterError> = std::result::Result<T, E>;

/// The single error kind returned by the generator.
#[derive(Debug, Error)]
#[error("generation failed: {cause}")]
pub struct PlasterError {
    cause: ErrorCause,
}

impl PlasterError {
    /// The underlying reason the generation was abandoned.
    pub fn cause(&self) -> &ErrorCause {
        &self.cause
    }

    pub fn into_cause(self) -> ErrorCause {
        self.cause
    }
}

impl From<ErrorCause> for PlasterError {
    fn from(cause: ErrorCause) -> Self {
        Self { cause }
    }
}

/// Why a generation run failed.
#[derive(Debug, Error)]
pub enum ErrorCause {
    /// More than one class matched a custom type name.
    #[error(
        "type '{name}' is ambiguous, found {} candidates: {}",
        .candidates.len(),
        .candidates.join(", ")
    )]
    DependencyAmbiguous {
        name: String,
        candidates: Vec<String>,
    },

    /// No class matched a custom type name.
    #[error("type '{name}' could not be found")]
    DependencyNotFound { name: String },

    /// The type declaration could not be parsed.
    #[error("malformed type declaration '{declaration}': {reason}")]
    InvalidType { declaration: String, reason: String },

    /// A `name:Type` field specification could not be parsed.
    #[error("malformed field '{spec}': {reason}")]
    InvalidField { spec: String, reason: String },

    /// The entity name cannot form a Java class name.
    #[error("malformed class name '{name}': {reason}")]
    InvalidClassName { name: String, reason: String },

    /// No template is registered under the logical path, or its override file
    /// could not be read.
    #[error("template '{path}' is missing or unreadable: {reason}")]
    TemplateMissing { path: String, reason: String },

    /// The template engine rejected the template or the model.
    #[error("template '{path}' failed to render: {source}")]
    Render {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    /// Walking a source root for class files failed.
    #[error("class search under {} failed: {source}", .root.display())]
    Search {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
