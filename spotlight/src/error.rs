//! Error types

use thiserror::Error;

/// Error raised by a [`Dom`](crate::dom::Dom) operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// No element with this id exists in the document.
    #[error("Element '{0}' not found")]
    NotFound(String),
}

impl DomError {
    /// Creates a new not-found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }
}

/// Errors that can occur when mounting a spotlight onto a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MountError {
    /// The toggle control is required.
    #[error("Toggle control '{0}' not found")]
    MissingControl(String),

    /// The collapsible content region is required.
    #[error("Content region '{0}' not found")]
    MissingContent(String),

    /// The body element carries the scroll compensation transform.
    #[error("Body element '{0}' not found")]
    MissingBody(String),

    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A DOM operation failed while seeding the initial state.
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Errors produced while loading or validating a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The JSON could not be parsed.
    #[error("Invalid config: {0}")]
    Parse(String),

    /// A numeric setting is out of range.
    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: &'static str, value: f64 },

    /// An element id or class name is empty.
    #[error("'{0}' must not be empty")]
    Empty(&'static str),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
