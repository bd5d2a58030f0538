//! Error types for parcours
//!
//! Every engine returns `Result<T, ParcoursError>`. Query failures fall into
//! four kinds:
//! - `VertexNotFound`: a required vertex is not a key of the graph
//! - `NotFound`: the query is well formed but has no answer
//! - `EdgeNotFound`: a path step has no entry in a distance table
//! - `Unreachable`: Dijkstra could not connect source and target

mod macros;

use std::fmt;
use thiserror::Error;

/// Broad category of a [`ParcoursError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A start/end/source/target vertex is not a key of the graph
    VertexNotFound,
    /// Valid query, no answer (no path)
    NotFound,
    /// A consecutive vertex pair has no weight entry
    EdgeNotFound,
    /// Dijkstra target not connected to the source
    Unreachable,
    /// Rejected weight, option or other caller input
    InvalidInput,
    /// Configuration file could not be read, parsed or written
    Config,
}

/// Errors that can occur during parcours operations
#[derive(Error, Debug)]
pub enum ParcoursError {
    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("no path from {from} to {to}")]
    NotFound { from: String, to: String },

    #[error("no distance entry for edge {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("{to} is unreachable from {from}")]
    Unreachable { from: String, to: String },

    #[error("invalid weight {weight} on edge {from} -> {to} (weights must be finite and nonnegative)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl ParcoursError {
    /// Create an error for a vertex that is not a key of the graph
    pub fn vertex_not_found(vertex: impl fmt::Debug) -> Self {
        ParcoursError::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a query with no path between its endpoints
    pub fn not_found(from: impl fmt::Debug, to: impl fmt::Debug) -> Self {
        ParcoursError::NotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for a path step missing from a distance table
    pub fn edge_not_found(from: impl fmt::Debug, to: impl fmt::Debug) -> Self {
        ParcoursError::EdgeNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for an unreachable Dijkstra target
    pub fn unreachable(source: impl fmt::Debug, target: impl fmt::Debug) -> Self {
        ParcoursError::Unreachable {
            from: format!("{:?}", source),
            to: format!("{:?}", target),
        }
    }

    /// Create an error for a rejected edge weight
    pub fn invalid_weight(from: impl fmt::Debug, to: impl fmt::Debug, weight: f64) -> Self {
        ParcoursError::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }

    /// Create an error for an invalid option or configuration value
    pub fn invalid_value(context: &str, value: impl fmt::Display) -> Self {
        ParcoursError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParcoursError::VertexNotFound { .. } => ErrorKind::VertexNotFound,
            ParcoursError::NotFound { .. } => ErrorKind::NotFound,
            ParcoursError::EdgeNotFound { .. } => ErrorKind::EdgeNotFound,
            ParcoursError::Unreachable { .. } => ErrorKind::Unreachable,

            ParcoursError::InvalidWeight { .. } | ParcoursError::InvalidValue { .. } => {
                ErrorKind::InvalidInput
            }

            ParcoursError::Io(_)
            | ParcoursError::Toml(_)
            | ParcoursError::TomlSerialize(_)
            | ParcoursError::Other(_) => ErrorKind::Config,
        }
    }

    /// Get the error type identifier used in log records
    pub fn error_type(&self) -> &'static str {
        match self {
            ParcoursError::VertexNotFound { .. } => "vertex_not_found",
            ParcoursError::NotFound { .. } => "not_found",
            ParcoursError::EdgeNotFound { .. } => "edge_not_found",
            ParcoursError::Unreachable { .. } => "unreachable",
            ParcoursError::InvalidWeight { .. } => "invalid_weight",
            ParcoursError::InvalidValue { .. } => "invalid_value",
            ParcoursError::Io(_) => "io_error",
            ParcoursError::Toml(_) => "toml_error",
            ParcoursError::TomlSerialize(_) => "toml_serialize_error",
            ParcoursError::Other(_) => "other",
        }
    }
}

/// Result type alias for parcours operations
pub type Result<T> = std::result::Result<T, ParcoursError>;
