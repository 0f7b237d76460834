//! Graph-construction error type.

use thiserror::Error;

/// Errors produced while building or loading a `TravelGraph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("location {0:?} is defined more than once")]
    DuplicateLocation(String),

    #[error("location {0:?} not found in graph")]
    UnknownLocation(String),

    #[error("connection {u:?} - {v:?} is defined more than once")]
    DuplicateConnection { u: String, v: String },

    #[error("connection from {0:?} to itself")]
    SelfLoop(String),

    #[error("connection {u:?} - {v:?} has invalid distance {distance}")]
    InvalidDistance { u: String, v: String, distance: f64 },

    #[error("connection {u:?} - {v:?} exceeds the connection id range")]
    TooManyConnections { u: String, v: String },

    #[error("location {label:?} is invalid: {reason}")]
    InvalidLocation { label: String, reason: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
