//! Error types shared by all graph representations

use thiserror::Error;

use crate::node::*;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid argument: vertex {vertex} is not in 0..{num_vertices}")]
    InvalidVertex {
        vertex: Vertex,
        num_vertices: NumVertices,
    },

    #[error("invalid argument: vertices {v} and {w} are both not in 0..{num_vertices}")]
    InvalidVertices {
        v: Vertex,
        w: Vertex,
        num_vertices: NumVertices,
    },

    #[error("malformed input: cannot parse {what}: {reason}")]
    MalformedInput { what: String, reason: String },

    #[error("number of edges was already set")]
    EdgeCountFrozen,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn malformed<S: Into<String>, R: ToString>(what: S, reason: R) -> Self {
        GraphError::MalformedInput {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns *true* if the error stems from an out-of-range vertex
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GraphError::InvalidVertex { .. } | GraphError::InvalidVertices { .. }
        )
    }

    /// Returns *true* if the error stems from an unreadable stream
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, GraphError::MalformedInput { .. } | GraphError::Io(_))
    }
}
