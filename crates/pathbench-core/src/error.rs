//! Error types for Pathbench Core

use crate::graph::NodeId;
use thiserror::Error;

/// Result type alias using Pathbench Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the shortest-path engine
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors while reading graph files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Node referenced by a query is not part of the graph
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Edge weight that is NaN or infinite
    #[error("Invalid weight {weight} on edge ({from}, {to})")]
    InvalidWeight {
        /// Edge tail
        from: NodeId,
        /// Edge head
        to: NodeId,
        /// Offending weight
        weight: f64,
    },

    /// Negative edge weight given to an algorithm that requires non-negative weights
    #[error("Negative weight {weight} on edge ({from}, {to}) is not allowed for {algorithm}")]
    NegativeWeight {
        /// Algorithm that rejected the graph
        algorithm: &'static str,
        /// Edge tail
        from: NodeId,
        /// Edge head
        to: NodeId,
        /// Offending weight
        weight: f64,
    },

    /// Negative-weight cycle makes shortest distances undefined
    #[error("Negative-weight cycle detected")]
    NegativeCycle,

    /// Algorithm selector that names no known algorithm
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Auxiliary state (predecessors) is corrupted; this is a defect
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),

    /// Malformed input (matrix text, generator parameters, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invariant violation error
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Whether the error signals a defect rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}
