//! Fault conditions surfaced by the engine (§7).

use std::fmt;

use crate::node::{Level, NodeId};

/// Errors the engine can return. None of these are recoverable in place; the
/// engine is purely functional over its inputs, so the response to any of
/// these is to abort the operation and let the caller decide what to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// An identifier that is neither a terminal nor present in the node store,
    /// e.g. one handed back from a manager after a `clear` that dropped it.
    UnknownId(NodeId),
    /// `cofactor`/`make` was asked to restrict on a variable at or below the
    /// level of the node it was given. Indicates a caller bug, not bad input.
    OrderingViolation { parent_level: Level, child_level: Level },
    /// `pre_image` was called on a variable registry that does not interleave
    /// unprimed/primed pairs as required by §4.5.
    MalformedPreImage { detail: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownId(id) => {
                write!(f, "node {id} is not a terminal and not present in the store")
            }
            EngineError::OrderingViolation {
                parent_level,
                child_level,
            } => write!(
                f,
                "ordering violation: level {parent_level} is not strictly above child level {child_level}"
            ),
            EngineError::MalformedPreImage { detail } => {
                write!(f, "pre_image requires interleaved primed/unprimed variables: {detail}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
