//! # Error Definitions
//!
//! The encodings in [`crate::classic`] and [`crate::generic`] have no runtime
//! errors at all: a language mismatch there is a compile error. Errors only
//! appear once the syntax is reified:
//!
//! - A tree node reaches an algebra that has no operation for its kind
//!   (`DispatchError::Unhandled`)
//! - A transition is linked to a state some other machine owns
//!   (`FsmError::ForeignState`)
//!
//! ## Example Error Messages
//!
//! ```text
//! arithmetic algebra has no operation for node `sub(lit 3, lit 4)`
//! transition `a` of machine `myFsm` links to a state it does not own
//! ```

use thiserror::Error;

/// A reified node could not be routed to an algebra operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The algebra's dispatcher has no arm for the node's kind.
    ///
    /// This is the failure mode the reified encoding cannot rule out
    /// statically: an extended tree has the same type as a base tree.
    #[error("{algebra} algebra has no operation for node `{node}`")]
    Unhandled {
        /// Name of the language the dispatching algebra understands
        algebra: &'static str,
        /// The offending node, in constructor notation
        node: String,
    },
}

impl DispatchError {
    pub fn unhandled(algebra: &'static str, node: impl ToString) -> Self {
        DispatchError::Unhandled {
            algebra,
            node: node.to_string(),
        }
    }
}

/// A machine was asked to hold an ill-formed transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    /// The transition's from or to handle does not point at a state owned
    /// by the machine (it belongs to another machine, or that machine is
    /// gone).
    #[error("transition `{event}` of machine `{machine}` links to a state it does not own")]
    ForeignState {
        /// Name of the machine that rejected the transition
        machine: String,
        /// Event of the rejected transition
        event: String,
    },
}
