//! Precondition failures in code that builds validation errors.

use thiserror::Error;

/// A bug at the call site, not bad end-user input.
///
/// Returned instead of a message when the inputs to the engine are
/// malformed. Fix the caller; do not catch and retry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// An expected-descriptor list contained a non-string entry.
    #[error("All expected entries have to be of type ‘string’ (entry {index} is of type ‘{type_of}’)")]
    NonStringDescriptor { index: usize, type_of: &'static str },

    /// A missing-arguments error was built without any argument names.
    #[error("At least one argument needs to be specified")]
    NoMissingArgs,
}
