use thiserror::Error;

/// Errors surfaced by the public API.
///
/// Internal invariant violations (a group merged into itself, a bucket
/// pointing at a retired group) are code defects, not input conditions, and
/// panic instead of returning a variant here.
#[derive(Debug, Error)]
pub enum SimError {
    /// The input cannot describe a circuit: zero dimensions or a cell buffer
    /// that does not match them.
    #[error("invalid input grid: {0}")]
    InvalidInput(String),

    /// The loop search ran past the caller-imposed tick budget.
    #[error("cycle search exceeded the {0}-tick budget")]
    ExceededBudget(u64),
}
