//! Error types for the leavemax-windows crate.

/// Error type for all fallible operations in the leavemax-windows crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// Returned when a leave budget is negative.
    #[error("invalid leave budget: {budget} (must be >= 0)")]
    InvalidBudget {
        /// The rejected budget.
        budget: i64,
    },

    /// Returned when post-ranking selection parameters are inconsistent.
    #[error("invalid selection: {reason}")]
    InvalidSelection {
        /// Description of the problem.
        reason: String,
    },
}
