/// Convenience result type used across flowview.
pub type FlowResult<T> = Result<T, FlowError>;

/// Top-level error taxonomy used at the host-collaborator boundary.
///
/// Nothing in this taxonomy ever reaches the embedding host as an error from
/// the widget facade; failures are absorbed into a stopped rotation plus a
/// diagnostic log. The type exists so host collaborators can report
/// synchronous failures from [`crate::FlowHost`] hooks.
#[derive(thiserror::Error, Debug)]
pub enum FlowError {
    /// Invalid input reported by a host collaborator, e.g. a frame
    /// reference its loader cannot accept. The widget itself rejects bad
    /// configuration values in place (logged, not raised).
    #[error("validation error: {0}")]
    Validation(String),

    /// A failure while setting up a single rotation tick.
    #[error("tick error: {0}")]
    Tick(String),

    /// Wrapped lower-level error from the host collaborator.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlowError {
    /// Build a [`FlowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlowError::Tick`] value.
    pub fn tick(msg: impl Into<String>) -> Self {
        Self::Tick(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
