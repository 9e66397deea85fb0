use thiserror::Error;

/// Errors raised while building or checking an export plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("network '{network}' loads weights from '{weights}', but {scope} has no array by that name")]
    MissingWeights {
        network: String,
        weights: String,
        scope: String,
    },

    #[error("'{name}' is declared more than once in {scope}")]
    DuplicateName { name: String, scope: String },

    #[error("expected {expected} weights, got {actual}")]
    WeightCount { expected: usize, actual: usize },
}
