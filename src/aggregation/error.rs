use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    /// An aggregate takes its system from the first action.
    #[error("cannot build an aggregate without actions")]
    EmptyActions,

    #[error("action '{action_id}' has no system in its detail")]
    MissingSystem { action_id: String },
}
