use crate::entity::EntityKind;

/// Alias for `Result<T, RkError>`.
pub type RkResult<T> = Result<T, RkError>;

/// Errors raised when querying a world by name or id.
///
/// Loading never produces these; they surface from lookups that a caller
/// explicitly asked to be strict about.
#[derive(Debug, thiserror::Error)]
pub enum RkError {
    /// A kind name did not match any of the eight entity kinds.
    #[error("unknown entity kind: \"{0}\"")]
    UnknownKind(String),

    /// No entity of the given kind carries the requested id.
    #[error("{kind} \"{id}\" not found")]
    NotFound {
        /// The kind that was searched.
        kind: EntityKind,
        /// The id that had no match.
        id: String,
    },
}
