use matchx_schema::EntityKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The requested item kind has zero items. Reported per kind; the rest
    /// of the batch keeps running with an empty list for that kind.
    #[error("no {0} items in the catalog")]
    EmptyCatalog(EntityKind),

    /// The requested user id is absent from the fitted vector space.
    /// Reported per user; does not abort the batch.
    #[error("unknown user: {0}")]
    UnknownUser(String),
}
