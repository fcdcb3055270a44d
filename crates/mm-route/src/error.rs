use mm_core::EdgeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    /// An edge referenced by a route is not present in the provider's graph.
    #[error("edge {0} not found in route graph")]
    UnknownEdge(EdgeId),

    /// The external provider could not answer a lookup.  Surfaced to the
    /// caller; whether the tick is retried is scheduler policy.
    #[error("route provider unavailable: {0}")]
    Unavailable(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
