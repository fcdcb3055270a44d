use mm_route::RouteError;
use thiserror::Error;

/// Fatal steering failures.  Missing routes and missing drivers are not
/// errors; they come back as [`MoveOutcome`][crate::MoveOutcome] variants.
#[derive(Debug, Error)]
pub enum SteeringError {
    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type SteeringResult<T> = Result<T, SteeringError>;

/// Why a boarding attempt was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardingError {
    /// The person is already on board, as driver or passenger.
    #[error("person is already on board")]
    AlreadyBoarded,

    /// Every passenger seat is taken.
    #[error("no passenger capacity left")]
    NoCapacity,

    /// Someone else already holds the driver seat.
    #[error("driver seat is taken")]
    SeatTaken,
}
