//! Messages delivered to people on board a vehicle.

use mm_core::PersonId;

/// What a vehicle tells an occupant about the state of the trip.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassengerMessage {
    /// The route is fully traversed; occupants should disembark here.
    GoalReached,
    /// The driver left; remaining passengers are stranded until someone
    /// takes the seat.
    NoDriver,
    /// A scheduled vehicle reached the end of its line.
    TerminalStation,
}

/// A message addressed to one occupant.  The embedding engine routes these
/// to its agent implementation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerEvent {
    pub person: PersonId,
    pub message: PassengerMessage,
}
