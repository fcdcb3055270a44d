//! Capability traits vehicles implement to participate in locomotion.
//!
//! The handles never own vehicles; they borrow anything implementing these
//! traits for the duration of one operation.  A car, a bicycle, a train and
//! a ferry differ only in their parameter values and in which handles the
//! engine drives them with.

use mm_core::{GeoPoint, PersonId, Tick, VehicleId};
use mm_route::{Route, RoutePosition};
use rustc_hash::FxHashMap;

/// Occupants by id, with the tick they boarded on.
pub type PassengerSet = FxHashMap<PersonId, Tick>;

/// Who, if anyone, holds the driver seat.  The seat is not counted against
/// passenger capacity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DriverSeat {
    #[default]
    Unoccupied,
    DrivenBy(PersonId),
}

impl DriverSeat {
    #[inline]
    pub fn is_occupied(self) -> bool {
        matches!(self, DriverSeat::DrivenBy(_))
    }

    #[inline]
    pub fn person(self) -> Option<PersonId> {
        match self {
            DriverSeat::DrivenBy(p) => Some(p),
            DriverSeat::Unoccupied => None,
        }
    }
}

/// A vehicle that can carry people.
pub trait PassengerCapable {
    fn vehicle_id(&self) -> VehicleId;

    /// Passenger seats, excluding the driver seat.
    fn passenger_capacity(&self) -> usize;

    fn passengers(&self) -> &PassengerSet;
    fn passengers_mut(&mut self) -> &mut PassengerSet;

    fn driver(&self) -> DriverSeat;
    fn set_driver(&mut self, seat: DriverSeat);
}

/// A vehicle that can be moved along a route by a [`SteeringHandle`].
///
/// [`SteeringHandle`]: crate::SteeringHandle
pub trait SteeringCapable: PassengerCapable {
    fn position(&self) -> GeoPoint;
    fn set_position(&mut self, position: GeoPoint);

    /// Heading in radians clockwise from north.
    fn bearing_rad(&self) -> f64;
    fn set_bearing_rad(&mut self, bearing: f64);

    fn velocity_mps(&self) -> f64;
    fn set_velocity_mps(&mut self, velocity: f64);

    /// Hard speed cap of the vehicle itself; edge limits apply on top.
    fn max_speed_mps(&self) -> f64;

    /// Strongest braking the vehicle can apply, m/s².
    fn max_deceleration(&self) -> f64;

    /// The assigned route, if any.  `None` means parked.
    fn route(&self) -> Option<&Route>;

    fn route_position(&self) -> RoutePosition;
    fn set_route_position(&mut self, pos: RoutePosition);
}
