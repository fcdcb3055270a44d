//! Boarding, alighting, and end-of-trip notification.

use mm_core::{PersonId, Tick};

use crate::capable::{DriverSeat, PassengerCapable};
use crate::error::BoardingError;
use crate::message::{PassengerEvent, PassengerMessage};

/// Manages who is on board a [`PassengerCapable`] vehicle.
///
/// Stateless, like [`SteeringHandle`][crate::SteeringHandle]: one instance
/// serves any number of vehicles.  Notification methods return the events
/// to deliver rather than delivering them, so the engine decides how agent
/// messaging works.  Event order is deterministic: the driver first, then
/// passengers in ascending id order.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassengerHandle;

impl PassengerHandle {
    pub fn new() -> Self {
        Self
    }

    /// Seat `person` as a passenger.
    ///
    /// Refused when they are already on board (either seat) or when all
    /// passenger seats are taken; the driver seat does not count against
    /// capacity.
    pub fn board<V: PassengerCapable>(
        &self,
        vehicle: &mut V,
        person: PersonId,
        tick: Tick,
    ) -> Result<(), BoardingError> {
        if vehicle.driver() == DriverSeat::DrivenBy(person)
            || vehicle.passengers().contains_key(&person)
        {
            return Err(BoardingError::AlreadyBoarded);
        }
        if vehicle.passengers().len() >= vehicle.passenger_capacity() {
            return Err(BoardingError::NoCapacity);
        }
        vehicle.passengers_mut().insert(person, tick);
        Ok(())
    }

    /// Seat `person` in the driver seat.
    ///
    /// A seated passenger may take the wheel; their passenger seat is freed.
    pub fn seat_driver<V: PassengerCapable>(
        &self,
        vehicle: &mut V,
        person: PersonId,
    ) -> Result<(), BoardingError> {
        match vehicle.driver() {
            DriverSeat::DrivenBy(p) if p == person => Err(BoardingError::AlreadyBoarded),
            DriverSeat::DrivenBy(_) => Err(BoardingError::SeatTaken),
            DriverSeat::Unoccupied => {
                vehicle.passengers_mut().remove(&person);
                vehicle.set_driver(DriverSeat::DrivenBy(person));
                Ok(())
            }
        }
    }

    /// Remove `person` from their passenger seat.  A no-op if they are not
    /// seated; returns whether a seat was actually freed.
    pub fn alight<V: PassengerCapable>(&self, vehicle: &mut V, person: PersonId) -> bool {
        vehicle.passengers_mut().remove(&person).is_some()
    }

    /// `person` leaves the driver seat.
    ///
    /// Remaining passengers are told [`PassengerMessage::NoDriver`] and stay
    /// seated.  A no-op with no events if `person` is not the driver.
    pub fn leave_as_driver<V: PassengerCapable>(
        &self,
        vehicle: &mut V,
        person: PersonId,
    ) -> Vec<PassengerEvent> {
        if vehicle.driver() != DriverSeat::DrivenBy(person) {
            log::debug!("{} is not driving {}", person, vehicle.vehicle_id());
            return Vec::new();
        }
        vehicle.set_driver(DriverSeat::Unoccupied);
        let mut seated: Vec<PersonId> = vehicle.passengers().keys().copied().collect();
        seated.sort_unstable();
        seated
            .into_iter()
            .map(|p| PassengerEvent { person: p, message: PassengerMessage::NoDriver })
            .collect()
    }

    /// The trip goal was reached: notify everyone and empty the vehicle.
    pub fn goal_reached<V: PassengerCapable>(&self, vehicle: &mut V) -> Vec<PassengerEvent> {
        self.disembark_all(vehicle, PassengerMessage::GoalReached)
    }

    /// A scheduled vehicle reached its terminal: notify everyone and empty
    /// the vehicle.
    pub fn terminal_reached<V: PassengerCapable>(&self, vehicle: &mut V) -> Vec<PassengerEvent> {
        self.disembark_all(vehicle, PassengerMessage::TerminalStation)
    }

    fn disembark_all<V: PassengerCapable>(
        &self,
        vehicle: &mut V,
        message: PassengerMessage,
    ) -> Vec<PassengerEvent> {
        let mut events = Vec::with_capacity(vehicle.passengers().len() + 1);
        if let Some(driver) = vehicle.driver().person() {
            events.push(PassengerEvent { person: driver, message });
        }
        let mut seated: Vec<PersonId> = vehicle.passengers().keys().copied().collect();
        seated.sort_unstable();
        events.extend(seated.into_iter().map(|p| PassengerEvent { person: p, message }));
        vehicle.set_driver(DriverSeat::Unoccupied);
        vehicle.passengers_mut().clear();
        events
    }
}
