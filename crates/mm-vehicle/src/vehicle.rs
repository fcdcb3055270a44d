//! The concrete vehicle type.

use mm_core::{GeoPoint, Modality, PersonId, Tick, VehicleId};
use mm_route::{Route, RoutePosition, RouteProvider};
use mm_signal::SignalLayer;
use mm_steering::{
    BoardingError, DriverSeat, MoveOutcome, PassengerCapable, PassengerEvent, PassengerHandle,
    PassengerSet, SteeringCapable, SteeringHandle, SteeringResult, VehicleAccelerator,
};

use crate::params::VehicleParams;

/// One vehicle of any modality.
///
/// Owns its kinematic state, occupancy, and current route leg.  Movement and
/// boarding rules live in the `mm-steering` handles; [`tick`](Self::tick)
/// runs one step of both.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: VehicleId,
    modality: Modality,
    params: VehicleParams,
    position: GeoPoint,
    bearing_rad: f64,
    velocity_mps: f64,
    driver: DriverSeat,
    passengers: PassengerSet,
    route: Option<Route>,
    route_pos: RoutePosition,
    /// The current leg ends the line: occupants get `TerminalStation`
    /// instead of `GoalReached` when it is finished.
    terminal_leg: bool,
}

impl Vehicle {
    pub fn new(id: VehicleId, modality: Modality) -> Self {
        Self::with_params(id, modality, VehicleParams::for_modality(modality))
    }

    pub fn with_params(id: VehicleId, modality: Modality, params: VehicleParams) -> Self {
        Self {
            id,
            modality,
            params,
            position: GeoPoint::new(0.0, 0.0),
            bearing_rad: 0.0,
            velocity_mps: 0.0,
            driver: DriverSeat::Unoccupied,
            passengers: PassengerSet::default(),
            route: None,
            route_pos: RoutePosition::START,
            terminal_leg: false,
        }
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn params(&self) -> &VehicleParams {
        &self.params
    }

    pub fn is_terminal_leg(&self) -> bool {
        self.terminal_leg
    }

    /// Place the vehicle at a starting pose (spawn or teleport between legs).
    pub fn place(&mut self, position: GeoPoint, bearing_rad: f64) {
        self.position = position;
        self.bearing_rad = bearing_rad;
        self.velocity_mps = 0.0;
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Assign a new route leg, rewinding to its start.  More legs follow.
    pub fn assign_route(&mut self, route: Route) {
        self.route = Some(route);
        self.route_pos = RoutePosition::START;
        self.terminal_leg = false;
    }

    /// Assign the final leg of a line; finishing it is a terminal arrival.
    pub fn assign_terminal_route(&mut self, route: Route) {
        self.assign_route(route);
        self.terminal_leg = true;
    }

    pub fn clear_route(&mut self) {
        self.route = None;
        self.route_pos = RoutePosition::START;
        self.terminal_leg = false;
    }

    // ── Entrance ──────────────────────────────────────────────────────────

    /// Try to put `person` in the driver seat.
    pub fn try_enter_driver(&mut self, person: PersonId) -> Result<(), BoardingError> {
        PassengerHandle::new().seat_driver(self, person)
    }

    /// Try to seat `person` as a passenger.
    pub fn try_enter_passenger(
        &mut self,
        person: PersonId,
        tick: Tick,
    ) -> Result<(), BoardingError> {
        PassengerHandle::new().board(self, person, tick)
    }

    /// `person` leaves the driver seat; remaining passengers are told.
    pub fn leave_driver(&mut self, person: PersonId) -> Vec<PassengerEvent> {
        PassengerHandle::new().leave_as_driver(self, person)
    }

    /// `person` leaves their passenger seat.
    pub fn leave_passenger(&mut self, person: PersonId) -> bool {
        PassengerHandle::new().alight(self, person)
    }

    // ── Per-tick step ─────────────────────────────────────────────────────

    /// Move one tick and, if the leg finished, notify and unload occupants.
    pub fn tick<A, P>(
        &mut self,
        steering: &SteeringHandle<A>,
        provider: &mut P,
        signals: &SignalLayer,
    ) -> SteeringResult<(MoveOutcome, Vec<PassengerEvent>)>
    where
        A: VehicleAccelerator,
        P: RouteProvider + ?Sized,
    {
        let outcome = steering.move_tick(self, provider, signals)?;
        let events = if outcome == MoveOutcome::GoalReached {
            log::debug!("{} finished its leg (terminal: {})", self.id, self.terminal_leg);
            let pax = PassengerHandle::new();
            if self.terminal_leg {
                pax.terminal_reached(self)
            } else {
                pax.goal_reached(self)
            }
        } else {
            Vec::new()
        };
        Ok((outcome, events))
    }
}

// ── Capability wiring ─────────────────────────────────────────────────────────

impl PassengerCapable for Vehicle {
    fn vehicle_id(&self) -> VehicleId {
        self.id
    }

    fn passenger_capacity(&self) -> usize {
        self.params.passenger_capacity
    }

    fn passengers(&self) -> &PassengerSet {
        &self.passengers
    }

    fn passengers_mut(&mut self) -> &mut PassengerSet {
        &mut self.passengers
    }

    fn driver(&self) -> DriverSeat {
        self.driver
    }

    fn set_driver(&mut self, seat: DriverSeat) {
        self.driver = seat;
    }
}

impl SteeringCapable for Vehicle {
    fn position(&self) -> GeoPoint {
        self.position
    }

    fn set_position(&mut self, position: GeoPoint) {
        self.position = position;
    }

    fn bearing_rad(&self) -> f64 {
        self.bearing_rad
    }

    fn set_bearing_rad(&mut self, bearing: f64) {
        self.bearing_rad = bearing;
    }

    fn velocity_mps(&self) -> f64 {
        self.velocity_mps
    }

    fn set_velocity_mps(&mut self, velocity: f64) {
        self.velocity_mps = velocity;
    }

    fn max_speed_mps(&self) -> f64 {
        self.params.max_speed_mps
    }

    fn max_deceleration(&self) -> f64 {
        self.params.max_deceleration
    }

    fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    fn route_position(&self) -> RoutePosition {
        self.route_pos
    }

    fn set_route_position(&mut self, pos: RoutePosition) {
        self.route_pos = pos;
    }
}
