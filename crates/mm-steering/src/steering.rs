//! Per-tick movement of a vehicle along its route.

use mm_route::{RoutePosition, RouteProvider, UNOBSTRUCTED};
use mm_signal::{LightPhase, SignalLayer};

use crate::accelerate::{SafeBrakingAccelerator, VehicleAccelerator};
use crate::capable::SteeringCapable;
use crate::error::SteeringResult;

/// What a call to [`SteeringHandle::move_tick`] did with the vehicle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Moved (or held at an obstruction) somewhere mid-route.
    Advanced,
    /// The last edge end was reached this tick.  The vehicle is stopped at
    /// the goal and removed from the occupancy index.
    GoalReached,
    /// Already past the end of the route; nothing to do.
    Idle,
    /// No route, or an empty one.  The vehicle stays parked.
    ParkedNoRoute,
    /// Nobody in the driver seat; the vehicle is held in place.
    HeldNoDriver,
}

/// Moves any [`SteeringCapable`] vehicle along its route, one tick at a time.
///
/// The handle is stateless between calls; everything it needs lives on the
/// vehicle, the route provider and the signal layer.  One handle instance
/// can therefore serve every vehicle sharing an acceleration model.
#[derive(Debug, Clone)]
pub struct SteeringHandle<A: VehicleAccelerator = SafeBrakingAccelerator> {
    accelerator: A,
    tick_duration_secs: f64,
}

impl Default for SteeringHandle {
    fn default() -> Self {
        Self::new(SafeBrakingAccelerator::default(), 1.0)
    }
}

impl<A: VehicleAccelerator> SteeringHandle<A> {
    pub fn new(accelerator: A, tick_duration_secs: f64) -> Self {
        Self { accelerator, tick_duration_secs }
    }

    pub fn accelerator(&self) -> &A {
        &self.accelerator
    }

    /// Advance `vehicle` by one tick.
    ///
    /// Perceives the nearest obstruction on the current edge (lead vehicle,
    /// or the edge-end signal when it is not open), asks the accelerator for
    /// a speed change, then advances the new speed's worth of distance along
    /// the route, consuming as many edges as it covers.  An edge end whose
    /// signal shows red is never crossed; the vehicle holds exactly at the
    /// boundary.  Reaching the end of the last edge stops the vehicle and
    /// reports [`MoveOutcome::GoalReached`].
    pub fn move_tick<V, P>(
        &self,
        vehicle: &mut V,
        provider: &mut P,
        signals: &SignalLayer,
    ) -> SteeringResult<MoveOutcome>
    where
        V: SteeringCapable,
        P: RouteProvider + ?Sized,
    {
        let id = vehicle.vehicle_id();
        let route = match vehicle.route() {
            Some(r) if !r.is_empty() => r.clone(),
            _ => {
                log::debug!("{id} has no route to move on");
                return Ok(MoveOutcome::ParkedNoRoute);
            }
        };
        let pos = vehicle.route_position();
        if pos.past_end_of(&route) {
            return Ok(MoveOutcome::Idle);
        }
        if !vehicle.driver().is_occupied() {
            log::debug!("{id} has no driver; holding");
            vehicle.set_velocity_mps(0.0);
            provider.record_position(id, route.edge(pos.edge_index), pos.offset_m, 0.0)?;
            return Ok(MoveOutcome::HeldNoDriver);
        }

        // ── Perception ────────────────────────────────────────────────────
        let edge = route.edge(pos.edge_index);
        let edge_len = provider.edge_length(edge)?;
        let remaining = (edge_len - pos.offset_m).max(0.0);
        let speed = vehicle.velocity_mps();

        let mut gap = UNOBSTRUCTED;
        let mut lead_speed = 0.0;
        if let Some(obs) = provider.vehicle_ahead(edge, pos.offset_m, id)? {
            gap = obs.distance_m;
            lead_speed = obs.speed_mps;
        }
        // The signal at the edge end acts as a standing obstruction when it
        // blocks.  A yellow light blocks only if the vehicle can still brake
        // to a stop within the remaining distance.
        if pos.edge_index + 1 < route.len()
            && let Some(sig) = provider.signal_at_edge_end(edge)?
        {
            let blocks = match signals.phase(sig) {
                LightPhase::Red => true,
                LightPhase::Yellow => {
                    let required = if remaining > 0.0 {
                        speed * speed / (2.0 * remaining)
                    } else {
                        f64::INFINITY
                    };
                    required <= vehicle.max_deceleration()
                }
                LightPhase::Green | LightPhase::None => false,
            };
            if blocks && remaining < gap {
                gap = remaining;
                lead_speed = 0.0;
            }
        }

        // ── Acceleration ──────────────────────────────────────────────────
        let limit = vehicle.max_speed_mps().min(provider.edge_speed_limit(edge)?);
        let delta = self
            .accelerator
            .calculate_speed_change(speed, limit, gap, lead_speed);
        let new_speed = (speed + delta).clamp(0.0, limit);
        vehicle.set_velocity_mps(new_speed);

        // ── Advance ───────────────────────────────────────────────────────
        let mut idx = pos.edge_index;
        let mut offset = pos.offset_m;
        let mut dist = new_speed * self.tick_duration_secs;
        let mut at_goal = false;
        loop {
            let edge = route.edge(idx);
            let adv = provider.advance_on_edge(edge, offset, dist)?;
            offset = adv.offset_m;
            dist = adv.overrun_m;
            if !adv.completed {
                break;
            }
            if idx + 1 >= route.len() {
                at_goal = true;
                break;
            }
            // Hold at the boundary if the crossing signal shows red.
            if let Some(sig) = provider.signal_at_edge_end(edge)?
                && signals.phase(sig) == LightPhase::Red
            {
                break;
            }
            idx += 1;
            offset = 0.0;
            if dist <= 0.0 {
                break;
            }
        }

        // ── Write-back ────────────────────────────────────────────────────
        if at_goal {
            let last = route.edge(route.len() - 1);
            let pose = provider.locate(last, provider.edge_length(last)?)?;
            vehicle.set_position(pose.position);
            vehicle.set_bearing_rad(pose.bearing_rad);
            vehicle.set_velocity_mps(0.0);
            vehicle.set_route_position(RoutePosition::new(route.len(), 0.0));
            provider.clear_position(id)?;
            return Ok(MoveOutcome::GoalReached);
        }
        let edge = route.edge(idx);
        let pose = provider.locate(edge, offset)?;
        vehicle.set_position(pose.position);
        vehicle.set_bearing_rad(pose.bearing_rad);
        vehicle.set_route_position(RoutePosition::new(idx, offset));
        provider.record_position(id, edge, offset, new_speed)?;
        Ok(MoveOutcome::Advanced)
    }
}
