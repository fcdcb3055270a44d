//! The `RouteProvider` trait — the narrow seam between the locomotion core
//! and the externally owned route graph.
//!
//! The core reads and writes graph state exclusively through this trait, so
//! the owning engine can apply its own locking or snapshot discipline.  All
//! distance queries return non-negative distances to real positions; whether
//! a neighbor's position is from this tick or the previous one depends on
//! scheduler order and is deliberately unspecified.

use mm_core::{EdgeId, GeoPoint, SignalId, VehicleId};

use crate::{RouteError, RouteResult};

/// Sentinel "no obstruction within perception range" distance.
pub const UNOBSTRUCTED: f64 = f64::INFINITY;

/// A vehicle (or other blocking entity) ahead on the same edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Obstruction {
    /// Gap from the querying vehicle to the obstruction, metres, `>= 0`.
    pub distance_m: f64,
    /// Current speed of the obstruction in m/s (0 for static blockers).
    pub speed_mps: f64,
}

/// Geographic pose derived from a position along an edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    pub position: GeoPoint,
    /// Bearing along the edge direction, radians clockwise from north.
    pub bearing_rad: f64,
}

/// Result of advancing along a single edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeAdvance {
    /// New offset on the same edge, metres.  Equals the edge length when the
    /// advance reached (or overran) the edge end.
    pub offset_m: f64,
    /// Distance left over after reaching the edge end; `0.0` if the advance
    /// stayed on the edge.
    pub overrun_m: f64,
    /// `true` when the edge end was reached.
    pub completed: bool,
}

/// Read/write access to the shared route-graph state.
///
/// Implemented by [`RouteGraph`][crate::RouteGraph] for tests and small
/// embeddings; production engines implement it over their own spatial graph.
pub trait RouteProvider {
    /// Length of `edge` in metres.
    fn edge_length(&self, edge: EdgeId) -> RouteResult<f64>;

    /// Speed limit on `edge` in m/s.
    fn edge_speed_limit(&self, edge: EdgeId) -> RouteResult<f64>;

    /// The traffic signal guarding the end node of `edge`, if any.
    fn signal_at_edge_end(&self, edge: EdgeId) -> RouteResult<Option<SignalId>>;

    /// Nearest vehicle ahead of `offset_m` on `edge`, excluding `exclude`
    /// (the querying vehicle itself).  `None` when the edge is clear ahead.
    fn vehicle_ahead(
        &self,
        edge: EdgeId,
        offset_m: f64,
        exclude: VehicleId,
    ) -> RouteResult<Option<Obstruction>>;

    /// Geographic position and bearing at `offset_m` along `edge`.
    fn locate(&self, edge: EdgeId, offset_m: f64) -> RouteResult<Pose>;

    /// Record a vehicle's new position so car-following queries can see it.
    fn record_position(
        &mut self,
        vehicle: VehicleId,
        edge: EdgeId,
        offset_m: f64,
        speed_mps: f64,
    ) -> RouteResult<()>;

    /// Remove a vehicle from the occupancy state (trip finished or vehicle
    /// despawned).  Unknown vehicles are a no-op.
    fn clear_position(&mut self, vehicle: VehicleId) -> RouteResult<()>;

    /// Advance `distance_m` from `offset_m` along `edge`.
    ///
    /// Default implementation derives the result from [`edge_length`]
    /// (`Self::edge_length`); providers with richer geometry may override.
    fn advance_on_edge(
        &self,
        edge: EdgeId,
        offset_m: f64,
        distance_m: f64,
    ) -> RouteResult<EdgeAdvance> {
        if distance_m < 0.0 {
            return Err(RouteError::Unavailable(format!(
                "negative advance distance {distance_m} on {edge}"
            )));
        }
        let length = self.edge_length(edge)?;
        let remaining = (length - offset_m).max(0.0);
        if distance_m < remaining {
            Ok(EdgeAdvance {
                offset_m: offset_m + distance_m,
                overrun_m: 0.0,
                completed: false,
            })
        } else {
            Ok(EdgeAdvance {
                offset_m: length,
                overrun_m: distance_m - remaining,
                completed: true,
            })
        }
    }
}
