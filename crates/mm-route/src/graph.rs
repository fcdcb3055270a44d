//! In-memory route graph and builder.
//!
//! `RouteGraph` is the reference [`RouteProvider`]: a plain edge list plus a
//! per-edge occupancy index for car-following queries.  It performs no
//! routing — callers assemble [`Route`]s from the `EdgeId`s the builder
//! hands out, or bring a routing engine of their own.

use rustc_hash::FxHashMap;

use mm_core::{EdgeId, GeoPoint, NodeId, SignalId, VehicleId};

use crate::provider::{Obstruction, Pose, RouteProvider};
use crate::route::{Route, RoutePosition};
use crate::{RouteError, RouteResult};

/// Default speed limit for edges built without an explicit one: 50 km/h.
pub const DEFAULT_SPEED_LIMIT: f64 = 50.0 / 3.6;

// ── RouteGraph ────────────────────────────────────────────────────────────────

struct EdgeRecord {
    from: NodeId,
    to: NodeId,
    length_m: f64,
    speed_limit: f64,
    signal: Option<SignalId>,
}

/// A vehicle's last recorded position on an edge.
#[derive(Debug, Copy, Clone)]
struct VehicleTrace {
    vehicle: VehicleId,
    offset_m: f64,
    speed_mps: f64,
}

/// Directed edge-list graph with node coordinates and vehicle occupancy.
///
/// Do not construct directly; use [`RouteGraphBuilder`].
pub struct RouteGraph {
    node_pos: Vec<GeoPoint>,
    edges: Vec<EdgeRecord>,
    /// Sparse occupancy: only edges with vehicles on them have an entry.
    occupancy: FxHashMap<EdgeId, Vec<VehicleTrace>>,
    /// Reverse index so `record_position` can drop the old trace in O(k).
    edge_of: FxHashMap<VehicleId, EdgeId>,
}

impl RouteGraph {
    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_position(&self, node: NodeId) -> Option<GeoPoint> {
        self.node_pos.get(node.index()).copied()
    }

    /// Total length of `route` in metres.
    pub fn route_length(&self, route: &Route) -> RouteResult<f64> {
        route.edges().iter().try_fold(0.0, |acc, &e| Ok(acc + self.edge_length(e)?))
    }

    /// Metres left between `pos` and the end of `route`.
    pub fn remaining_distance(&self, route: &Route, pos: RoutePosition) -> RouteResult<f64> {
        let mut total = 0.0;
        for (i, &edge) in route.edges().iter().enumerate().skip(pos.edge_index) {
            let len = self.edge_length(edge)?;
            total += if i == pos.edge_index { (len - pos.offset_m).max(0.0) } else { len };
        }
        Ok(total)
    }

    fn record(&self, edge: EdgeId) -> RouteResult<&EdgeRecord> {
        self.edges.get(edge.index()).ok_or(RouteError::UnknownEdge(edge))
    }
}

impl RouteProvider for RouteGraph {
    fn edge_length(&self, edge: EdgeId) -> RouteResult<f64> {
        Ok(self.record(edge)?.length_m)
    }

    fn edge_speed_limit(&self, edge: EdgeId) -> RouteResult<f64> {
        Ok(self.record(edge)?.speed_limit)
    }

    fn signal_at_edge_end(&self, edge: EdgeId) -> RouteResult<Option<SignalId>> {
        Ok(self.record(edge)?.signal)
    }

    fn vehicle_ahead(
        &self,
        edge: EdgeId,
        offset_m: f64,
        exclude: VehicleId,
    ) -> RouteResult<Option<Obstruction>> {
        self.record(edge)?;
        let Some(traces) = self.occupancy.get(&edge) else {
            return Ok(None);
        };
        let ahead = traces
            .iter()
            .filter(|t| t.vehicle != exclude && t.offset_m > offset_m)
            .min_by(|a, b| a.offset_m.total_cmp(&b.offset_m));
        Ok(ahead.map(|t| Obstruction {
            distance_m: t.offset_m - offset_m,
            speed_mps: t.speed_mps,
        }))
    }

    fn locate(&self, edge: EdgeId, offset_m: f64) -> RouteResult<Pose> {
        let rec = self.record(edge)?;
        let from = self.node_pos[rec.from.index()];
        let to = self.node_pos[rec.to.index()];
        let t = if rec.length_m > 0.0 { offset_m / rec.length_m } else { 1.0 };
        Ok(Pose {
            position: from.lerp(to, t),
            bearing_rad: from.bearing_to(to),
        })
    }

    fn record_position(
        &mut self,
        vehicle: VehicleId,
        edge: EdgeId,
        offset_m: f64,
        speed_mps: f64,
    ) -> RouteResult<()> {
        self.record(edge)?;
        match self.edge_of.get(&vehicle).copied() {
            Some(old) if old == edge => {
                let updated = self
                    .occupancy
                    .get_mut(&edge)
                    .and_then(|ts| ts.iter_mut().find(|t| t.vehicle == vehicle))
                    .map(|trace| {
                        trace.offset_m = offset_m;
                        trace.speed_mps = speed_mps;
                    })
                    .is_some();
                // Index and traces drifted apart; re-insert.
                if !updated {
                    self.insert_trace(vehicle, edge, offset_m, speed_mps);
                }
            }
            Some(old) => {
                self.drop_trace(vehicle, old);
                self.insert_trace(vehicle, edge, offset_m, speed_mps);
            }
            None => self.insert_trace(vehicle, edge, offset_m, speed_mps),
        }
        Ok(())
    }

    fn clear_position(&mut self, vehicle: VehicleId) -> RouteResult<()> {
        if let Some(edge) = self.edge_of.remove(&vehicle) {
            if let Some(traces) = self.occupancy.get_mut(&edge) {
                traces.retain(|t| t.vehicle != vehicle);
                if traces.is_empty() {
                    self.occupancy.remove(&edge);
                }
            }
        }
        Ok(())
    }
}

impl RouteGraph {
    fn insert_trace(&mut self, vehicle: VehicleId, edge: EdgeId, offset_m: f64, speed_mps: f64) {
        self.occupancy
            .entry(edge)
            .or_default()
            .push(VehicleTrace { vehicle, offset_m, speed_mps });
        self.edge_of.insert(vehicle, edge);
    }

    fn drop_trace(&mut self, vehicle: VehicleId, edge: EdgeId) {
        if let Some(traces) = self.occupancy.get_mut(&edge) {
            traces.retain(|t| t.vehicle != vehicle);
            if traces.is_empty() {
                self.occupancy.remove(&edge);
            }
        }
    }
}

// ── RouteGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`RouteGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use mm_core::GeoPoint;
/// use mm_route::RouteGraphBuilder;
///
/// let mut b = RouteGraphBuilder::new();
/// let a = b.add_node(GeoPoint::new(53.55, 9.99));
/// let c = b.add_node(GeoPoint::new(53.56, 9.99));
/// let e = b.add_edge(a, c, 1_200.0);
/// let graph = b.build();
/// assert_eq!(graph.edge_count(), 1);
/// # let _ = e;
/// ```
pub struct RouteGraphBuilder {
    nodes: Vec<GeoPoint>,
    edges: Vec<EdgeRecord>,
}

impl RouteGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), edges: Vec::new() }
    }

    /// Add a graph node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a directed edge with the default urban speed limit.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, length_m: f64) -> EdgeId {
        self.add_edge_with_limit(from, to, length_m, DEFAULT_SPEED_LIMIT)
    }

    /// Add a directed edge with an explicit speed limit in m/s.
    ///
    /// # Panics
    /// Panics if `from` or `to` was not returned by
    /// [`add_node`](Self::add_node); every edge of a built graph references
    /// real nodes.
    pub fn add_edge_with_limit(
        &mut self,
        from: NodeId,
        to: NodeId,
        length_m: f64,
        speed_limit: f64,
    ) -> EdgeId {
        assert!(from.index() < self.nodes.len(), "unknown from-node {from}");
        assert!(to.index() < self.nodes.len(), "unknown to-node {to}");
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(EdgeRecord { from, to, length_m, speed_limit, signal: None });
        id
    }

    /// Add a directed edge whose length is measured from the node positions.
    ///
    /// # Panics
    /// Panics if `from` or `to` is not a registered node.
    pub fn add_edge_measured(&mut self, from: NodeId, to: NodeId) -> EdgeId {
        assert!(from.index() < self.nodes.len(), "unknown from-node {from}");
        assert!(to.index() < self.nodes.len(), "unknown to-node {to}");
        let length = self.nodes[from.index()].distance_m(self.nodes[to.index()]);
        self.add_edge(from, to, length)
    }

    /// Attach the traffic signal guarding the end node of `edge`.
    ///
    /// # Panics
    /// Panics if `edge` is not a registered edge.
    pub fn set_signal(&mut self, edge: EdgeId, signal: SignalId) {
        assert!(edge.index() < self.edges.len(), "unknown edge {edge}");
        self.edges[edge.index()].signal = Some(signal);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Consume the builder and produce a [`RouteGraph`] with empty occupancy.
    pub fn build(self) -> RouteGraph {
        RouteGraph {
            node_pos: self.nodes,
            edges: self.edges,
            occupancy: FxHashMap::default(),
            edge_of: FxHashMap::default(),
        }
    }
}

impl Default for RouteGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
