//! Unit tests for mm-route.

use mm_core::{EdgeId, GeoPoint, NodeId, SignalId, VehicleId};

use crate::{Route, RouteError, RouteGraph, RouteGraphBuilder, RoutePosition, RouteProvider};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Straight three-edge corridor: n0 → n1 → n2 → n3, 100 m per edge.
fn corridor() -> (RouteGraph, Vec<EdgeId>) {
    let mut b = RouteGraphBuilder::new();
    let nodes: Vec<_> = (0..4)
        .map(|i| b.add_node(GeoPoint::new(0.0, 0.001 * i as f32)))
        .collect();
    let edges = nodes.windows(2).map(|w| b.add_edge(w[0], w[1], 100.0)).collect();
    (b.build(), edges)
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn sequential_ids() {
        let (graph, edges) = corridor();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(edges, vec![EdgeId(0), EdgeId(1), EdgeId(2)]);
    }

    #[test]
    fn measured_edge_length() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node(GeoPoint::new(53.0, 10.0));
        let c = b.add_node(GeoPoint::new(54.0, 10.0));
        let e = b.add_edge_measured(a, c);
        let graph = b.build();
        let len = graph.edge_length(e).unwrap();
        assert!((len - 111_195.0).abs() < 500.0, "got {len}");
    }

    #[test]
    fn signal_attachment() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 0.001));
        let e = b.add_edge(a, c, 50.0);
        b.set_signal(e, SignalId(3));
        let graph = b.build();
        assert_eq!(graph.signal_at_edge_end(e).unwrap(), Some(SignalId(3)));
    }

    #[test]
    #[should_panic(expected = "unknown to-node")]
    fn edges_require_registered_nodes() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        b.add_edge(a, NodeId(5), 10.0);
    }

    #[test]
    #[should_panic(expected = "unknown edge")]
    fn signals_require_registered_edges() {
        let mut b = RouteGraphBuilder::new();
        b.set_signal(EdgeId(0), SignalId(0));
    }

    #[test]
    fn unknown_edge_is_an_error() {
        let (graph, _) = corridor();
        assert!(matches!(
            graph.edge_length(EdgeId(99)),
            Err(RouteError::UnknownEdge(EdgeId(99)))
        ));
    }
}

// ── Route geometry ────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_geometry {
    use super::*;

    #[test]
    fn route_and_remaining_length() {
        let (graph, edges) = corridor();
        let route = Route::new(edges);
        assert!((graph.route_length(&route).unwrap() - 300.0).abs() < 1e-9);

        let pos = RoutePosition::new(1, 40.0);
        let rem = graph.remaining_distance(&route, pos).unwrap();
        assert!((rem - 160.0).abs() < 1e-9);

        // Past the end: nothing remains.
        let done = RoutePosition::new(3, 0.0);
        assert!(done.past_end_of(&route));
        assert_eq!(graph.remaining_distance(&route, done).unwrap(), 0.0);
    }

    #[test]
    fn locate_interpolates_along_edge() {
        let (graph, edges) = corridor();
        let pose = graph.locate(edges[0], 50.0).unwrap();
        // Midpoint of an eastbound 100 m edge from lon 0.0 to lon 0.001.
        assert!((pose.position.lon - 0.0005).abs() < 1e-6);
        assert!((pose.bearing_rad - std::f64::consts::FRAC_PI_2).abs() < 1e-3);
    }

    #[test]
    fn advance_on_edge_default_impl() {
        let (graph, edges) = corridor();
        let a = graph.advance_on_edge(edges[0], 10.0, 30.0).unwrap();
        assert!(!a.completed);
        assert!((a.offset_m - 40.0).abs() < 1e-9);

        let b = graph.advance_on_edge(edges[0], 90.0, 25.0).unwrap();
        assert!(b.completed);
        assert!((b.offset_m - 100.0).abs() < 1e-9);
        assert!((b.overrun_m - 15.0).abs() < 1e-9);

        assert!(graph.advance_on_edge(edges[0], 0.0, -1.0).is_err());
    }
}

// ── Occupancy / car-following ─────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use super::*;

    #[test]
    fn nearest_ahead_excluding_self() {
        let (mut graph, edges) = corridor();
        let me = VehicleId(0);
        graph.record_position(me, edges[0], 20.0, 5.0).unwrap();
        graph.record_position(VehicleId(1), edges[0], 80.0, 3.0).unwrap();
        graph.record_position(VehicleId(2), edges[0], 45.0, 4.0).unwrap();

        let obs = graph.vehicle_ahead(edges[0], 20.0, me).unwrap().unwrap();
        assert!((obs.distance_m - 25.0).abs() < 1e-9);
        assert!((obs.speed_mps - 4.0).abs() < 1e-9);
    }

    #[test]
    fn vehicles_behind_are_ignored() {
        let (mut graph, edges) = corridor();
        graph.record_position(VehicleId(1), edges[0], 10.0, 5.0).unwrap();
        assert!(graph.vehicle_ahead(edges[0], 50.0, VehicleId(0)).unwrap().is_none());
    }

    #[test]
    fn record_moves_between_edges() {
        let (mut graph, edges) = corridor();
        let v = VehicleId(7);
        graph.record_position(v, edges[0], 90.0, 5.0).unwrap();
        graph.record_position(v, edges[1], 5.0, 5.0).unwrap();

        // Old edge no longer reports it.
        assert!(graph.vehicle_ahead(edges[0], 0.0, VehicleId(99)).unwrap().is_none());
        let obs = graph.vehicle_ahead(edges[1], 0.0, VehicleId(99)).unwrap().unwrap();
        assert!((obs.distance_m - 5.0).abs() < 1e-9);
    }

    #[test]
    fn clear_position_is_idempotent() {
        let (mut graph, edges) = corridor();
        let v = VehicleId(7);
        graph.record_position(v, edges[2], 10.0, 1.0).unwrap();
        graph.clear_position(v).unwrap();
        graph.clear_position(v).unwrap();
        assert!(graph.vehicle_ahead(edges[2], 0.0, VehicleId(99)).unwrap().is_none());
    }
}
