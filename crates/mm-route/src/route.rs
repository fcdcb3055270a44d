//! Route and on-route position types.

use mm_core::EdgeId;

/// An ordered sequence of directed edges a vehicle traverses.
///
/// A route is immutable once assigned for the current trip; re-routing
/// replaces the whole value rather than mutating edges in place.  The edge
/// attributes (length, direction, terminating signal) live with the
/// [`RouteProvider`][crate::RouteProvider].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    edges: Vec<EdgeId>,
}

impl Route {
    pub fn new(edges: Vec<EdgeId>) -> Self {
        Self { edges }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge at route index `i`.
    ///
    /// # Panics
    /// Panics if `i` is past the end of the route; callers index only with
    /// positions validated against `len()`.
    #[inline]
    pub fn edge(&self, i: usize) -> EdgeId {
        self.edges[i]
    }

    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    #[inline]
    pub fn last_edge(&self) -> Option<EdgeId> {
        self.edges.last().copied()
    }
}

/// Where on its route a vehicle currently is: the index of the edge being
/// traversed plus the metres already covered on it.
///
/// `edge_index == route.len()` encodes "goal reached".
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePosition {
    pub edge_index: usize,
    pub offset_m: f64,
}

impl RoutePosition {
    pub const START: RoutePosition = RoutePosition { edge_index: 0, offset_m: 0.0 };

    #[inline]
    pub fn new(edge_index: usize, offset_m: f64) -> Self {
        Self { edge_index, offset_m }
    }

    /// `true` once the position has consumed all edges of `route`.
    #[inline]
    pub fn past_end_of(&self, route: &Route) -> bool {
        self.edge_index >= route.len()
    }
}
