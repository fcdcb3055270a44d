//! `mm-route` — route types and the graph-provider seam of the `rust_mm`
//! locomotion core.
//!
//! The actual spatial graph engine (nearest-node search, shortest paths) is
//! an external collaborator.  This crate defines the narrow interface the
//! locomotion core consumes — [`RouteProvider`] — plus the value types that
//! cross it, and ships [`RouteGraph`], a small in-memory provider used by
//! tests and by embeddings that bring their own routing.
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`route`]    | `Route`, `RoutePosition`                             |
//! | [`provider`] | `RouteProvider`, `Obstruction`, `Pose`, `EdgeAdvance`|
//! | [`graph`]    | `RouteGraph`, `RouteGraphBuilder`                    |
//! | [`error`]    | `RouteError`, `RouteResult`                          |

pub mod error;
pub mod graph;
pub mod provider;
pub mod route;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RouteError, RouteResult};
pub use graph::{DEFAULT_SPEED_LIMIT, RouteGraph, RouteGraphBuilder};
pub use provider::{EdgeAdvance, Obstruction, Pose, RouteProvider, UNOBSTRUCTED};
pub use route::{Route, RoutePosition};
