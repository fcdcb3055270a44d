//! `mm-core` — foundational types for the `rust_mm` multimodal locomotion
//! framework.
//!
//! This crate is a dependency of every other `mm-*` crate.  It intentionally
//! has no `mm-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `VehicleId`, `PersonId`, `NodeId`, `EdgeId`, `SignalId` |
//! | [`geo`]      | `GeoPoint`, haversine distance, bearing                 |
//! | [`time`]     | `Tick`, `SimClock`                                      |
//! | [`rng`]      | `AgentRng` (per-agent), `SimRng` (global)               |
//! | [`modality`] | `Modality` enum (car, bicycle, semi-truck, train, ferry)|
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod modality;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId, PersonId, SignalId, VehicleId};
pub use modality::Modality;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
