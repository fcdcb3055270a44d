//! `mm-signal` — traffic lights for the `rust_mm` locomotion core.
//!
//! A [`TrafficLight`] owns a cyclic [`PhaseSchedule`] and a cached current
//! phase; the [`SignalLayer`] holds every light of a scenario and steps them
//! once per tick, so steering code can read phases without touching the
//! schedules.  Phase evaluation itself is a pure function of the tick.
//!
//! | Module    | Contents                                         |
//! |-----------|--------------------------------------------------|
//! | [`phase`] | `LightPhase`                                     |
//! | [`light`] | `TrafficLight`, `PhaseSchedule`, cycle constants |
//! | [`layer`] | `SignalLayer`                                    |
//! | [`error`] | `SignalError`, `SignalResult`                    |

pub mod error;
pub mod layer;
pub mod light;
pub mod phase;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SignalError, SignalResult};
pub use layer::SignalLayer;
pub use light::{GREEN_DURATION_TICKS, PhaseSchedule, TrafficLight, YELLOW_DURATION_TICKS};
pub use phase::LightPhase;
