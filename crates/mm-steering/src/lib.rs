//! `mm-steering` — the locomotion core of the `rust_mm` framework.
//!
//! Vehicles are whatever type the embedding engine defines; they plug into
//! this crate by implementing the capability traits in [`capable`].  The
//! [`SteeringHandle`] then moves any such vehicle along its route one tick
//! at a time, and the [`PassengerHandle`] manages who is on board and what
//! they are told when the trip ends.
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`capable`]    | `SteeringCapable`, `PassengerCapable`, `DriverSeat`   |
//! | [`accelerate`] | `VehicleAccelerator` and its two implementations      |
//! | [`steering`]   | `SteeringHandle`, `MoveOutcome`                       |
//! | [`passenger`]  | `PassengerHandle`                                     |
//! | [`message`]    | `PassengerMessage`, `PassengerEvent`                  |
//! | [`error`]      | `SteeringError`, `BoardingError`                      |

pub mod accelerate;
pub mod capable;
pub mod error;
pub mod message;
pub mod passenger;
pub mod steering;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use accelerate::{
    IntelligentDriverAccelerator, SafeBrakingAccelerator, VehicleAccelerator,
};
pub use capable::{DriverSeat, PassengerCapable, PassengerSet, SteeringCapable};
pub use error::{BoardingError, SteeringError, SteeringResult};
pub use message::{PassengerEvent, PassengerMessage};
pub use passenger::PassengerHandle;
pub use steering::{MoveOutcome, SteeringHandle};
