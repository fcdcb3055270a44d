//! `mm-vehicle` — ready-made vehicles for the `rust_mm` framework.
//!
//! [`Vehicle`] is one concrete type covering all supported modalities; what
//! distinguishes a bicycle from a semi-truck is its [`VehicleParams`].  It
//! implements both capability traits, so the handles in `mm-steering` drive
//! it unchanged, and its [`tick`](Vehicle::tick) wires movement and
//! passenger notification together for engines that want the whole package.
//!
//! | Module      | Contents                        |
//! |-------------|---------------------------------|
//! | [`params`]  | `VehicleParams`, speed constants|
//! | [`vehicle`] | `Vehicle`                       |

pub mod params;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use params::VehicleParams;
pub use vehicle::Vehicle;
