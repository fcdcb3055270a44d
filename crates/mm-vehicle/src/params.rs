//! Physical parameters per modality.

use mm_core::{AgentRng, Modality};

/// Default car top speed: 50 km/h.
pub const CAR_MAX_SPEED_MPS: f64 = 13.89;
/// Default semi-truck top speed: 80 km/h.
pub const SEMI_TRUCK_MAX_SPEED_MPS: f64 = 22.22;
/// Default regional-train top speed: 120 km/h.
pub const TRAIN_MAX_SPEED_MPS: f64 = 33.33;
/// Default ferry top speed: 15 kn.
pub const FERRY_MAX_SPEED_MPS: f64 = 7.72;
/// Mean cycling speed and its spread; individual riders are sampled.
pub const BICYCLE_MEAN_SPEED_MPS: f64 = 5.5;
pub const BICYCLE_SPEED_STDDEV: f64 = 1.0;
/// Slowest sampled cycling speed accepted.
const BICYCLE_MIN_SPEED_MPS: f64 = 2.0;

/// The physical envelope of one vehicle.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleParams {
    /// Hard top speed, m/s.
    pub max_speed_mps: f64,
    /// Acceleration cap passed to kinematic accelerators, m/s².
    pub max_acceleration: f64,
    /// Strongest braking, m/s².
    pub max_deceleration: f64,
    /// Passenger seats, excluding the driver seat.
    pub passenger_capacity: usize,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            max_speed_mps: CAR_MAX_SPEED_MPS,
            max_acceleration: 1_000.0,
            max_deceleration: 1_000.0,
            passenger_capacity: 4,
        }
    }
}

impl VehicleParams {
    /// Fixed defaults for `modality`.
    pub fn for_modality(modality: Modality) -> Self {
        let base = Self::default();
        match modality {
            Modality::Car => base,
            Modality::Bicycle => Self {
                max_speed_mps: BICYCLE_MEAN_SPEED_MPS,
                passenger_capacity: 0,
                ..base
            },
            Modality::SemiTruck => Self {
                max_speed_mps: SEMI_TRUCK_MAX_SPEED_MPS,
                passenger_capacity: 1,
                ..base
            },
            Modality::Train => Self {
                max_speed_mps: TRAIN_MAX_SPEED_MPS,
                passenger_capacity: 300,
                ..base
            },
            Modality::Ferry => Self {
                max_speed_mps: FERRY_MAX_SPEED_MPS,
                passenger_capacity: 250,
                ..base
            },
        }
    }

    /// Defaults for `modality` with person-to-person variation where it
    /// applies.  Currently only cycling speed is individual.
    pub fn sampled(modality: Modality, rng: &mut AgentRng) -> Self {
        let mut params = Self::for_modality(modality);
        if modality == Modality::Bicycle {
            params.max_speed_mps = rng
                .normal(BICYCLE_MEAN_SPEED_MPS, BICYCLE_SPEED_STDDEV)
                .max(BICYCLE_MIN_SPEED_MPS);
        }
        params
    }
}
