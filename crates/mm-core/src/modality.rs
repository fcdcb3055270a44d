//! Transport modality shared across all locomotion crates.
//!
//! The modality names the kind of vehicle an agent currently uses; per-kind
//! mechanical parameters (speeds, capacities) live with the concrete vehicle
//! types in `mm-vehicle`, so this enum stays a pure tag.

/// The transport mode a vehicle belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modality {
    /// Private car.
    Car,
    /// Bicycle.
    Bicycle,
    /// Freight semi-truck.
    SemiTruck,
    /// Scheduled rail service.
    Train,
    /// Scheduled ferry service.
    Ferry,
}

impl Modality {
    /// `true` for modes that run scheduled lines with terminal stations
    /// (the last stop broadcasts `TerminalStation` instead of `GoalReached`).
    #[inline]
    pub fn is_scheduled(self) -> bool {
        matches!(self, Modality::Train | Modality::Ferry)
    }

    /// Human-readable label, useful for log lines and output columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Car       => "car",
            Modality::Bicycle   => "bicycle",
            Modality::SemiTruck => "semi-truck",
            Modality::Train     => "train",
            Modality::Ferry     => "ferry",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
