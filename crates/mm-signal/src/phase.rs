//! Traffic-light phase states.

use std::fmt;

/// The phase a traffic light shows during one tick.
///
/// `None` marks a light that is switched off (or a lookup that found no
/// light at all); vehicles treat it like a free crossing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightPhase {
    Red,
    Yellow,
    Green,
    #[default]
    None,
}

impl LightPhase {
    /// `true` for phases that never block entry into the crossing.
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, LightPhase::Green | LightPhase::None)
    }
}

impl fmt::Display for LightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LightPhase::Red => "red",
            LightPhase::Yellow => "yellow",
            LightPhase::Green => "green",
            LightPhase::None => "none",
        };
        f.write_str(s)
    }
}
