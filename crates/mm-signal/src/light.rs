//! A single traffic light and its cyclic phase schedule.

use mm_core::Tick;

use crate::error::{SignalError, SignalResult};
use crate::phase::LightPhase;

/// Ticks of green in the standard urban cycle.
pub const GREEN_DURATION_TICKS: u64 = 20;
/// Ticks of yellow in the standard urban cycle.
pub const YELLOW_DURATION_TICKS: u64 = 3;

// ── PhaseSchedule ─────────────────────────────────────────────────────────────

/// Cyclic phase boundaries, as tick offsets into the cycle.
///
/// `start_red` doubles as the cycle length: the cycle runs green from
/// `start_green`, yellow from `start_yellow`, red from `start_red`, and wraps
/// back to tick 0 (red) at `start_red`.  Intervals are half-open and
/// evaluated cyclically, so `start_green > 0` yields a leading red stretch
/// `[0, start_green)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseSchedule {
    pub start_green: u64,
    pub start_yellow: u64,
    pub start_red: u64,
}

/// Cyclic half-open membership: is `t` in `[from, until)` on a circle?
///
/// Empty when `from == until`; wraps through zero when `from > until`.
#[inline]
fn in_cyclic(t: u64, from: u64, until: u64) -> bool {
    if from == until {
        false
    } else if from < until {
        from <= t && t < until
    } else {
        t >= from || t < until
    }
}

impl PhaseSchedule {
    /// Build a schedule, rejecting negative boundaries.
    pub fn new(start_green: i64, start_yellow: i64, start_red: i64) -> SignalResult<Self> {
        if start_green < 0 || start_yellow < 0 || start_red < 0 {
            return Err(SignalError::InvalidSchedule { start_green, start_yellow, start_red });
        }
        Ok(Self {
            start_green: start_green as u64,
            start_yellow: start_yellow as u64,
            start_red: start_red as u64,
        })
    }

    /// The standard 20 s green / 3 s yellow cycle, shifted so green begins
    /// at `start_green`.
    pub fn standard(start_green: u64) -> Self {
        Self {
            start_green,
            start_yellow: start_green + GREEN_DURATION_TICKS,
            start_red: start_green + GREEN_DURATION_TICKS + YELLOW_DURATION_TICKS,
        }
    }

    /// Phase shown at `tick`.  Pure; the same tick always yields the same
    /// phase.  A zero-length cycle is permanently red.
    pub fn phase_at(&self, tick: Tick) -> LightPhase {
        if self.start_red == 0 {
            return LightPhase::Red;
        }
        let t = tick.0 % self.start_red;
        if in_cyclic(t, self.start_green, self.start_yellow) {
            LightPhase::Green
        } else if in_cyclic(t, self.start_yellow, self.start_red) {
            LightPhase::Yellow
        } else {
            LightPhase::Red
        }
    }
}

// ── TrafficLight ──────────────────────────────────────────────────────────────

/// A traffic light: a schedule plus the phase cached for the current tick.
///
/// The phase passed to the constructor is held verbatim until the first
/// [`update`](Self::update); after that the schedule governs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficLight {
    schedule: Option<PhaseSchedule>,
    phase: LightPhase,
}

impl TrafficLight {
    /// Build a light with an explicit initial phase and raw boundaries.
    ///
    /// An initial phase of [`LightPhase::None`] switches the light off for
    /// good: the boundaries are still validated but never evaluated, and no
    /// update can turn the light back on.
    pub fn new(
        initial: LightPhase,
        start_green: i64,
        start_yellow: i64,
        start_red: i64,
    ) -> SignalResult<Self> {
        let schedule = PhaseSchedule::new(start_green, start_yellow, start_red)?;
        if initial == LightPhase::None {
            return Ok(Self::inert());
        }
        Ok(Self { schedule: Some(schedule), phase: initial })
    }

    /// Build a light whose initial phase is what the schedule shows at tick 0.
    pub fn from_schedule(schedule: PhaseSchedule) -> Self {
        Self { schedule: Some(schedule), phase: schedule.phase_at(Tick::ZERO) }
    }

    /// A switched-off light.  Always shows [`LightPhase::None`].
    pub fn inert() -> Self {
        Self { schedule: None, phase: LightPhase::None }
    }

    /// Re-evaluate the cached phase for `tick`.  Inert lights stay `None`.
    pub fn update(&mut self, tick: Tick) {
        if let Some(schedule) = self.schedule {
            self.phase = schedule.phase_at(tick);
        }
    }

    /// Phase cached by the last `update` (or the constructor).
    #[inline]
    pub fn phase(&self) -> LightPhase {
        self.phase
    }

    /// Phase at an arbitrary tick, without touching the cache.
    pub fn phase_at(&self, tick: Tick) -> LightPhase {
        match self.schedule {
            Some(schedule) => schedule.phase_at(tick),
            None => LightPhase::None,
        }
    }

    #[inline]
    pub fn schedule(&self) -> Option<PhaseSchedule> {
        self.schedule
    }
}
