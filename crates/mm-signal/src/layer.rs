//! The scenario-wide collection of traffic lights.

use mm_core::{SignalId, Tick};

use crate::light::TrafficLight;
use crate::phase::LightPhase;

/// All traffic lights of a scenario, indexed by [`SignalId`].
///
/// The owning engine calls [`update`](Self::update) once per tick before any
/// vehicle moves; steering code then reads phases through [`phase`]
/// (`Self::phase`) with no mutation and no schedule knowledge.
#[derive(Debug, Default)]
pub struct SignalLayer {
    lights: Vec<TrafficLight>,
}

impl SignalLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a light and return its id (sequential from 0).
    pub fn add(&mut self, light: TrafficLight) -> SignalId {
        let id = SignalId(self.lights.len() as u32);
        self.lights.push(light);
        id
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Step every light to `tick`.
    pub fn update(&mut self, tick: Tick) {
        for light in &mut self.lights {
            light.update(tick);
        }
    }

    /// Cached phase of `id`.  Unknown ids read as [`LightPhase::None`], the
    /// same as an edge without a light.
    pub fn phase(&self, id: SignalId) -> LightPhase {
        match self.lights.get(id.index()) {
            Some(light) => light.phase(),
            None => {
                log::warn!("phase query for unknown signal {id}");
                LightPhase::None
            }
        }
    }

    /// Phase of `id` at an arbitrary tick, bypassing the cache.
    pub fn phase_at(&self, id: SignalId, tick: Tick) -> LightPhase {
        self.lights
            .get(id.index())
            .map_or(LightPhase::None, |light| light.phase_at(tick))
    }
}
