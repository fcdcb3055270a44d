//! Unit tests for mm-signal.

use mm_core::{SignalId, Tick};

use crate::{LightPhase, PhaseSchedule, SignalLayer, TrafficLight};

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn initial_phase_is_preserved_until_first_update() {
        let light = TrafficLight::new(LightPhase::Green, 1, 2, 3).unwrap();
        assert_eq!(light.phase(), LightPhase::Green);

        let mut light = light;
        light.update(Tick(0));
        assert_eq!(light.phase(), LightPhase::Red);
    }

    #[test]
    fn negative_boundaries_are_rejected() {
        assert!(TrafficLight::new(LightPhase::Red, -1, 2, 3).is_err());
        assert!(TrafficLight::new(LightPhase::Red, 1, -2, 3).is_err());
        assert!(TrafficLight::new(LightPhase::Red, 1, 2, -3).is_err());
    }

    #[test]
    fn from_schedule_evaluates_tick_zero() {
        let light = TrafficLight::from_schedule(PhaseSchedule::standard(0));
        assert_eq!(light.phase(), LightPhase::Green);

        let light = TrafficLight::from_schedule(PhaseSchedule::standard(5));
        assert_eq!(light.phase(), LightPhase::Red);
    }
}

// ── Phase evaluation ──────────────────────────────────────────────────────────

#[cfg(test)]
mod phases {
    use super::*;

    #[test]
    fn unit_cycle_sequence() {
        // Boundaries 1/2/3: red [0,1), green [1,2), yellow [2,3), wrap at 3.
        let mut light = TrafficLight::new(LightPhase::Red, 1, 2, 3).unwrap();
        let expected = [
            LightPhase::Red,
            LightPhase::Green,
            LightPhase::Yellow,
            LightPhase::Red,
            LightPhase::Green,
            LightPhase::Yellow,
        ];
        for (t, want) in expected.iter().enumerate() {
            light.update(Tick(t as u64));
            assert_eq!(light.phase(), *want, "tick {t}");
        }
    }

    #[test]
    fn standard_cycle_durations() {
        let schedule = PhaseSchedule::standard(0);
        let cycle = schedule.start_red;
        let mut greens = 0;
        let mut yellows = 0;
        let mut reds = 0;
        for t in 0..cycle {
            match schedule.phase_at(Tick(t)) {
                LightPhase::Green => greens += 1,
                LightPhase::Yellow => yellows += 1,
                LightPhase::Red => reds += 1,
                LightPhase::None => panic!("scheduled light showed none"),
            }
        }
        assert_eq!(greens, 20);
        assert_eq!(yellows, 3);
        assert_eq!(reds, 0);
    }

    #[test]
    fn shifted_cycle_has_leading_red() {
        let schedule = PhaseSchedule::standard(7);
        for t in 0..7 {
            assert_eq!(schedule.phase_at(Tick(t)), LightPhase::Red, "tick {t}");
        }
        assert_eq!(schedule.phase_at(Tick(7)), LightPhase::Green);
    }

    #[test]
    fn degenerate_schedule_holds_red() {
        let mut light = TrafficLight::new(LightPhase::Red, 0, 0, 0).unwrap();
        for t in 0..100 {
            light.update(Tick(t));
            assert_eq!(light.phase(), LightPhase::Red);
        }
    }

    #[test]
    fn phase_is_pure_in_the_tick() {
        let schedule = PhaseSchedule::new(4, 10, 14).unwrap();
        let light = TrafficLight::from_schedule(schedule);
        for t in 0..50 {
            let first = light.phase_at(Tick(t));
            // Re-querying and querying out of order never changes the answer.
            assert_eq!(light.phase_at(Tick(t)), first);
            assert_eq!(light.phase_at(Tick(t % 14)), first);
        }
    }

    #[test]
    fn inert_light_never_changes() {
        let mut light = TrafficLight::inert();
        for t in 0..10 {
            light.update(Tick(t));
            assert_eq!(light.phase(), LightPhase::None);
        }
    }

    #[test]
    fn a_light_switched_off_at_construction_stays_off() {
        let mut light = TrafficLight::new(LightPhase::None, 1000, 1000, 1000).unwrap();
        assert_eq!(light.phase(), LightPhase::None);
        assert!(light.schedule().is_none());
        for t in 0..10 {
            light.update(Tick(t));
            assert_eq!(light.phase(), LightPhase::None);
        }
        // Boundaries are still validated on the off path.
        assert!(TrafficLight::new(LightPhase::None, -1, 0, 0).is_err());
    }
}

// ── Layer ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layer {
    use super::*;

    #[test]
    fn update_steps_all_lights() {
        let mut layer = SignalLayer::new();
        let a = layer.add(TrafficLight::new(LightPhase::Red, 1, 2, 3).unwrap());
        let b = layer.add(TrafficLight::new(LightPhase::Red, 0, 2, 3).unwrap());

        layer.update(Tick(1));
        assert_eq!(layer.phase(a), LightPhase::Green);
        assert_eq!(layer.phase(b), LightPhase::Green);

        layer.update(Tick(2));
        assert_eq!(layer.phase(a), LightPhase::Yellow);
        assert_eq!(layer.phase(b), LightPhase::Yellow);
    }

    #[test]
    fn unknown_signal_reads_as_none() {
        let layer = SignalLayer::new();
        assert_eq!(layer.phase(SignalId(42)), LightPhase::None);
        assert_eq!(layer.phase_at(SignalId(42), Tick(7)), LightPhase::None);
    }
}
