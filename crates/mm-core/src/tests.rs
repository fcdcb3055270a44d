//! Unit tests for mm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, PersonId, SignalId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PersonId(0) < PersonId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VehicleId::INVALID.0, u32::MAX);
        assert_eq!(SignalId::INVALID.0, u32::MAX);
        assert_eq!(VehicleId::default(), VehicleId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(53.55, 9.99);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(53.0, 10.0);
        let b = GeoPoint::new(54.0, 10.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = GeoPoint::new(0.0, 0.0);
        let north = GeoPoint::new(1.0, 0.0);
        let east = GeoPoint::new(0.0, 1.0);

        assert!(origin.bearing_to(north).abs() < 1e-3);
        assert!((origin.bearing_to(east) - std::f64::consts::FRAC_PI_2).abs() < 1e-3);
        // Southbound: π.
        assert!((north.bearing_to(origin) - std::f64::consts::PI).abs() < 1e-3);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(2.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.lat - 1.0).abs() < 1e-6);
        assert!((mid.lon - 2.0).abs() < 1e-6);
        // Out-of-range t is clamped.
        assert_eq!(a.lerp(b, 2.5), b);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(1_000, 1);
        assert_eq!(clock.elapsed_secs(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 2);
        assert_eq!(clock.current_unix_secs(), 1_002);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0, 10);
        assert_eq!(clock.ticks_for_secs(25), 3);
        assert_eq!(clock.ticks_for_secs(30), 3);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentRng, PersonId, SimRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = AgentRng::new(7, PersonId(3));
        let mut b = AgentRng::new(7, PersonId(3));
        for _ in 0..10 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn different_persons_diverge() {
        let mut a = AgentRng::new(7, PersonId(3));
        let mut b = AgentRng::new(7, PersonId(4));
        let same = (0..16).filter(|_| a.gen_range(0..u64::MAX) == b.gen_range(0..u64::MAX)).count();
        assert_eq!(same, 0);
    }

    #[test]
    fn normal_sample_is_near_mean() {
        let mut rng = AgentRng::new(1, PersonId(0));
        let n = 2_000;
        let mean: f64 = (0..n).map(|_| rng.normal(5.0, 0.5)).sum::<f64>() / n as f64;
        assert!((mean - 5.0).abs() < 0.1, "sample mean {mean}");
    }

    #[test]
    fn child_rng_is_deterministic() {
        let mut root1 = SimRng::new(99);
        let mut root2 = SimRng::new(99);
        let mut c1 = root1.child(5);
        let mut c2 = root2.child(5);
        assert_eq!(c1.gen_range(0..u64::MAX), c2.gen_range(0..u64::MAX));
    }
}

#[cfg(test)]
mod modality {
    use crate::Modality;

    #[test]
    fn scheduled_modes() {
        assert!(Modality::Train.is_scheduled());
        assert!(Modality::Ferry.is_scheduled());
        assert!(!Modality::Car.is_scheduled());
        assert!(!Modality::Bicycle.is_scheduled());
        assert!(!Modality::SemiTruck.is_scheduled());
    }

    #[test]
    fn labels() {
        assert_eq!(Modality::SemiTruck.to_string(), "semi-truck");
    }
}
