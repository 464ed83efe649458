//! Unit tests for opn-core primitives.

#[cfg(test)]
mod coord {
    use crate::Location;

    #[test]
    fn distance_pythagorean() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn translated_shifts_both_axes() {
        let p = Location::new(10.0, 20.0).translated(-2.5, 5.0);
        assert_eq!(p, Location::new(7.5, 25.0));
    }

    #[test]
    fn mirrored_y_negates_y_only() {
        let p = Location::new(3.0, 7.0).mirrored_y();
        assert_eq!(p, Location::new(3.0, -7.0));
    }

    #[test]
    fn clamped_into_world_rect() {
        let p = Location::new(-5.0, 120.0).clamped(100.0, 100.0);
        assert_eq!(p, Location::new(0.0, 100.0));
        // Interior points are untouched.
        let q = Location::new(40.0, 60.0).clamped(100.0, 100.0);
        assert_eq!(q, Location::new(40.0, 60.0));
    }
}

#[cfg(test)]
mod ids {
    use crate::{AgentId, MessageId, NodeId};

    #[test]
    fn index_casts() {
        assert_eq!(NodeId(42).index(), 42);
        assert_eq!(usize::from(AgentId(7)), 7);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(MessageId(100) > MessageId(99));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(MessageId(3).to_string(), "MessageId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn secs_of_day_wraps() {
        assert_eq!(Tick(0).secs_of_day(), 0);
        assert_eq!(Tick(86_399).secs_of_day(), 86_399);
        assert_eq!(Tick(86_400).secs_of_day(), 0);
        assert_eq!(Tick(2 * 86_400 + 7).secs_of_day(), 7);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "streams for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}
