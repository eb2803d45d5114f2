//! Unit tests for bank-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CustomerId, StageId};

    #[test]
    fn index_roundtrip() {
        let id = CustomerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CustomerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn stage_id_rejects_overflow() {
        assert!(StageId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(CustomerId(7).to_string(), "CustomerId(7)");
        assert_eq!(StageId(1).to_string(), "StageId(1)");
    }
}

#[cfg(test)]
mod time {
    use crate::{RunConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn since_saturates() {
        assert_eq!(Tick(4).since(Tick(1)), 3);
        assert_eq!(Tick(1).since(Tick(4)), 0);
    }

    #[test]
    fn tick_display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn end_tick_is_bound() {
        let cfg = RunConfig::new(50, 1);
        assert_eq!(cfg.end_tick(), Tick(50));
        assert_eq!(cfg.snapshot_interval, 1);
    }

    #[test]
    fn snapshot_interval() {
        let mut cfg = RunConfig::new(50, 1);
        assert!(cfg.is_snapshot_tick(Tick(1)));

        cfg.snapshot_interval = 5;
        assert!(!cfg.is_snapshot_tick(Tick(4)));
        assert!(cfg.is_snapshot_tick(Tick(10)));

        cfg.snapshot_interval = 0;
        assert!(!cfg.is_snapshot_tick(Tick(10)));
    }
}

#[cfg(test)]
mod rng {
    use crate::{ConstantSource, ScriptedSource, SimRng, UniformSource};

    #[test]
    fn sim_rng_same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..100 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn sim_rng_different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let sa: Vec<f32> = (0..10).map(|_| a.next_unit()).collect();
        let sb: Vec<f32> = (0..10).map(|_| b.next_unit()).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn sim_rng_in_unit_interval() {
        let mut rng = SimRng::new(7);
        for _ in 0..10_000 {
            let r = rng.next_unit();
            assert!((0.0..1.0).contains(&r), "got {r}");
        }
    }

    #[test]
    fn constant_source_repeats() {
        let mut src = ConstantSource(0.25);
        assert_eq!(src.next_unit(), 0.25);
        assert_eq!(src.next_unit(), 0.25);
    }

    #[test]
    fn scripted_source_then_fallback() {
        let mut src = ScriptedSource::new([0.1, 0.9], 0.5);
        assert_eq!(src.remaining(), 2);
        assert_eq!(src.next_unit(), 0.1);
        assert_eq!(src.next_unit(), 0.9);
        assert_eq!(src.next_unit(), 0.5);
        assert_eq!(src.next_unit(), 0.5);
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn mut_ref_forwards() {
        fn draw<S: UniformSource>(mut source: S) -> f32 {
            source.next_unit()
        }

        let mut src = ScriptedSource::new([0.3], 0.0);
        assert_eq!(draw(&mut src), 0.3);
        assert_eq!(src.remaining(), 0);
    }
}
