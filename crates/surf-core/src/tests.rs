//! Unit tests for surf-core primitives.

#[cfg(test)]
mod ids {
    use crate::WaveId;

    #[test]
    fn index_casts() {
        let id = WaveId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(usize::from(id), 42);
    }

    #[test]
    fn ordering() {
        assert!(WaveId(0) < WaveId(1));
    }

    #[test]
    fn display() {
        assert_eq!(WaveId(7).to_string(), "WaveId(7)");
    }
}

#[cfg(test)]
mod rng {
    use crate::SessionRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0u64..1_000_000), b.gen_range(0u64..1_000_000));
        }
    }

    #[test]
    fn run_streams_are_independent() {
        let mut a = SessionRng::for_run(42, 0);
        let mut b = SessionRng::for_run(42, 1);
        let xs: Vec<u64> = (0..16).map(|_| a.gen_range(0..u64::MAX)).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.gen_range(0..u64::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SessionRng::new(1);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // Out-of-range probabilities are clamped, not a panic.
        assert!(rng.gen_bool(2.5));
        assert!(!rng.gen_bool(-1.0));
    }

    #[test]
    fn beta_stays_in_unit_interval() {
        let mut rng = SessionRng::new(3);
        for _ in 0..200 {
            let s = rng.beta(2.0, 8.0).unwrap();
            assert!((0.0..=1.0).contains(&s), "beta sample out of range: {s}");
        }
    }

    #[test]
    fn uniform_rejects_inverted_bounds() {
        let mut rng = SessionRng::new(3);
        assert!(rng.uniform(5.0, 1.0).is_err());
        assert_eq!(rng.uniform(4.0, 4.0).unwrap(), 4.0);
    }

    #[test]
    fn bad_distribution_params_error() {
        let mut rng = SessionRng::new(3);
        assert!(rng.poisson(0.0).is_err());
        assert!(rng.normal(0.0, -1.0).is_err());
        assert!(rng.beta(0.0, 1.0).is_err());
    }
}

#[cfg(test)]
mod config {
    use crate::{BehaviorTuning, RuleType, SessionMode, SpotLevel};

    #[test]
    fn level_parsing() {
        assert_eq!("beginner".parse::<SpotLevel>().unwrap(), SpotLevel::Beginner);
        assert_eq!(" Advanced ".parse::<SpotLevel>().unwrap(), SpotLevel::Advanced);
        assert!("expert".parse::<SpotLevel>().is_err());
    }

    #[test]
    fn rule_parsing_accepts_prompt_spelling() {
        assert_eq!("free-for-all".parse::<RuleType>().unwrap(), RuleType::FreeForAll);
        assert_eq!(
            "safe-distance-rule".parse::<RuleType>().unwrap(),
            RuleType::SafeDistance
        );
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("realistic".parse::<SessionMode>().unwrap(), SessionMode::Realistic);
        assert_eq!("EXPERIMENT".parse::<SessionMode>().unwrap(), SessionMode::Experiment);
    }

    #[test]
    fn builtin_profiles_are_usable() {
        for level in [SpotLevel::Beginner, SpotLevel::Mixed, SpotLevel::Advanced] {
            assert!(level.profile().is_usable(), "{level} profile unusable");
        }
    }

    #[test]
    fn degenerate_profile_detected() {
        let mut p = SpotLevel::Beginner.profile();
        p.lambda_set = 0.0;
        assert!(!p.is_usable());

        let mut p = SpotLevel::Beginner.profile();
        p.wave_height.min = 2.0;
        p.wave_height.max = 1.0;
        assert!(!p.is_usable());
    }

    #[test]
    fn height_normalization_clamps() {
        let t = BehaviorTuning::default();
        assert_eq!(t.normalized_height(0.0), 0.0);
        assert_eq!(t.normalized_height(3.0), 1.0);
        assert_eq!(t.normalized_height(99.0), 1.0);
        let mid = t.normalized_height(1.75);
        assert!((mid - 0.5).abs() < 1e-12, "got {mid}");
    }
}
