//! Unit tests for vg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert!(EdgeId::try_from(u32::MAX as usize).is_ok());
        assert!(EdgeId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn euclidean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(Point::new(1.0, -1.0).is_finite());
    }
}

#[cfg(test)]
mod health {
    use crate::{HealthTier, VgError};

    #[test]
    fn tables_follow_tiers() {
        assert_eq!(HealthTier::Best.gain_per_mass(), 5.0);
        assert_eq!(HealthTier::Good.gain_per_mass(), 3.0);
        assert_eq!(HealthTier::Poor.gain_per_mass(), 2.0);
        assert_eq!(HealthTier::Dying.gain_per_mass(), 2.0);

        assert_eq!(HealthTier::Best.movement_multiplier(), 1.0);
        assert_eq!(HealthTier::Good.movement_multiplier(), 1.2);
        assert_eq!(HealthTier::Poor.movement_multiplier(), 1.5);
        assert_eq!(HealthTier::Dying.movement_multiplier(), 2.0);
    }

    #[test]
    fn ordered_best_first() {
        assert!(HealthTier::Best < HealthTier::Good);
        assert!(HealthTier::Poor < HealthTier::Dying);
        assert!(HealthTier::Dying < HealthTier::Dead);
    }

    #[test]
    fn parse_vocabulary() {
        for tier in [
            HealthTier::Best,
            HealthTier::Good,
            HealthTier::Poor,
            HealthTier::Dying,
            HealthTier::Dead,
        ] {
            assert_eq!(tier.as_str().parse::<HealthTier>().unwrap(), tier);
        }
        assert_eq!(" GOOD ".parse::<HealthTier>().unwrap(), HealthTier::Good);
    }

    #[test]
    fn parse_unknown_label_errors() {
        let err = "excellent".parse::<HealthTier>().unwrap_err();
        assert_eq!(err, VgError::UnknownHealth("excellent".into()));
    }
}

#[cfg(test)]
mod resources {
    use crate::{HealthTier, ResearchParams, Resources, Traveler};

    #[test]
    fn new_clamps_energy_and_reserve() {
        let r = Resources::new(140.0, -3.0, 10.0);
        assert_eq!(r.energy_pct, 100.0);
        assert_eq!(r.reserve_mass, 0.0);
        assert_eq!(r.life_budget, 10.0);
    }

    #[test]
    fn dead_when_energy_or_life_exhausted() {
        assert!(Resources::new(0.0, 5.0, 10.0).is_dead());
        assert!(Resources::new(50.0, 5.0, 0.0).is_dead());
        assert!(Resources::new(50.0, 5.0, -1.0).is_dead());
        assert!(!Resources::new(0.1, 0.0, 0.1).is_dead());
    }

    #[test]
    fn clamped_snapshot_bounds() {
        let raw = Resources { energy_pct: -4.0, reserve_mass: -0.5, life_budget: -2.0 };
        let c = raw.clamped();
        assert_eq!(c, Resources { energy_pct: 0.0, reserve_mass: 0.0, life_budget: 0.0 });
    }

    #[test]
    fn dead_health_marker_is_dead() {
        let t = Traveler::new(HealthTier::Dead, 100.0, 10.0, 100.0);
        assert!(t.is_dead());
        assert!(!Traveler::new(HealthTier::Dying, 100.0, 10.0, 100.0).is_dead());
    }

    #[test]
    fn research_defaults_and_guard() {
        let p = ResearchParams::default();
        assert_eq!(p.time_cost_per_unit_mass, 1.0);
        assert_eq!(p.energy_cost_per_time_unit, 0.0);
        assert_eq!(p.life_delta, 0.0);

        let zero = ResearchParams::new(0.0, 1.0, 0.0);
        assert_eq!(zero.guarded_time_cost(), ResearchParams::MIN_TIME_COST);
        assert!(zero.is_valid());
        assert!(!ResearchParams::new(-1.0, 0.0, 0.0).is_valid());
        assert!(!ResearchParams::new(1.0, f64::INFINITY, 0.0).is_valid());
    }
}

#[cfg(test)]
mod config {
    use crate::{EngineConfig, VgError};

    #[test]
    fn defaults() {
        let c = EngineConfig::default();
        assert_eq!(c.max_steps, 1000);
        assert_eq!(c.beam_width, 10);
        assert_eq!(c.score.alpha, 0.1);
        assert_eq!(c.score.beta, 0.01);
        assert_eq!(c.score.gamma, 0.01);
        assert_eq!(c.boost.energy, 1.5);
        assert_eq!(c.boost.reserve, 2.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_caps_rejected() {
        let c = EngineConfig { max_steps: 0, ..EngineConfig::default() };
        assert!(matches!(c.validate(), Err(VgError::Config(_))));
        let c = EngineConfig { beam_width: 0, ..EngineConfig::default() };
        assert!(matches!(c.validate(), Err(VgError::Config(_))));
    }

    #[test]
    fn non_finite_weight_rejected() {
        let mut c = EngineConfig::default();
        c.score.beta = f64::NAN;
        assert!(c.validate().is_err());
    }
}
