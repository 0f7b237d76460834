//! Unit tests for vg-rules.

#[cfg(test)]
mod helpers {
    use vg_graph::{Location, TravelGraph, TravelGraphBuilder};

    /// Star around `S`:
    ///
    /// ```text
    ///        a (2)
    ///        |
    ///  c(1)─ S ─b(1)
    ///        |
    ///        d (5, blocked)
    /// ```
    pub fn star() -> TravelGraph {
        let mut b = TravelGraphBuilder::new();
        for id in ["S", "d", "c", "b", "a"] {
            b.add_location(Location::new(id)).unwrap();
        }
        b.add_connection("S", "d", Some(5.0), true).unwrap();
        b.add_connection("S", "c", Some(1.0), false).unwrap();
        b.add_connection("S", "a", Some(2.0), false).unwrap();
        b.add_connection("S", "b", Some(1.0), false).unwrap();
        b.build()
    }
}

// ── Stay ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stay {
    use vg_core::{HealthTier, ResearchParams, Resources};

    use crate::stay;

    const EPS: f64 = 1e-12;

    #[test]
    fn eats_half_a_unit_below_threshold() {
        let r = Resources::new(30.0, 10.0, 5.0);
        let out = stay(r, HealthTier::Best, &ResearchParams::new(1.0, 0.0, 0.0));
        assert!((out.eaten - 0.5).abs() < EPS);
        assert!((out.after.energy_pct - 32.5).abs() < EPS);
        assert!((out.after.reserve_mass - 9.5).abs() < EPS);
        assert_eq!(out.after.life_budget, 5.0);
    }

    #[test]
    fn gain_depends_on_health() {
        let r = Resources::new(30.0, 10.0, 5.0);
        let p = ResearchParams::new(1.0, 0.0, 0.0);
        assert!((stay(r, HealthTier::Good, &p).after.energy_pct - 31.5).abs() < EPS);
        assert!((stay(r, HealthTier::Poor, &p).after.energy_pct - 31.0).abs() < EPS);
        assert!((stay(r, HealthTier::Dying, &p).after.energy_pct - 31.0).abs() < EPS);
    }

    #[test]
    fn no_eating_at_or_above_threshold() {
        let r = Resources::new(50.0, 10.0, 5.0);
        let out = stay(r, HealthTier::Best, &ResearchParams::new(1.0, 0.0, 0.0));
        assert_eq!(out.eaten, 0.0);
        assert_eq!(out.after, r);
    }

    #[test]
    fn eating_is_limited_by_reserve() {
        let r = Resources::new(10.0, 0.2, 5.0);
        let out = stay(r, HealthTier::Best, &ResearchParams::new(1.0, 0.0, 0.0));
        assert!((out.eaten - 0.2).abs() < EPS);
        assert!(out.after.reserve_mass.abs() < EPS);
        assert!((out.after.energy_pct - 11.0).abs() < EPS);
    }

    #[test]
    fn energy_is_capped_after_eating() {
        let r = Resources::new(49.0, 100.0, 5.0);
        let out = stay(r, HealthTier::Best, &ResearchParams::new(0.01, 0.0, 0.0));
        assert!((out.eaten - 50.0).abs() < 1e-9);
        assert_eq!(out.after.energy_pct, 100.0);
    }

    #[test]
    fn research_costs_energy_and_applies_life_delta() {
        let r = Resources::new(80.0, 3.0, 10.0);
        let out = stay(r, HealthTier::Best, &ResearchParams::new(2.0, 4.0, -1.0));
        assert_eq!(out.eaten, 0.0);
        assert!((out.research_cost - 1.0).abs() < EPS);
        assert!((out.after.energy_pct - 79.0).abs() < EPS);
        assert!((out.after.life_budget - 9.0).abs() < EPS);
    }

    #[test]
    fn positive_life_delta_extends_budget() {
        let r = Resources::new(80.0, 0.0, 1.0);
        let out = stay(r, HealthTier::Best, &ResearchParams::new(1.0, 0.0, 2.5));
        assert!((out.after.life_budget - 3.5).abs() < EPS);
    }

    #[test]
    fn zero_time_cost_is_guarded() {
        let r = Resources::new(40.0, 3.0, 5.0);
        let out = stay(r, HealthTier::Best, &ResearchParams::new(0.0, 0.0, 0.0));
        assert!(out.after.energy_pct.is_finite());
        assert!((out.eaten - 3.0).abs() < EPS);
        assert!((out.after.energy_pct - 55.0).abs() < EPS);
    }

    #[test]
    fn research_can_kill() {
        let r = Resources::new(10.0, 0.0, 5.0);
        let out = stay(r, HealthTier::Best, &ResearchParams::new(1.0, 20.0, 0.0));
        assert!(out.after.energy_pct <= 0.0);
        assert!(out.died());
    }

    #[test]
    fn life_delta_can_kill() {
        let r = Resources::new(90.0, 0.0, 0.5);
        let out = stay(r, HealthTier::Best, &ResearchParams::new(1.0, 0.0, -1.0));
        assert!(out.died());
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use rustc_hash::FxHashSet;

    use vg_core::{HealthTier, Resources};

    use crate::{affordable, candidates, nearest, reachable};

    #[test]
    fn candidates_skip_blocked_and_follow_label_order() {
        let g = super::helpers::star();
        let s = g.node_id("S").unwrap();
        let r = Resources::new(100.0, 0.0, 100.0);
        let labels: Vec<_> = candidates(&g, s, &r, HealthTier::Best, |_| false)
            .into_iter()
            .map(|c| g.label(c.to).unwrap().to_owned())
            .collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn nearest_breaks_ties_by_label() {
        let g = super::helpers::star();
        let s = g.node_id("S").unwrap();
        let r = Resources::new(100.0, 0.0, 100.0);
        let m = nearest(&g, s, &r, HealthTier::Best, |_| false).unwrap();
        assert_eq!(g.label(m.to), Some("b"));
        assert_eq!(m.distance, 1.0);
    }

    #[test]
    fn nearest_skips_visited() {
        let g = super::helpers::star();
        let s = g.node_id("S").unwrap();
        let mut seen = FxHashSet::default();
        seen.insert(g.node_id("b").unwrap());
        let r = Resources::new(100.0, 0.0, 100.0);
        let m = nearest(&g, s, &r, HealthTier::Best, |n| seen.contains(&n)).unwrap();
        assert_eq!(g.label(m.to), Some("c"));
    }

    #[test]
    fn affordability_is_strict() {
        // Life 1.0 exactly covers a 1.0 move, which would leave zero.
        let r = Resources::new(100.0, 0.0, 1.0);
        assert!(!affordable(&r, HealthTier::Best, 1.0));
        // Poor: 1.0 × 1.5 = 1.5 energy against 1.5 available.
        let r = Resources::new(1.5, 0.0, 10.0);
        assert!(!affordable(&r, HealthTier::Poor, 1.0));
        assert!(affordable(&r, HealthTier::Best, 1.0));
    }

    #[test]
    fn life_budget_limits_reach() {
        let g = super::helpers::star();
        let s = g.node_id("S").unwrap();
        let r = Resources::new(100.0, 0.0, 1.5);
        let c = candidates(&g, s, &r, HealthTier::Best, |_| false);
        assert_eq!(c.len(), 2);
        assert!(c.iter().all(|m| m.distance == 1.0));
    }

    #[test]
    fn reachable_ignores_energy() {
        let g = super::helpers::star();
        let s = g.node_id("S").unwrap();
        let r = Resources::new(1.0, 0.0, 1.5);
        let moves = reachable(&g, s, &r, |_| false);
        let labels: Vec<_> = moves.iter().map(|m| g.label(m.to).unwrap()).collect();
        assert_eq!(labels, vec!["b", "c"]);
        let after = moves[0].apply(r);
        assert_eq!(after.energy_pct, 1.0);
        assert_eq!(after.life_budget, 0.5);
    }

    #[test]
    fn nothing_affordable_yields_none() {
        let g = super::helpers::star();
        let s = g.node_id("S").unwrap();
        let r = Resources::new(1.0, 0.0, 100.0);
        assert!(nearest(&g, s, &r, HealthTier::Best, |_| false).is_none());
    }

    #[test]
    fn apply_deducts_health_scaled_energy() {
        let g = super::helpers::star();
        let s = g.node_id("S").unwrap();
        let r = Resources::new(100.0, 4.0, 10.0);
        let m = candidates(&g, s, &r, HealthTier::Good, |_| false)
            .into_iter()
            .find(|c| g.label(c.to) == Some("a"))
            .unwrap();
        let after = m.apply(r);
        assert!((after.energy_pct - 97.6).abs() < 1e-12);
        assert_eq!(after.life_budget, 8.0);
        assert_eq!(after.reserve_mass, 4.0);
    }
}
