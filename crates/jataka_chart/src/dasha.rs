//! Dasha tree orchestration: validated inputs in, nested calendar-stamped
//! period trees out.
//!
//! The base engines work in Julian Days and flat levels; this module
//! validates the Moon longitude and birth timestamp up front (no partial
//! results), builds the recursive node tree bounded by the requested depth,
//! and renders every boundary as a `UtcTime`.

use jataka_base::dasha::{
    DashaEntity, DashaLevel, DashaPeriod, DashaSystem, MAX_DASHA_LEVEL, YoginiStartRule,
    generate_children, vimshottari_config, vimshottari_snapshot, yogini_config,
    yogini_level0_with_start, yogini_snapshot,
};
use jataka_base::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use jataka_time::UtcTime;

use crate::error::ChartError;

/// Which start rule produced a Yogini tree (always Default for
/// Vimshottari). Recorded so callers can audit tradition overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRuleNote {
    /// The system's standard nakshatra-map start.
    Default,
    /// A caller-supplied tradition override.
    Custom,
}

impl StartRuleNote {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Custom => "custom",
        }
    }
}

/// One node of a dasha tree. Children partition `[start, end)` exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaNode {
    pub entity: DashaEntity,
    pub level: DashaLevel,
    pub start: UtcTime,
    pub end: UtcTime,
    pub start_jd: f64,
    pub end_jd: f64,
    pub children: Vec<DashaNode>,
}

impl DashaNode {
    /// Duration in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// A complete dasha tree for one system.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaTree {
    pub system: DashaSystem,
    pub birth: UtcTime,
    /// The Moon's nakshatra at birth (drives the starting lord and balance).
    pub nakshatra: NakshatraInfo,
    /// Which start rule was applied.
    pub start_rule: StartRuleNote,
    /// Top-level mahadasha nodes, from birth onward.
    pub periods: Vec<DashaNode>,
}

/// Configuration for tree construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaTreeConfig {
    /// Number of levels to build, 1 (mahadasha only) through 5 (prana).
    pub levels: u8,
    /// When set, only mahadashas overlapping `[from, to)` are expanded into
    /// children. All mahadashas are still returned.
    pub range: Option<(UtcTime, UtcTime)>,
    /// Yogini start rule (ignored for Vimshottari).
    pub yogini_start: YoginiStartRule,
}

impl Default for DashaTreeConfig {
    fn default() -> Self {
        Self {
            levels: 3,
            range: None,
            yogini_start: YoginiStartRule::NakshatraMap,
        }
    }
}

/// Validate a Moon sidereal longitude for dasha computation.
fn validate_moon_longitude(moon_sidereal_lon: f64) -> Result<(), ChartError> {
    if !moon_sidereal_lon.is_finite() || !(0.0..360.0).contains(&moon_sidereal_lon) {
        return Err(ChartError::InvalidInput(
            "moon longitude must be a finite value in [0, 360)",
        ));
    }
    Ok(())
}

/// Recursively expand one flat period into a tree node.
fn expand_node(
    period: &DashaPeriod,
    sequence: &[(DashaEntity, f64)],
    total_period_days: f64,
    remaining_levels: u8,
    expand: bool,
) -> DashaNode {
    let children = match period.level.child_level() {
        Some(child_level) if expand && remaining_levels > 0 => {
            generate_children(period, sequence, total_period_days, child_level, 0)
                .iter()
                .map(|child| {
                    expand_node(child, sequence, total_period_days, remaining_levels - 1, true)
                })
                .collect()
        }
        _ => Vec::new(),
    };

    DashaNode {
        entity: period.entity,
        level: period.level,
        start: UtcTime::from_jd(period.start_jd),
        end: UtcTime::from_jd(period.end_jd),
        start_jd: period.start_jd,
        end_jd: period.end_jd,
        children,
    }
}

/// Compute a nested dasha tree for one system.
///
/// Fails with `InvalidInput` before any period is computed when the Moon
/// longitude is out of range, the birth timestamp is invalid, or the level
/// count is outside 1-5.
pub fn compute_dasha_tree(
    system: DashaSystem,
    moon_sidereal_lon: f64,
    birth: &UtcTime,
    config: &DashaTreeConfig,
) -> Result<DashaTree, ChartError> {
    validate_moon_longitude(moon_sidereal_lon)?;
    birth.validate()?;
    if config.levels < 1 || config.levels > MAX_DASHA_LEVEL + 1 {
        return Err(ChartError::InvalidInput("dasha levels must be 1-5"));
    }
    let range_jd = match &config.range {
        Some((from, to)) => {
            from.validate()?;
            to.validate()?;
            let (f, t) = (from.to_jd(), to.to_jd());
            if f >= t {
                return Err(ChartError::InvalidInput("query range start must precede end"));
            }
            Some((f, t))
        }
        None => None,
    };

    let birth_jd = birth.to_jd();

    let (level0, sequence, total, start_rule) = match system {
        DashaSystem::Vimshottari => {
            let cfg = vimshottari_config();
            let level0 = jataka_base::dasha::vimshottari_level0(birth_jd, moon_sidereal_lon, &cfg);
            (
                level0,
                cfg.entity_sequence(),
                cfg.total_period_days,
                StartRuleNote::Default,
            )
        }
        DashaSystem::Yogini => {
            let cfg = yogini_config();
            let level0 =
                yogini_level0_with_start(birth_jd, moon_sidereal_lon, &cfg, config.yogini_start);
            let note = if config.yogini_start.is_default() {
                StartRuleNote::Default
            } else {
                StartRuleNote::Custom
            };
            (level0, cfg.entity_sequence(), cfg.total_period_days, note)
        }
    };

    let periods = level0
        .iter()
        .map(|maha| {
            let expand = match range_jd {
                Some((from, to)) => maha.start_jd < to && maha.end_jd > from,
                None => true,
            };
            expand_node(maha, &sequence, total, config.levels - 1, expand)
        })
        .collect();

    Ok(DashaTree {
        system,
        birth: *birth,
        nakshatra: nakshatra_from_longitude(moon_sidereal_lon),
        start_rule,
        periods,
    })
}

/// The chain of active periods (mahadasha → deeper levels) at an instant.
///
/// Nodes in the returned chain carry no children; index 0 is the active
/// mahadasha. Empty when `at` precedes birth or falls past the cycle end.
pub fn dasha_snapshot_at(
    system: DashaSystem,
    moon_sidereal_lon: f64,
    birth: &UtcTime,
    at: &UtcTime,
    levels: u8,
    yogini_start: YoginiStartRule,
) -> Result<Vec<DashaNode>, ChartError> {
    validate_moon_longitude(moon_sidereal_lon)?;
    birth.validate()?;
    at.validate()?;
    if levels < 1 || levels > MAX_DASHA_LEVEL + 1 {
        return Err(ChartError::InvalidInput("dasha levels must be 1-5"));
    }

    let birth_jd = birth.to_jd();
    let query_jd = at.to_jd();
    let max_level = levels - 1;

    let snapshot = match system {
        DashaSystem::Vimshottari => {
            let cfg = vimshottari_config();
            vimshottari_snapshot(birth_jd, moon_sidereal_lon, &cfg, query_jd, max_level)
        }
        DashaSystem::Yogini => {
            let cfg = yogini_config();
            yogini_snapshot(
                birth_jd,
                moon_sidereal_lon,
                &cfg,
                query_jd,
                max_level,
                yogini_start,
            )
        }
    };

    Ok(snapshot
        .periods
        .iter()
        .map(|p| DashaNode {
            entity: p.entity,
            level: p.level,
            start: UtcTime::from_jd(p.start_jd),
            end: UtcTime::from_jd(p.end_jd),
            start_jd: p.start_jd,
            end_jd: p.end_jd,
            children: Vec::new(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_base::Graha;

    fn birth() -> UtcTime {
        UtcTime::new(1994, 11, 9, 1, 59, 0.0)
    }

    #[test]
    fn rejects_bad_moon_longitude() {
        let cfg = DashaTreeConfig::default();
        for lon in [-0.001, 360.0, 400.0, f64::NAN, f64::INFINITY] {
            let result = compute_dasha_tree(DashaSystem::Vimshottari, lon, &birth(), &cfg);
            assert!(result.is_err(), "longitude {lon} must be rejected");
        }
    }

    #[test]
    fn rejects_bad_birth() {
        let cfg = DashaTreeConfig::default();
        let bad = UtcTime::new(1994, 13, 9, 1, 59, 0.0);
        assert!(compute_dasha_tree(DashaSystem::Vimshottari, 10.0, &bad, &cfg).is_err());
    }

    #[test]
    fn rejects_bad_levels() {
        let mut cfg = DashaTreeConfig::default();
        cfg.levels = 0;
        assert!(compute_dasha_tree(DashaSystem::Vimshottari, 10.0, &birth(), &cfg).is_err());
        cfg.levels = 6;
        assert!(compute_dasha_tree(DashaSystem::Vimshottari, 10.0, &birth(), &cfg).is_err());
    }

    #[test]
    fn vimshottari_tree_shape() {
        let cfg = DashaTreeConfig {
            levels: 3,
            ..DashaTreeConfig::default()
        };
        let tree = compute_dasha_tree(DashaSystem::Vimshottari, 0.0, &birth(), &cfg).unwrap();
        assert_eq!(tree.periods.len(), 9);
        assert_eq!(tree.periods[0].entity, DashaEntity::Graha(Graha::Ketu));
        for maha in &tree.periods {
            assert_eq!(maha.children.len(), 9);
            for antar in &maha.children {
                assert_eq!(antar.children.len(), 9);
                for prat in &antar.children {
                    assert!(prat.children.is_empty());
                    assert_eq!(prat.level, DashaLevel::Pratyantardasha);
                }
            }
        }
    }

    #[test]
    fn first_maha_starts_at_birth() {
        let cfg = DashaTreeConfig::default();
        let b = birth();
        let tree = compute_dasha_tree(DashaSystem::Vimshottari, 123.4, &b, &cfg).unwrap();
        assert!((tree.periods[0].start_jd - b.to_jd()).abs() < 1e-9);
        assert_eq!(tree.periods[0].start.year, b.year);
    }

    #[test]
    fn range_prunes_expansion() {
        let b = birth();
        // A range covering only the first few years
        let from = UtcTime::new(1995, 1, 1, 0, 0, 0.0);
        let to = UtcTime::new(1997, 1, 1, 0, 0, 0.0);
        let cfg = DashaTreeConfig {
            levels: 2,
            range: Some((from, to)),
            yogini_start: YoginiStartRule::NakshatraMap,
        };
        let tree = compute_dasha_tree(DashaSystem::Vimshottari, 0.0, &b, &cfg).unwrap();
        // All mahadashas are present
        assert_eq!(tree.periods.len(), 9);
        // Only the first (Ketu, 7y from 1994) overlaps the range
        assert!(!tree.periods[0].children.is_empty());
        assert!(tree.periods[1].children.is_empty());
    }

    #[test]
    fn inverted_range_rejected() {
        let b = birth();
        let from = UtcTime::new(1997, 1, 1, 0, 0, 0.0);
        let to = UtcTime::new(1995, 1, 1, 0, 0, 0.0);
        let cfg = DashaTreeConfig {
            levels: 2,
            range: Some((from, to)),
            yogini_start: YoginiStartRule::NakshatraMap,
        };
        assert!(compute_dasha_tree(DashaSystem::Vimshottari, 0.0, &b, &cfg).is_err());
    }

    #[test]
    fn yogini_start_rule_noted() {
        let b = birth();
        let mut cfg = DashaTreeConfig::default();
        let tree = compute_dasha_tree(DashaSystem::Yogini, 40.0, &b, &cfg).unwrap();
        assert_eq!(tree.start_rule, StartRuleNote::Default);

        cfg.yogini_start = YoginiStartRule::FixedYogini(0);
        let tree = compute_dasha_tree(DashaSystem::Yogini, 40.0, &b, &cfg).unwrap();
        assert_eq!(tree.start_rule, StartRuleNote::Custom);
        assert_eq!(tree.periods[0].entity, DashaEntity::Yogini(0));
    }

    #[test]
    fn snapshot_returns_active_chain() {
        let b = birth();
        let at = UtcTime::new(2000, 6, 1, 0, 0, 0.0);
        let chain = dasha_snapshot_at(
            DashaSystem::Vimshottari,
            0.0,
            &b,
            &at,
            3,
            YoginiStartRule::NakshatraMap,
        )
        .unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0].level, DashaLevel::Mahadasha);
        assert_eq!(chain[2].level, DashaLevel::Pratyantardasha);
        // The query instant is inside every period of the chain
        let q = at.to_jd();
        for node in &chain {
            assert!(node.start_jd <= q && q < node.end_jd);
        }
    }

    #[test]
    fn snapshot_before_birth_is_empty() {
        let b = birth();
        let at = UtcTime::new(1990, 1, 1, 0, 0, 0.0);
        let chain = dasha_snapshot_at(
            DashaSystem::Vimshottari,
            0.0,
            &b,
            &at,
            3,
            YoginiStartRule::NakshatraMap,
        )
        .unwrap();
        assert!(chain.is_empty());
    }
}
