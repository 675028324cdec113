//! Yogini dasha engine (8 yoginis, 36-year cycle).
//!
//! Parallel to the Vimshottari engine but ruled by `DashaEntity::Yogini`
//! entities, and with a pluggable start rule: the default nakshatra map or
//! a caller-supplied fixed starting yogini (tradition override).

use crate::error::JatakaError;
use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::normalize_360;

use super::balance::nakshatra_birth_balance;
use super::query::find_active_period;
use super::subperiod::generate_children;
use super::types::{
    DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, DashaSystem, MAX_DASHA_LEVEL,
    MAX_PERIODS_PER_LEVEL,
};
use super::yogini_data::{YoginiDashaConfig, YoginiStartRule};

// ── Level-0 (Mahadasha) generation ───────────────────────────────────

/// Generate all 8 level-0 (mahadasha) periods using a specific start rule.
pub fn yogini_level0_with_start(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &YoginiDashaConfig,
    start: YoginiStartRule,
) -> Vec<DashaPeriod> {
    let nak_idx = {
        let lon = normalize_360(moon_sidereal_lon);
        (lon / NAKSHATRA_SPAN).floor() as u8
    }
    .min(26);

    let start_yogini_idx = match start {
        YoginiStartRule::NakshatraMap => config.starting_yogini_idx(nak_idx),
        YoginiStartRule::FixedYogini(idx) => idx.min(7),
    } as usize;
    let entry_period = config.entry_period_days(start_yogini_idx as u8);
    let (_nak, balance_days, _frac) = nakshatra_birth_balance(moon_sidereal_lon, entry_period);

    let n = config.yogini_sequence.len();
    let mut periods = Vec::with_capacity(n);
    let mut cursor = birth_jd;

    for offset in 0..n {
        let seq_idx = (start_yogini_idx + offset) % n;
        let entity = config.yogini_sequence[seq_idx];
        let full_period = config.periods_days[seq_idx];

        let duration = if offset == 0 { balance_days } else { full_period };

        let end = cursor + duration;
        periods.push(DashaPeriod {
            entity,
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: (offset as u16) + 1,
            parent_idx: 0,
        });
        cursor = end;
    }

    periods
}

/// Generate all level-0 periods with the default nakshatra-map start rule.
pub fn yogini_level0(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &YoginiDashaConfig,
) -> Vec<DashaPeriod> {
    yogini_level0_with_start(birth_jd, moon_sidereal_lon, config, YoginiStartRule::NakshatraMap)
}

// ── All children of one parent ───────────────────────────────────────

/// Calculate all child periods for a single parent period.
pub fn yogini_children(parent: &DashaPeriod, config: &YoginiDashaConfig) -> Vec<DashaPeriod> {
    let child_level = match parent.level.child_level() {
        Some(l) => l,
        None => return Vec::new(),
    };
    let seq = config.entity_sequence();
    generate_children(parent, &seq, config.total_period_days, child_level, 0)
}

// ── Complete level from parent level ─────────────────────────────────

/// Calculate complete level N given all periods at level N-1.
pub fn yogini_complete_level(
    parent_level: &[DashaPeriod],
    config: &YoginiDashaConfig,
    child_level: DashaLevel,
) -> Result<Vec<DashaPeriod>, JatakaError> {
    let n = config.yogini_sequence.len();
    let estimated = parent_level.len() * n;
    if estimated > MAX_PERIODS_PER_LEVEL {
        return Err(JatakaError::InvalidInput(
            "dasha level would exceed MAX_PERIODS_PER_LEVEL",
        ));
    }

    let seq = config.entity_sequence();
    let mut result = Vec::with_capacity(estimated);

    for (pidx, parent) in parent_level.iter().enumerate() {
        let children = generate_children(
            parent,
            &seq,
            config.total_period_days,
            child_level,
            pidx as u32,
        );
        result.extend(children);
    }

    Ok(result)
}

// ── Full hierarchy (levels 0..N) ─────────────────────────────────────

/// Calculate birth balance, then all levels from 0 to max_level.
pub fn yogini_hierarchy(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &YoginiDashaConfig,
    max_level: u8,
    start: YoginiStartRule,
) -> Result<DashaHierarchy, JatakaError> {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let level0 = yogini_level0_with_start(birth_jd, moon_sidereal_lon, config, start);
    let mut levels: Vec<Vec<DashaPeriod>> = vec![level0];

    for depth in 1..=max_level {
        let child_level = match DashaLevel::from_u8(depth) {
            Some(l) => l,
            None => break,
        };
        let parent = &levels[(depth - 1) as usize];
        let children = yogini_complete_level(parent, config, child_level)?;
        levels.push(children);
    }

    Ok(DashaHierarchy {
        system: DashaSystem::Yogini,
        birth_jd,
        levels,
    })
}

// ── Snapshot-only path ───────────────────────────────────────────────

/// Find active periods at query_jd without materializing the full hierarchy.
pub fn yogini_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &YoginiDashaConfig,
    query_jd: f64,
    max_level: u8,
    start: YoginiStartRule,
) -> DashaSnapshot {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let level0 = yogini_level0_with_start(birth_jd, moon_sidereal_lon, config, start);
    let mut active_periods: Vec<DashaPeriod> = Vec::with_capacity((max_level + 1) as usize);

    let active_idx = match find_active_period(&level0, query_jd) {
        Some(idx) => idx,
        None => {
            return DashaSnapshot {
                system: DashaSystem::Yogini,
                query_jd,
                periods: active_periods,
            };
        }
    };
    active_periods.push(level0[active_idx]);

    let mut current_parent = level0[active_idx];
    for _depth in 1..=max_level {
        let children = yogini_children(&current_parent, config);
        match find_active_period(&children, query_jd) {
            Some(idx) => {
                active_periods.push(children[idx]);
                current_parent = children[idx];
            }
            None => break,
        }
    }

    DashaSnapshot {
        system: DashaSystem::Yogini,
        query_jd,
        periods: active_periods,
    }
}
