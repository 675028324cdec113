//! Vimshottari dasha engine (9 graha lords, 120-year cycle).
//!
//! Computation tiers:
//! - Level-0 (mahadasha) generation from the birth balance
//! - All children of one parent
//! - Complete level from parent level
//! - Full hierarchy (levels 0..N)
//! - Snapshot-only path (no full materialization)

use crate::error::JatakaError;
use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::normalize_360;

use super::balance::nakshatra_birth_balance;
use super::query::find_active_period;
use super::subperiod::generate_children;
use super::types::{
    DashaEntity, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, DashaSystem,
    MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL,
};
use super::vimshottari_data::VimshottariConfig;

// ── Level-0 (Mahadasha) generation ───────────────────────────────────

/// Generate all 9 level-0 (mahadasha) periods from birth inputs.
///
/// The first period is the birth-balance remainder of the starting lord's
/// full period; the rest carry full weights in cyclic order.
pub fn vimshottari_level0(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &VimshottariConfig,
) -> Vec<DashaPeriod> {
    let nak_idx = {
        let lon = normalize_360(moon_sidereal_lon);
        (lon / NAKSHATRA_SPAN).floor() as u8
    }
    .min(26);

    let start_graha_idx = config.starting_graha_idx(nak_idx) as usize;
    let entry_period = config.entry_period_days(nak_idx);
    let (_nak, balance_days, _frac) = nakshatra_birth_balance(moon_sidereal_lon, entry_period);

    let n = config.graha_sequence.len();
    let mut periods = Vec::with_capacity(n);
    let mut cursor = birth_jd;

    for offset in 0..n {
        let seq_idx = (start_graha_idx + offset) % n;
        let graha = config.graha_sequence[seq_idx];
        let full_period = config.periods_days[seq_idx];

        let duration = if offset == 0 { balance_days } else { full_period };

        let end = cursor + duration;
        periods.push(DashaPeriod {
            entity: DashaEntity::Graha(graha),
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

// ── All children of one parent ───────────────────────────────────────

/// Calculate all child periods for a single parent period.
pub fn vimshottari_children(parent: &DashaPeriod, config: &VimshottariConfig) -> Vec<DashaPeriod> {
    let child_level = match parent.level.child_level() {
        Some(l) => l,
        None => return Vec::new(),
    };
    let seq = config.entity_sequence();
    generate_children(parent, &seq, config.total_period_days, child_level, 0)
}

// ── Complete level from parent level ─────────────────────────────────

/// Calculate complete level N given all periods at level N-1.
pub fn vimshottari_complete_level(
    parent_level: &[DashaPeriod],
    config: &VimshottariConfig,
    child_level: DashaLevel,
) -> Result<Vec<DashaPeriod>, JatakaError> {
    let n = config.graha_sequence.len();
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
pub fn vimshottari_hierarchy(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &VimshottariConfig,
    max_level: u8,
) -> Result<DashaHierarchy, JatakaError> {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let level0 = vimshottari_level0(birth_jd, moon_sidereal_lon, config);
    let mut levels: Vec<Vec<DashaPeriod>> = vec![level0];

    for depth in 1..=max_level {
        let child_level = match DashaLevel::from_u8(depth) {
            Some(l) => l,
            None => break,
        };
        let parent = &levels[(depth - 1) as usize];
        let children = vimshottari_complete_level(parent, config, child_level)?;
        levels.push(children);
    }

    Ok(DashaHierarchy {
        system: DashaSystem::Vimshottari,
        birth_jd,
        levels,
    })
}

// ── Snapshot-only path ───────────────────────────────────────────────

/// Find active periods at query_jd without materializing the full hierarchy.
///
/// Generates only the chain of active periods from level 0 to max_level:
/// O(depth × sequence_length) instead of O(sequence_length^depth).
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &VimshottariConfig,
    query_jd: f64,
    max_level: u8,
) -> DashaSnapshot {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let level0 = vimshottari_level0(birth_jd, moon_sidereal_lon, config);
    let mut active_periods: Vec<DashaPeriod> = Vec::with_capacity((max_level + 1) as usize);

    let active_idx = match find_active_period(&level0, query_jd) {
        Some(idx) => idx,
        None => {
            return DashaSnapshot {
                system: DashaSystem::Vimshottari,
                query_jd,
                periods: active_periods,
            };
        }
    };
    active_periods.push(level0[active_idx]);

    let mut current_parent = level0[active_idx];
    for _depth in 1..=max_level {
        let children = vimshottari_children(&current_parent, config);
        match find_active_period(&children, query_jd) {
            Some(idx) => {
                active_periods.push(children[idx]);
                current_parent = children[idx];
            }
            None => break,
        }
    }

    DashaSnapshot {
        system: DashaSystem::Vimshottari,
        query_jd,
        periods: active_periods,
    }
}
