//! Active-period search over dasha levels and hierarchies.

use super::types::{DashaHierarchy, DashaPeriod, DashaSnapshot};

/// Find the index of the period containing `query_jd` in a sorted,
/// contiguous level.
///
/// Periods are half-open `[start, end)`. Returns None when the query falls
/// before the first period or at/after the last period's end.
pub fn find_active_period(periods: &[DashaPeriod], query_jd: f64) -> Option<usize> {
    periods
        .iter()
        .position(|p| p.start_jd <= query_jd && query_jd < p.end_jd)
}

/// Extract the active chain at `query_jd` from a fully materialized
/// hierarchy.
pub fn snapshot_from_hierarchy(hierarchy: &DashaHierarchy, query_jd: f64) -> DashaSnapshot {
    let mut active = Vec::with_capacity(hierarchy.levels.len());
    for level in &hierarchy.levels {
        match find_active_period(level, query_jd) {
            Some(idx) => active.push(level[idx]),
            None => break,
        }
    }
    DashaSnapshot {
        system: hierarchy.system,
        query_jd,
        periods: active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::{DashaEntity, DashaLevel, DashaSystem};
    use crate::graha::Graha;

    fn period(start: f64, end: f64) -> DashaPeriod {
        DashaPeriod {
            entity: DashaEntity::Graha(Graha::Surya),
            start_jd: start,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: 1,
            parent_idx: 0,
        }
    }

    #[test]
    fn finds_containing_period() {
        let periods = vec![period(0.0, 10.0), period(10.0, 30.0), period(30.0, 35.0)];
        assert_eq!(find_active_period(&periods, 5.0), Some(0));
        assert_eq!(find_active_period(&periods, 10.0), Some(1));
        assert_eq!(find_active_period(&periods, 34.9), Some(2));
    }

    #[test]
    fn outside_range_is_none() {
        let periods = vec![period(0.0, 10.0)];
        assert_eq!(find_active_period(&periods, -1.0), None);
        assert_eq!(find_active_period(&periods, 10.0), None);
        assert_eq!(find_active_period(&[], 5.0), None);
    }

    #[test]
    fn boundary_belongs_to_next() {
        let periods = vec![period(0.0, 10.0), period(10.0, 20.0)];
        assert_eq!(find_active_period(&periods, 10.0), Some(1));
    }

    #[test]
    fn snapshot_walks_levels() {
        let h = DashaHierarchy {
            system: DashaSystem::Vimshottari,
            birth_jd: 0.0,
            levels: vec![
                vec![period(0.0, 100.0)],
                vec![period(0.0, 40.0), period(40.0, 100.0)],
            ],
        };
        let snap = snapshot_from_hierarchy(&h, 50.0);
        assert_eq!(snap.periods.len(), 2);
        assert!((snap.periods[1].start_jd - 40.0).abs() < 1e-12);
    }
}
