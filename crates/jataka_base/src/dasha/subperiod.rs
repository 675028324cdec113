//! Shared sub-period generation for dasha engines.
//!
//! Children divide a parent proportionally to each lord's full-cycle weight
//! (`child = parent × weight / total`), walking the fixed lord cycle
//! starting from the parent's own entity ("self-first"). Durations therefore
//! compound multiplicatively down the levels; nothing is recomputed from the
//! top.

use super::types::{DashaEntity, DashaLevel, DashaPeriod};

/// Snap the last child's end_jd to the parent's end_jd to absorb
/// floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Rotate a lord sequence so it begins at the parent's own entity.
///
/// If the parent entity is not in the sequence (cannot happen with the
/// built-in configs), the sequence is returned unrotated.
pub fn self_first_sequence(
    sequence: &[(DashaEntity, f64)],
    parent_entity: DashaEntity,
) -> Vec<(DashaEntity, f64)> {
    let n = sequence.len();
    let start = sequence
        .iter()
        .position(|(e, _)| *e == parent_entity)
        .unwrap_or(0);

    let mut result = Vec::with_capacity(n);
    for i in 0..n {
        result.push(sequence[(start + i) % n]);
    }
    result
}

/// Generate proportional children for a parent period.
///
/// `sequence`: ordered entities and their full-cycle periods (in days),
/// already rotated to the desired starting entity.
/// `total_period_days`: sum of all sequence periods.
pub fn proportional_children(
    parent: &DashaPeriod,
    sequence: &[(DashaEntity, f64)],
    total_period_days: f64,
    child_level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let parent_duration = parent.end_jd - parent.start_jd;
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = parent.start_jd;

    for (order_0, &(entity, full_period)) in sequence.iter().enumerate() {
        let duration = (full_period / total_period_days) * parent_duration;
        let end = cursor + duration;
        children.push(DashaPeriod {
            entity,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: (order_0 as u16) + 1,
            parent_idx,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

/// Generate self-first proportional children for a parent period.
pub fn generate_children(
    parent: &DashaPeriod,
    sequence: &[(DashaEntity, f64)],
    total_period_days: f64,
    child_level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let seq = self_first_sequence(sequence, parent.entity);
    proportional_children(parent, &seq, total_period_days, child_level, parent_idx)
}
