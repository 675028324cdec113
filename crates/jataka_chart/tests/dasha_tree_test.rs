//! Integration tests for nested dasha trees with calendar timestamps.

use jataka_base::Graha;
use jataka_base::dasha::{DAYS_PER_YEAR, DashaEntity, DashaSystem, YoginiStartRule};
use jataka_chart::{DashaNode, DashaTreeConfig, StartRuleNote, compute_dasha_tree};
use jataka_time::UtcTime;

/// One second expressed in days.
const SECOND: f64 = 1.0 / 86_400.0;

fn birth() -> UtcTime {
    UtcTime::new(1994, 11, 9, 1, 59, 0.0)
}

fn assert_partition(node: &DashaNode) {
    if node.children.is_empty() {
        return;
    }
    let first = node.children.first().unwrap();
    let last = node.children.last().unwrap();
    assert!(
        (first.start_jd - node.start_jd).abs() < SECOND,
        "first child must start at parent start"
    );
    assert!(
        (last.end_jd - node.end_jd).abs() < SECOND,
        "last child must end at parent end"
    );
    for w in node.children.windows(2) {
        assert!(
            (w[0].end_jd - w[1].start_jd).abs() < SECOND,
            "adjacent children must touch"
        );
    }
    let sum: f64 = node.children.iter().map(|c| c.duration_days()).sum();
    assert!(
        (sum - node.duration_days()).abs() < SECOND,
        "children must sum to parent within 1 second"
    );
    for child in &node.children {
        assert_partition(child);
    }
}

/// Moon at 0° → nakshatra 0 (Ashwini), fraction remaining 1.0, first
/// mahadasha exactly Ketu's full 7 years.
#[test]
fn moon_at_zero_full_ketu_balance() {
    let cfg = DashaTreeConfig {
        levels: 1,
        ..DashaTreeConfig::default()
    };
    let tree = compute_dasha_tree(DashaSystem::Vimshottari, 0.0, &birth(), &cfg).unwrap();

    assert_eq!(tree.nakshatra.nakshatra_index, 0);
    assert!(tree.nakshatra.elapsed_fraction.abs() < 1e-12);
    assert_eq!(tree.periods[0].entity, DashaEntity::Graha(Graha::Ketu));
    assert!((tree.periods[0].duration_days() - 7.0 * DAYS_PER_YEAR).abs() < SECOND);
}

/// Moon exactly on the first nakshatra boundary → Bharani with fraction 0,
/// first mahadasha the full Shukra period: the boundary never leaks into
/// the previous nakshatra.
#[test]
fn boundary_longitude_rounds_into_next_nakshatra() {
    let boundary = 360.0 / 27.0;
    let cfg = DashaTreeConfig {
        levels: 1,
        ..DashaTreeConfig::default()
    };
    let tree = compute_dasha_tree(DashaSystem::Vimshottari, boundary, &birth(), &cfg).unwrap();

    assert_eq!(tree.nakshatra.nakshatra_index, 1);
    assert!(tree.nakshatra.elapsed_fraction.abs() < 1e-12);
    assert_eq!(tree.periods[0].entity, DashaEntity::Graha(Graha::Shukra));
    assert!((tree.periods[0].duration_days() - 20.0 * DAYS_PER_YEAR).abs() < SECOND);
}

/// The partition invariant holds at every level of a depth-4 Vimshottari
/// tree, to 1-second tolerance.
#[test]
fn vimshottari_partition_to_depth_4() {
    let cfg = DashaTreeConfig {
        levels: 4,
        ..DashaTreeConfig::default()
    };
    let tree = compute_dasha_tree(DashaSystem::Vimshottari, 211.125, &birth(), &cfg).unwrap();
    for maha in &tree.periods {
        assert_partition(maha);
    }
    // Full span: between 120-19=101 and 120 years (first maha is a balance)
    let total: f64 = tree.periods.iter().map(|p| p.duration_days()).sum();
    assert!(total <= 120.0 * DAYS_PER_YEAR + SECOND);
    assert!(total > 101.0 * DAYS_PER_YEAR);
}

/// Same for a Yogini tree: 8 mahadashas spanning at most 36 years.
#[test]
fn yogini_partition_and_span() {
    let cfg = DashaTreeConfig {
        levels: 3,
        ..DashaTreeConfig::default()
    };
    let tree = compute_dasha_tree(DashaSystem::Yogini, 100.0, &birth(), &cfg).unwrap();
    assert_eq!(tree.periods.len(), 8);
    for maha in &tree.periods {
        assert_partition(maha);
        assert_eq!(maha.children.len(), 8);
    }
    let total: f64 = tree.periods.iter().map(|p| p.duration_days()).sum();
    assert!(total <= 36.0 * DAYS_PER_YEAR + SECOND);
}

/// Node timestamps render as ISO-8601 and agree with the JD bounds.
#[test]
fn timestamps_are_iso_8601() {
    let cfg = DashaTreeConfig {
        levels: 2,
        ..DashaTreeConfig::default()
    };
    let b = birth();
    let tree = compute_dasha_tree(DashaSystem::Vimshottari, 0.0, &b, &cfg).unwrap();

    let first = &tree.periods[0];
    let rendered = first.start.to_string();
    assert!(rendered.starts_with("1994-11-09T01:5"), "got {rendered}");
    assert!(rendered.ends_with('Z'));

    // Round-tripping the UtcTime through JD stays within a second
    for node in &tree.periods {
        assert!((node.start.to_jd() - node.start_jd).abs() < SECOND);
        assert!((node.end.to_jd() - node.end_jd).abs() < SECOND);
    }
}

/// Consecutive mahadasha boundaries share the same rendered timestamp.
#[test]
fn adjacent_boundaries_render_identically() {
    let cfg = DashaTreeConfig {
        levels: 1,
        ..DashaTreeConfig::default()
    };
    let tree = compute_dasha_tree(DashaSystem::Vimshottari, 77.7, &birth(), &cfg).unwrap();
    for w in tree.periods.windows(2) {
        assert_eq!(w[0].end.to_string(), w[1].start.to_string());
    }
}

/// The Yogini start-rule override is honored and noted as custom.
#[test]
fn yogini_custom_start_noted() {
    let mut cfg = DashaTreeConfig {
        levels: 2,
        ..DashaTreeConfig::default()
    };
    let default_tree = compute_dasha_tree(DashaSystem::Yogini, 0.0, &birth(), &cfg).unwrap();
    assert_eq!(default_tree.start_rule, StartRuleNote::Default);
    assert_eq!(default_tree.start_rule.as_str(), "default");
    // Ashwini maps to Bhramari (index 3) by default
    assert_eq!(default_tree.periods[0].entity, DashaEntity::Yogini(3));

    cfg.yogini_start = YoginiStartRule::FixedYogini(6); // Siddha
    let custom_tree = compute_dasha_tree(DashaSystem::Yogini, 0.0, &birth(), &cfg).unwrap();
    assert_eq!(custom_tree.start_rule, StartRuleNote::Custom);
    assert_eq!(custom_tree.periods[0].entity, DashaEntity::Yogini(6));
    // Full 7-year Siddha balance at a nakshatra start
    assert!((custom_tree.periods[0].duration_days() - 7.0 * DAYS_PER_YEAR).abs() < SECOND);
}

/// Invalid inputs are rejected before any computation: no partial trees.
#[test]
fn invalid_inputs_yield_no_partial_results() {
    let cfg = DashaTreeConfig::default();
    assert!(compute_dasha_tree(DashaSystem::Yogini, 360.0, &birth(), &cfg).is_err());
    assert!(compute_dasha_tree(DashaSystem::Yogini, f64::NAN, &birth(), &cfg).is_err());
    let bad_birth = UtcTime::new(1994, 2, 30, 0, 0, 0.0);
    assert!(compute_dasha_tree(DashaSystem::Yogini, 10.0, &bad_birth, &cfg).is_err());
}

/// Trees are deterministic: identical inputs give identical output.
#[test]
fn tree_computation_is_pure() {
    let cfg = DashaTreeConfig {
        levels: 3,
        ..DashaTreeConfig::default()
    };
    let a = compute_dasha_tree(DashaSystem::Vimshottari, 123.456, &birth(), &cfg).unwrap();
    let b = compute_dasha_tree(DashaSystem::Vimshottari, 123.456, &birth(), &cfg).unwrap();
    assert_eq!(a, b);
}
