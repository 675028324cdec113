//! Integration tests for the pure-math dasha engines.

use jataka_base::Graha;
use jataka_base::dasha::{
    DAYS_PER_YEAR, DashaEntity, DashaLevel, DashaSystem, VIMSHOTTARI_YEARS, YOGINI_YEARS,
    YoginiStartRule, find_active_period, snapshot_from_hierarchy, vimshottari_children,
    vimshottari_config, vimshottari_hierarchy, vimshottari_level0, vimshottari_snapshot,
    yogini_config, yogini_hierarchy, yogini_level0, yogini_level0_with_start,
};

const J2000: f64 = 2_451_545.0;

/// The canonical weights sum to the full cycles: 120 and 36 years.
#[test]
fn weight_conservation() {
    let v: f64 = VIMSHOTTARI_YEARS.iter().sum();
    assert!((v - 120.0).abs() < 1e-12);
    let y: f64 = YOGINI_YEARS.iter().sum();
    assert!((y - 36.0).abs() < 1e-12);
}

/// Moon at 0° Aries (Ashwini, index 0) → Ketu mahadasha with the full 7y.
#[test]
fn vimshottari_moon_at_zero() {
    let cfg = vimshottari_config();
    let level0 = vimshottari_level0(J2000, 0.0, &cfg);
    assert_eq!(level0.len(), 9);

    assert_eq!(level0[0].entity, DashaEntity::Graha(Graha::Ketu));
    assert_eq!(level0[0].level, DashaLevel::Mahadasha);
    assert_eq!(level0[0].order, 1);

    let ketu_days = 7.0 * DAYS_PER_YEAR;
    assert!(
        (level0[0].duration_days() - ketu_days).abs() < 0.01,
        "Ketu mahadasha should be the full 7y"
    );
    assert!((level0[0].start_jd - J2000).abs() < 1e-10);

    // Second period is Shukra with the full 20y
    assert_eq!(level0[1].entity, DashaEntity::Graha(Graha::Shukra));
    assert!((level0[1].duration_days() - 20.0 * DAYS_PER_YEAR).abs() < 0.01);
}

/// Moon at a nakshatra boundary starts the *next* lord with a full balance.
#[test]
fn vimshottari_boundary_starts_next_lord() {
    let cfg = vimshottari_config();
    let span = 360.0 / 27.0;
    let level0 = vimshottari_level0(J2000, span, &cfg);
    // Bharani → Shukra, full 20 years
    assert_eq!(level0[0].entity, DashaEntity::Graha(Graha::Shukra));
    assert!((level0[0].duration_days() - 20.0 * DAYS_PER_YEAR).abs() < 1e-6);
}

/// Total level-0 span is exactly 120 years when the balance is full.
#[test]
fn vimshottari_total_span_120y_at_zero() {
    let cfg = vimshottari_config();
    let level0 = vimshottari_level0(J2000, 0.0, &cfg);
    let total_span = level0.last().unwrap().end_jd - level0.first().unwrap().start_jd;
    assert!((total_span - 120.0 * DAYS_PER_YEAR).abs() < 1e-6);
}

/// Mid-nakshatra birth shortens only the first mahadasha.
#[test]
fn vimshottari_partial_balance_shortens_first_only() {
    let cfg = vimshottari_config();
    let level0 = vimshottari_level0(J2000, 123.456, &cfg);
    let total_span = level0.last().unwrap().end_jd - level0.first().unwrap().start_jd;
    assert!(total_span > 0.0);
    assert!(total_span < 120.0 * DAYS_PER_YEAR);

    // All non-first periods carry their full weights
    for p in &level0[1..] {
        let DashaEntity::Graha(g) = p.entity else {
            panic!("vimshottari periods are graha-ruled");
        };
        let seq_idx = cfg.graha_sequence.iter().position(|&x| x == g).unwrap();
        assert!(
            (p.duration_days() - cfg.periods_days[seq_idx]).abs() < 1e-9,
            "{} should have its full period",
            g.name()
        );
    }
}

/// Partition property at every level of a depth-3 hierarchy: children sum
/// to their parent, first child starts at parent start, last child ends at
/// parent end, and adjacent children touch exactly.
#[test]
fn vimshottari_partition_property_all_levels() {
    let cfg = vimshottari_config();
    let h = vimshottari_hierarchy(J2000, 211.5, &cfg, 3).unwrap();

    for depth in 1..h.levels.len() {
        let parents = &h.levels[depth - 1];
        let children = &h.levels[depth];
        let per_parent = children.len() / parents.len();
        assert_eq!(per_parent, 9);

        for (pidx, parent) in parents.iter().enumerate() {
            let group = &children[pidx * per_parent..(pidx + 1) * per_parent];
            assert!((group[0].start_jd - parent.start_jd).abs() < 1e-9);
            assert!((group[per_parent - 1].end_jd - parent.end_jd).abs() < 1e-9);
            for w in group.windows(2) {
                assert!((w[0].end_jd - w[1].start_jd).abs() < 1e-9);
            }
            let sum: f64 = group.iter().map(|c| c.duration_days()).sum();
            assert!(
                (sum - parent.duration_days()).abs() < 1e-6,
                "children must sum to parent at depth {depth}"
            );
            // Self-first convention
            assert_eq!(group[0].entity, parent.entity);
        }
    }
}

/// Antardasha durations follow parent × weight / 120 exactly.
#[test]
fn vimshottari_antardasha_proportions() {
    let cfg = vimshottari_config();
    let level0 = vimshottari_level0(J2000, 0.0, &cfg);
    let rahu = level0
        .iter()
        .find(|p| p.entity == DashaEntity::Graha(Graha::Rahu))
        .unwrap();
    let children = vimshottari_children(rahu, &cfg);
    assert_eq!(children.len(), 9);
    // Rahu-Rahu: 18 × 18/120 years
    let expected = 18.0 * 18.0 / 120.0 * DAYS_PER_YEAR;
    assert!((children[0].duration_days() - expected).abs() < 1e-6);
    // Rahu-Guru (next in cycle): 18 × 16/120 years
    assert_eq!(children[1].entity, DashaEntity::Graha(Graha::Guru));
    let expected = 18.0 * 16.0 / 120.0 * DAYS_PER_YEAR;
    assert!((children[1].duration_days() - expected).abs() < 1e-6);
}

/// Yogini level-0 spans 36 years from a nakshatra boundary and partitions
/// cleanly one level down.
#[test]
fn yogini_level0_and_children() {
    let cfg = yogini_config();
    let level0 = yogini_level0(J2000, 0.0, &cfg);
    assert_eq!(level0.len(), 8);
    // Ashwini → Bhramari (index 3)
    assert_eq!(level0[0].entity, DashaEntity::Yogini(3));

    let total: f64 = level0.iter().map(|p| p.duration_days()).sum();
    assert!((total - 36.0 * DAYS_PER_YEAR).abs() < 1e-6);
}

/// Yogini start-rule override is honored exactly.
#[test]
fn yogini_custom_start() {
    let cfg = yogini_config();
    let default = yogini_level0(J2000, 0.0, &cfg);
    let custom = yogini_level0_with_start(J2000, 0.0, &cfg, YoginiStartRule::FixedYogini(0));
    assert_ne!(default[0].entity, custom[0].entity);
    assert_eq!(custom[0].entity, DashaEntity::Yogini(0));
    // Mangala's full 1-year balance at a nakshatra start
    assert!((custom[0].duration_days() - DAYS_PER_YEAR).abs() < 1e-6);
}

/// Yogini hierarchy at depth 4 has 8^5 leaf periods and respects the cap.
#[test]
fn yogini_deep_hierarchy() {
    let cfg = yogini_config();
    let h = yogini_hierarchy(J2000, 77.0, &cfg, 4, YoginiStartRule::NakshatraMap).unwrap();
    assert_eq!(h.levels.len(), 5);
    assert_eq!(h.levels[4].len(), 8usize.pow(5));
}

/// Snapshot path agrees with the materialized hierarchy for both systems.
#[test]
fn snapshots_agree_with_hierarchies() {
    let query = J2000 + 5_000.0;

    let vcfg = vimshottari_config();
    let vh = vimshottari_hierarchy(J2000, 33.3, &vcfg, 2).unwrap();
    let vsnap = vimshottari_snapshot(J2000, 33.3, &vcfg, query, 2);
    let from_h = snapshot_from_hierarchy(&vh, query);
    assert_eq!(vsnap.periods.len(), from_h.periods.len());
    for (a, b) in vsnap.periods.iter().zip(from_h.periods.iter()) {
        assert_eq!(a.entity, b.entity);
        assert!((a.start_jd - b.start_jd).abs() < 1e-6);
    }
    assert_eq!(vsnap.system, DashaSystem::Vimshottari);
}

/// find_active_period treats boundaries half-open.
#[test]
fn active_period_boundaries() {
    let cfg = vimshottari_config();
    let level0 = vimshottari_level0(J2000, 0.0, &cfg);
    let boundary = level0[0].end_jd;
    let idx = find_active_period(&level0, boundary).unwrap();
    assert_eq!(idx, 1);
}
