//! Dasha (planetary period) calculations.
//!
//! Implements the two nakshatra-anchored systems used by the chart layer:
//! - Vimshottari: 9 graha lords, 120-year cycle
//! - Yogini: 8 yoginis, 36-year cycle, with a pluggable start rule
//!
//! Each system supports 5 hierarchical levels (Mahadasha through Pranadasha).
//! All period math runs in Julian Days; the chart layer renders timestamps.

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;
pub mod vimshottari_data;
pub mod yogini;
pub mod yogini_data;

pub use balance::nakshatra_birth_balance;
pub use query::{find_active_period, snapshot_from_hierarchy};
pub use subperiod::{
    generate_children, proportional_children, self_first_sequence, snap_last_child_end,
};
pub use types::{
    ALL_DASHA_SYSTEMS, DAYS_PER_YEAR, DEFAULT_DASHA_LEVEL, DashaEntity, DashaHierarchy, DashaLevel,
    DashaPeriod, DashaSnapshot, DashaSystem, MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL,
};
pub use vimshottari::{
    vimshottari_children, vimshottari_complete_level, vimshottari_hierarchy, vimshottari_level0,
    vimshottari_snapshot,
};
pub use vimshottari_data::{VIMSHOTTARI_GRAHAS, VIMSHOTTARI_YEARS, VimshottariConfig, vimshottari_config};
pub use yogini::{
    yogini_children, yogini_complete_level, yogini_hierarchy, yogini_level0,
    yogini_level0_with_start, yogini_snapshot,
};
pub use yogini_data::{
    YOGINI_GRAHAS, YOGINI_NAMES, YOGINI_YEARS, YoginiDashaConfig, YoginiStartRule, yogini_config,
    yogini_graha, yogini_index_by_name, yogini_name,
};
