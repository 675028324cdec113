//! Chart resolution, yoga/dosha detection, and dasha-tree orchestration.
//!
//! This crate is the bridge between raw provider data and the pure-math
//! primitives in `jataka_base`:
//! - `chart`: normalize provider positions, derive whole-sign houses, record
//!   provider/derived house mismatches as first-class values
//! - `yoga`: evaluate the fixed rule catalog over a resolved chart, with
//!   optional divisional-chart reinforcement
//! - `dasha`: build nested, calendar-stamped Vimshottari/Yogini period trees

pub mod chart;
pub mod chart_types;
pub mod dasha;
pub mod error;
pub mod rules;
pub mod yoga;
pub mod yoga_types;

pub use chart::{resolve_chart, resolve_position, resolve_sign};
pub use chart_types::{BhavaMismatch, GrahaPosition, RawGrahaPosition, ResolvedChart, SignValue};
pub use dasha::{
    DashaNode, DashaTree, DashaTreeConfig, StartRuleNote, compute_dasha_tree, dasha_snapshot_at,
};
pub use error::ChartError;
pub use yoga::{RULE_CATALOG, Rule, detect_all};
pub use yoga_types::{
    AspectFact, Factor, MatchKind, RuleContext, RuleMatch, Varga, VargaChart, VargaMatch,
    YogaReport,
};
