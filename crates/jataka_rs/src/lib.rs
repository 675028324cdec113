//! Convenience wrapper for the jataka chart-analysis engine.
//!
//! Accepts the upstream layers' camelCase JSON shapes (birth profile, raw
//! provider positions, tradition hints) and produces a complete,
//! serializable analysis: normalized positions with authoritative houses,
//! the provider-mismatch list, yoga/dosha matches, and nested Vimshottari
//! and Yogini dasha trees with ISO-8601 timestamps.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use jataka_rs::*;
//!
//! let request: KundaliRequest = serde_json::from_str(payload)?;
//! let analysis = analyze(&request)?;
//! println!("{}", serde_json::to_string_pretty(&analysis)?);
//! ```

pub mod convenience;
pub mod error;
pub mod request;

// Primary re-exports: users should only need `use jataka_rs::*`
pub use convenience::{
    DashaNodeOut, DashaNotes, DashaTreeOut, KundaliAnalysis, MatchOut, MismatchOut, PositionOut,
    VargaMatchOut, analyze,
};
pub use error::KundaliError;
pub use request::{
    AnalysisConfig, BirthProfile, KundaliRequest, RawPositionInput, SignInput, TraditionHints,
    VargaInput, VargaPositionInput,
};

// Re-export the chart and base types convenience callers reach for.
pub use jataka_base::dasha::{DashaLevel, DashaSystem, YoginiStartRule};
pub use jataka_base::{Graha, Nakshatra, Rashi};
pub use jataka_chart::{
    BhavaMismatch, ChartError, DashaNode, DashaTree, DashaTreeConfig, GrahaPosition,
    RawGrahaPosition, ResolvedChart, RuleContext, SignValue, StartRuleNote, Varga, VargaChart,
    YogaReport, compute_dasha_tree, dasha_snapshot_at, detect_all, resolve_chart,
};
pub use jataka_time::UtcTime;
