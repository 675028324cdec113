//! Core types for dasha (planetary period) calculations.
//!
//! Dashas are hierarchical time-period systems (BPHS). This module defines
//! the structures shared by the Vimshottari and Yogini engines.

use crate::graha::Graha;

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Maximum dasha depth. Levels 0-4 supported.
pub const MAX_DASHA_LEVEL: u8 = 4;

/// Default max level for queries (keeps output manageable).
pub const DEFAULT_DASHA_LEVEL: u8 = 2;

/// Hard cap on periods per level to prevent combinatorial explosion.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// 5 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DashaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// What entity rules a dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashaEntity {
    /// Vimshottari periods are ruled by grahas.
    Graha(Graha),
    /// Yogini periods are ruled by yoginis (0-based, 0..7).
    Yogini(u8),
}

impl DashaEntity {
    /// Display name of the ruling entity.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Graha(g) => g.name(),
            Self::Yogini(y) => super::yogini_data::yogini_name(*y),
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// The entity ruling this period.
    pub entity: DashaEntity,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index into parent level's array (0 for level 0).
    pub parent_idx: u32,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// The two dasha systems computed by this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DashaSystem {
    /// 120-year cycle, 9 graha lords.
    Vimshottari = 0,
    /// 36-year cycle, 8 yoginis.
    Yogini = 1,
}

/// Both systems in order.
pub const ALL_DASHA_SYSTEMS: [DashaSystem; 2] = [DashaSystem::Vimshottari, DashaSystem::Yogini];

impl DashaSystem {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Yogini => "Yogini",
        }
    }
}

/// Complete hierarchy for a dasha system.
#[derive(Debug, Clone)]
pub struct DashaHierarchy {
    /// Which system produced this hierarchy.
    pub system: DashaSystem,
    /// Birth JD UTC.
    pub birth_jd: f64,
    /// Levels: levels[0]=mahadasha, levels[1]=antardasha, etc.
    pub levels: Vec<Vec<DashaPeriod>>,
}

/// Active periods at a specific date (one per requested level).
#[derive(Debug, Clone)]
pub struct DashaSnapshot {
    /// Which system produced this snapshot.
    pub system: DashaSystem,
    /// The queried JD UTC.
    pub query_jd: f64,
    /// Active periods: periods[0]=active mahadasha, [1]=active antardasha, etc.
    pub periods: Vec<DashaPeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dasha_level_from_u8() {
        assert_eq!(DashaLevel::from_u8(0), Some(DashaLevel::Mahadasha));
        assert_eq!(DashaLevel::from_u8(4), Some(DashaLevel::Pranadasha));
        assert_eq!(DashaLevel::from_u8(5), None);
    }

    #[test]
    fn dasha_level_child() {
        assert_eq!(
            DashaLevel::Mahadasha.child_level(),
            Some(DashaLevel::Antardasha)
        );
        assert_eq!(DashaLevel::Pranadasha.child_level(), None);
    }

    #[test]
    fn entity_names() {
        assert_eq!(DashaEntity::Graha(Graha::Ketu).name(), "Ketu");
        assert_eq!(DashaEntity::Yogini(0).name(), "Mangala");
    }

    #[test]
    fn system_names() {
        assert_eq!(DashaSystem::Vimshottari.name(), "Vimshottari");
        assert_eq!(DashaSystem::Yogini.name(), "Yogini");
        assert_eq!(ALL_DASHA_SYSTEMS.len(), 2);
    }

    #[test]
    fn days_per_year_constant() {
        assert!((DAYS_PER_YEAR - 365.25).abs() < 1e-15);
    }
}
