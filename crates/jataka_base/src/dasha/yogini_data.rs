//! Configuration data for the Yogini dasha system.
//!
//! 8 Yoginis, 36-year total cycle, period weights 1..8 years. The default
//! nakshatra-to-yogini map is the widely used `(nakshatra + 3) mod 8` rule,
//! but traditions disagree on the entry point, so an explicit start-rule
//! override is supported and surfaced to callers.

use crate::error::JatakaError;
use crate::graha::Graha;

use super::types::{DAYS_PER_YEAR, DashaEntity};

/// Yogini names (0-indexed).
pub const YOGINI_NAMES: [&str; 8] = [
    "Mangala", "Pingala", "Dhanya", "Bhramari", "Bhadrika", "Ulka", "Siddha", "Sankata",
];

/// Graha lord for each Yogini.
pub const YOGINI_GRAHAS: [Graha; 8] = [
    Graha::Chandra,
    Graha::Surya,
    Graha::Guru,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Shani,
    Graha::Shukra,
    Graha::Rahu,
];

/// Periods in years (1..8). Sum = 36.
pub const YOGINI_YEARS: [f64; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

/// How the starting yogini is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YoginiStartRule {
    /// Default: the `(nakshatra_1_indexed + 3) mod 8` map (0 maps to Sankata).
    NakshatraMap,
    /// Tradition override: start from this yogini (0-based index) regardless
    /// of the nakshatra map. The birth balance still comes from the Moon's
    /// elapsed fraction within its nakshatra.
    FixedYogini(u8),
}

impl YoginiStartRule {
    /// Whether this is the default map rule.
    pub const fn is_default(self) -> bool {
        matches!(self, Self::NakshatraMap)
    }
}

/// Configuration for the Yogini dasha system.
#[derive(Debug, Clone)]
pub struct YoginiDashaConfig {
    /// Yogini sequence (8 entries).
    pub yogini_sequence: [DashaEntity; 8],
    /// Period in days for each yogini.
    pub periods_days: [f64; 8],
    /// Total period in days.
    pub total_period_days: f64,
    /// Nakshatra (0-26) → yogini index (0-7) for the default start rule.
    pub nakshatra_to_yogini_idx: [u8; 27],
}

impl YoginiDashaConfig {
    /// Get the entity/period pairs as a flat sequence.
    pub fn entity_sequence(&self) -> Vec<(DashaEntity, f64)> {
        self.yogini_sequence
            .iter()
            .zip(self.periods_days.iter())
            .map(|(&e, &p)| (e, p))
            .collect()
    }

    /// Get the starting yogini index for a given nakshatra (default map).
    pub fn starting_yogini_idx(&self, nakshatra_index: u8) -> u8 {
        self.nakshatra_to_yogini_idx[nakshatra_index.min(26) as usize]
    }

    /// Get the entry period in days for a starting yogini.
    pub fn entry_period_days(&self, yogini_index: u8) -> f64 {
        self.periods_days[yogini_index.min(7) as usize]
    }
}

/// Build the 27-nakshatra-to-yogini mapping.
fn build_nak_map() -> [u8; 27] {
    let mut map = [0u8; 27];
    for (i, slot) in map.iter_mut().enumerate() {
        // 1-indexed nakshatra: nak_1 = i + 1
        // remainder = (nak_1 + 3) % 8
        // yogini_idx = if remainder == 0 { 7 } else { remainder - 1 }
        let nak_1 = (i + 1) as u8;
        let remainder = (nak_1 + 3) % 8;
        *slot = if remainder == 0 { 7 } else { remainder - 1 };
    }
    map
}

/// Create the default Yogini dasha configuration.
pub fn yogini_config() -> YoginiDashaConfig {
    let mut periods_days = [0.0f64; 8];
    for (slot, &y) in periods_days.iter_mut().zip(YOGINI_YEARS.iter()) {
        *slot = y * DAYS_PER_YEAR;
    }
    let total = periods_days.iter().sum();
    let mut yogini_sequence = [DashaEntity::Yogini(0); 8];
    for (i, slot) in yogini_sequence.iter_mut().enumerate() {
        *slot = DashaEntity::Yogini(i as u8);
    }

    YoginiDashaConfig {
        yogini_sequence,
        periods_days,
        total_period_days: total,
        nakshatra_to_yogini_idx: build_nak_map(),
    }
}

/// Get the Yogini name for a 0-based index.
pub fn yogini_name(idx: u8) -> &'static str {
    if (idx as usize) < YOGINI_NAMES.len() {
        YOGINI_NAMES[idx as usize]
    } else {
        "Unknown"
    }
}

/// Get the graha lord for a Yogini.
pub fn yogini_graha(idx: u8) -> Option<Graha> {
    YOGINI_GRAHAS.get(idx as usize).copied()
}

/// Resolve a yogini name (case-insensitive) to its 0-based index.
///
/// Used to honor `start_from` tradition hints supplied by callers.
pub fn yogini_index_by_name(name: &str) -> Result<u8, JatakaError> {
    let needle = name.trim().to_lowercase();
    YOGINI_NAMES
        .iter()
        .position(|n| n.to_lowercase() == needle)
        .map(|i| i as u8)
        .ok_or(JatakaError::InvalidInput("unknown yogini name"))
}
