//! Const configuration data for the Vimshottari dasha system.
//!
//! 9 graha lords, 120-year total cycle. The lord sequence, the year weights,
//! and the nakshatra-to-lord mapping are fixed by BPHS convention.

use crate::graha::Graha;

use super::types::{DAYS_PER_YEAR, DashaEntity};

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Vimshottari periods in years. Sum = 120.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Nakshatra-to-lord mapping: the 9-lord cycle repeats every 9 nakshatras
/// (Ashwini→Ketu, Bharani→Shukra, ... and again from Magha and Mula).
const VIMSHOTTARI_NAK_MAP: [u8; 27] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, // Ashwini..Ashlesha
    0, 1, 2, 3, 4, 5, 6, 7, 8, // Magha..Jyeshtha
    0, 1, 2, 3, 4, 5, 6, 7, 8, // Mula..Revati
];

/// Configuration for the Vimshottari dasha system.
#[derive(Debug, Clone)]
pub struct VimshottariConfig {
    /// Graha sequence in dasha order.
    pub graha_sequence: [Graha; 9],
    /// Full-cycle period in days for each graha in sequence.
    pub periods_days: [f64; 9],
    /// Total period in days (sum of periods_days).
    pub total_period_days: f64,
    /// Nakshatra (0-26) to graha_sequence index mapping.
    pub nakshatra_to_graha_idx: [u8; 27],
}

impl VimshottariConfig {
    /// Get the entity/period pairs as a flat sequence suitable for
    /// sub-period generation.
    pub fn entity_sequence(&self) -> Vec<(DashaEntity, f64)> {
        self.graha_sequence
            .iter()
            .zip(self.periods_days.iter())
            .map(|(&g, &p)| (DashaEntity::Graha(g), p))
            .collect()
    }

    /// Get the starting graha index for a given nakshatra.
    pub fn starting_graha_idx(&self, nakshatra_index: u8) -> u8 {
        self.nakshatra_to_graha_idx[nakshatra_index.min(26) as usize]
    }

    /// Get the entry period in days for the starting graha of a nakshatra.
    pub fn entry_period_days(&self, nakshatra_index: u8) -> f64 {
        self.periods_days[self.starting_graha_idx(nakshatra_index) as usize]
    }
}

/// Create the Vimshottari dasha configuration.
pub fn vimshottari_config() -> VimshottariConfig {
    let mut periods_days = [0.0f64; 9];
    for (slot, &y) in periods_days.iter_mut().zip(VIMSHOTTARI_YEARS.iter()) {
        *slot = y * DAYS_PER_YEAR;
    }
    let total = periods_days.iter().sum();
    VimshottariConfig {
        graha_sequence: VIMSHOTTARI_GRAHAS,
        periods_days,
        total_period_days: total,
        nakshatra_to_graha_idx: VIMSHOTTARI_NAK_MAP,
    }
}
