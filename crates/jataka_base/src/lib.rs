//! Pure Vedic chart math: grahas, rashis, nakshatras, whole-sign houses,
//! dignities, and dasha (planetary period) engines.
//!
//! Everything in this crate is a deterministic function of its inputs: no
//! I/O, no clocks, no shared state. The chart layer (`jataka_chart`) builds
//! provider-facing structures on top of these primitives.

pub mod bhava;
pub mod dasha;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use bhava::{
    DUSTHANA_BHAVAS, KENDRA_BHAVAS, Lordship, TRIKONA_BHAVAS, bhava_from_rashi, is_dusthana,
    is_kendra, is_trikona, lordship_bhavas, rashi_of_bhava,
};
pub use dignity::{
    Dignity, debilitation_rashi, dignity_in_rashi, exaltation_rashi, own_rashis,
};
pub use error::JatakaError;
pub use graha::{ALL_GRAHAS, Graha, NATURAL_BENEFICS, SAPTA_GRAHAS, rashi_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use util::{normalize_360, within_arc};
