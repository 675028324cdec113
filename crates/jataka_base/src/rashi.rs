//! Rashi (zodiac sign) enum, multilingual name resolution, and DMS display.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Provider data names signs in
//! English or Nepali (Devanagari or romanized), with a handful of common
//! alternate spellings; all of them resolve to the same canonical enum.

use crate::error::JatakaError;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Nepali (Devanagari) name of the rashi.
    pub const fn nepali_name(self) -> &'static str {
        match self {
            Self::Mesha => "मेष",
            Self::Vrishabha => "वृष",
            Self::Mithuna => "मिथुन",
            Self::Karka => "कर्कट",
            Self::Simha => "सिंह",
            Self::Kanya => "कन्या",
            Self::Tula => "तुला",
            Self::Vrischika => "वृश्चिक",
            Self::Dhanu => "धनु",
            Self::Makara => "मकर",
            Self::Kumbha => "कुम्भ",
            Self::Meena => "मीन",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Create from a 0-based index.
    pub fn from_index(idx: u8) -> Option<Self> {
        ALL_RASHIS.get(idx as usize).copied()
    }

    /// Create from a 1-based sign number.
    pub fn from_number(number: u8) -> Option<Self> {
        if number >= 1 { Self::from_index(number - 1) } else { None }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }

    /// Resolve a provider sign name to a rashi.
    ///
    /// Accepts English, Sanskrit-roman, and Nepali (Devanagari) names plus
    /// documented romanized alternates, case-insensitively for ASCII; a
    /// bare "1".."12" digit string also resolves.
    pub fn parse(input: &str) -> Result<Self, JatakaError> {
        let name = input.trim().to_lowercase();
        if let Ok(n) = name.parse::<u8>() {
            return Self::from_number(n).ok_or_else(|| JatakaError::UnknownSign(input.to_string()));
        }
        match name.as_str() {
            "aries" | "mesha" | "mesh" | "मेष" => Ok(Self::Mesha),
            "taurus" | "vrishabha" | "vrish" | "brish" | "brishabha" | "वृष" | "वृषभ" => {
                Ok(Self::Vrishabha)
            }
            "gemini" | "mithuna" | "mithun" | "मिथुन" => Ok(Self::Mithuna),
            "cancer" | "karka" | "karkat" | "karkata" | "कर्कट" | "कर्क" => Ok(Self::Karka),
            "leo" | "simha" | "singha" | "singh" | "सिंह" => Ok(Self::Simha),
            "virgo" | "kanya" | "कन्या" => Ok(Self::Kanya),
            "libra" | "tula" | "तुला" => Ok(Self::Tula),
            "scorpio" | "vrischika" | "vrishchik" | "brischik" | "वृश्चिक" => Ok(Self::Vrischika),
            "sagittarius" | "dhanu" | "dhanus" | "धनु" => Ok(Self::Dhanu),
            "capricorn" | "makara" | "makar" | "मकर" => Ok(Self::Makara),
            "aquarius" | "kumbha" | "kumbh" | "कुम्भ" => Ok(Self::Kumbha),
            "pisces" | "meena" | "meen" | "min" | "मीन" => Ok(Self::Meena),
            _ => Err(JatakaError::UnknownSign(input.to_string())),
        }
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = crate::util::normalize_360(sidereal_lon_deg);
    let rashi_idx = (lon / 30.0).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_idx = rashi_idx.min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * 30.0;
    let rashi = ALL_RASHIS[rashi_idx as usize];
    let dms = deg_to_dms(degrees_in_rashi);

    RashiInfo {
        rashi,
        rashi_index: rashi_idx,
        dms,
        degrees_in_rashi,
    }
}
