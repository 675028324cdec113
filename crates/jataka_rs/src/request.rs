//! Request-side types: the camelCase JSON shapes delivered by upstream
//! profile and ephemeris-provider layers.

use serde::Deserialize;

use jataka_chart::{RawGrahaPosition, SignValue, Varga, VargaChart};
use jataka_time::{UtcTime, parse_date, parse_time, utc_from_local};

use crate::error::KundaliError;

/// A birth profile as delivered by the upstream profile layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthProfile {
    /// `YYYY-MM-DD`, local civil date.
    pub birth_date: String,
    /// `HH:mm` or `HH:mm:ss`, local civil time.
    pub birth_time: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Minutes ahead of UTC (Kathmandu = 345).
    pub timezone_offset_minutes: i32,
}

impl BirthProfile {
    /// Validate the coordinates and convert the local birth instant to UTC.
    pub fn birth_utc(&self) -> Result<UtcTime, KundaliError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(KundaliError::InvalidInput("latitude must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(KundaliError::InvalidInput("longitude must be in [-180, 180]"));
        }
        let (year, month, day) = parse_date(&self.birth_date)?;
        let (hour, minute, second) = parse_time(&self.birth_time)?;
        let local = UtcTime::new(year, month, day, hour, minute, second);
        local.validate()?;
        Ok(utc_from_local(&local, self.timezone_offset_minutes))
    }
}

/// A sign as the provider sends it: a name string or a 1-12 number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignInput {
    Number(u8),
    Name(String),
}

impl SignInput {
    pub fn to_sign_value(&self) -> SignValue {
        match self {
            Self::Number(n) => SignValue::Number(*n),
            Self::Name(s) => SignValue::Name(s.clone()),
        }
    }
}

/// One raw planetary position from the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPositionInput {
    pub planet: String,
    pub sign: SignInput,
    #[serde(default)]
    pub longitude_degree: Option<f64>,
    #[serde(default)]
    pub house: Option<u8>,
    #[serde(default)]
    pub is_retrograde: bool,
}

impl RawPositionInput {
    pub fn to_raw(&self) -> RawGrahaPosition {
        RawGrahaPosition {
            planet: self.planet.clone(),
            sign: self.sign.to_sign_value(),
            longitude_deg: self.longitude_degree,
            house: self.house,
            retrograde: self.is_retrograde,
        }
    }
}

/// One divisional chart from the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VargaInput {
    /// Chart key: "d2", "d7", "d9", or "d10".
    pub varga: String,
    pub ascendant: SignInput,
    pub positions: Vec<VargaPositionInput>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VargaPositionInput {
    pub planet: String,
    pub sign: SignInput,
}

impl VargaInput {
    pub fn to_varga_chart(&self) -> Result<VargaChart, KundaliError> {
        let varga = match self.varga.to_lowercase().as_str() {
            "d2" => Varga::Hora,
            "d7" => Varga::Saptamsha,
            "d9" => Varga::Navamsha,
            "d10" => Varga::Dashamsha,
            _ => return Err(KundaliError::InvalidInput("unsupported varga key")),
        };
        let lagna = jataka_chart::resolve_sign(&self.ascendant.to_sign_value())?;
        let mut positions = Vec::with_capacity(self.positions.len());
        for p in &self.positions {
            let graha = jataka_base::graha::Graha::parse(&p.planet)?;
            let rashi = jataka_chart::resolve_sign(&p.sign.to_sign_value())?;
            positions.push((graha, rashi));
        }
        Ok(VargaChart {
            varga,
            lagna,
            positions,
        })
    }
}

/// Tradition hints honored during dasha computation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraditionHints {
    /// Yogini start override: a yogini name ("Mangala".."Sankata").
    #[serde(default)]
    pub start_from: Option<String>,
}

/// Analysis options.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    #[serde(default)]
    pub tradition_hints: TraditionHints,
    /// Dasha levels to expand, 1-5.
    #[serde(default = "default_dasha_levels")]
    pub dasha_levels: u8,
    /// Evaluate Mangal dosha from the Moon as well.
    #[serde(default)]
    pub mangal_from_moon: bool,
}

fn default_dasha_levels() -> u8 {
    3
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tradition_hints: TraditionHints::default(),
            dasha_levels: default_dasha_levels(),
            mangal_from_moon: false,
        }
    }
}

/// A complete analysis request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KundaliRequest {
    pub profile: BirthProfile,
    pub ascendant: SignInput,
    /// Moon sidereal longitude in degrees. Optional when the Moon's
    /// position entry carries `longitudeDegree`.
    #[serde(default)]
    pub moon_longitude: Option<f64>,
    pub positions: Vec<RawPositionInput>,
    #[serde(default)]
    pub vargas: Vec<VargaInput>,
    #[serde(default)]
    pub config: Option<AnalysisConfig>,
}
