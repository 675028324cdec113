//! One-shot analysis: birth profile + raw provider data in, a serializable
//! kundali analysis out.

use serde::Serialize;

use jataka_base::dasha::{DashaSystem, YoginiStartRule, yogini_index_by_name};
use jataka_chart::{
    DashaNode, DashaTree, DashaTreeConfig, RuleContext, RuleMatch, VargaMatch, compute_dasha_tree,
    detect_all, resolve_chart,
};

use crate::error::KundaliError;
use crate::request::{AnalysisConfig, KundaliRequest};

/// A normalized position in the output shape the presentation layer
/// consumes. `safe_house` is always the derived whole-sign house.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionOut {
    pub planet: &'static str,
    pub sign: &'static str,
    pub sign_number: u8,
    pub safe_house: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude_degree: Option<f64>,
    pub is_retrograde: bool,
}

/// A provider/derived house disagreement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MismatchOut {
    pub planet: &'static str,
    pub provided_house: u8,
    pub derived_house: u8,
}

/// One matched yoga/dosha with rendered factors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOut {
    pub key: &'static str,
    pub label: &'static str,
    pub factors: Vec<String>,
}

impl MatchOut {
    fn from_match(m: &RuleMatch) -> Self {
        Self {
            key: m.key,
            label: m.label,
            factors: m.factors.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// A divisional-chart corroboration, tagged with its varga.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VargaMatchOut {
    pub varga: &'static str,
    #[serde(flatten)]
    pub matched: MatchOut,
}

/// One dasha period node with ISO-8601 bounds.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaNodeOut {
    pub lord: &'static str,
    pub level: &'static str,
    pub start: String,
    pub end: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DashaNodeOut>,
}

impl DashaNodeOut {
    fn from_node(node: &DashaNode) -> Self {
        Self {
            lord: node.entity.name(),
            level: node.level.name(),
            start: node.start.to_string(),
            end: node.end.to_string(),
            children: node.children.iter().map(Self::from_node).collect(),
        }
    }
}

/// Auditing notes attached to a dasha tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaNotes {
    /// "default" or "custom": which start rule produced the tree.
    pub start_rule: &'static str,
}

/// A full dasha tree in output shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaTreeOut {
    pub system: &'static str,
    pub nakshatra: &'static str,
    pub nakshatra_index: u8,
    pub pada: u8,
    pub notes: DashaNotes,
    pub periods: Vec<DashaNodeOut>,
}

impl DashaTreeOut {
    fn from_tree(tree: &DashaTree) -> Self {
        Self {
            system: tree.system.name(),
            nakshatra: tree.nakshatra.nakshatra.name(),
            nakshatra_index: tree.nakshatra.nakshatra_index,
            pada: tree.nakshatra.pada,
            notes: DashaNotes {
                start_rule: tree.start_rule.as_str(),
            },
            periods: tree.periods.iter().map(DashaNodeOut::from_node).collect(),
        }
    }
}

/// The complete analysis output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KundaliAnalysis {
    pub ascendant: &'static str,
    pub ascendant_number: u8,
    pub birth_utc: String,
    pub positions: Vec<PositionOut>,
    pub mismatches: Vec<MismatchOut>,
    pub yogas: Vec<MatchOut>,
    pub doshas: Vec<MatchOut>,
    pub varga_support: Vec<VargaMatchOut>,
    pub vimshottari: DashaTreeOut,
    pub yogini: DashaTreeOut,
}

fn varga_match_out(v: &VargaMatch) -> VargaMatchOut {
    VargaMatchOut {
        varga: v.varga.key(),
        matched: MatchOut::from_match(&v.matched),
    }
}

/// Run the full analysis for one request.
///
/// Either every section succeeds and a complete analysis is returned, or
/// the first failure aborts the call: no partially populated output.
pub fn analyze(request: &KundaliRequest) -> Result<KundaliAnalysis, KundaliError> {
    let config = request.config.clone().unwrap_or_default();
    let birth = request.profile.birth_utc()?;

    // Normalize provider positions against the ascendant.
    let raw_positions: Vec<_> = request.positions.iter().map(|p| p.to_raw()).collect();
    let chart = resolve_chart(&request.ascendant.to_sign_value(), &raw_positions)?;

    // Rule evaluation, with optional divisional reinforcement.
    let mut ctx = RuleContext::new(&chart);
    ctx.mangal_from_moon = config.mangal_from_moon;
    for varga in &request.vargas {
        ctx.vargas.push(varga.to_varga_chart()?);
    }
    let report = detect_all(&ctx);

    // Dasha trees for both systems.
    let moon_longitude = resolve_moon_longitude(request, &chart)?;
    let yogini_start = yogini_start_rule(&config)?;

    let tree_config = DashaTreeConfig {
        levels: config.dasha_levels,
        range: None,
        yogini_start,
    };
    let vimshottari = compute_dasha_tree(
        DashaSystem::Vimshottari,
        moon_longitude,
        &birth,
        &tree_config,
    )?;
    let yogini = compute_dasha_tree(DashaSystem::Yogini, moon_longitude, &birth, &tree_config)?;

    Ok(KundaliAnalysis {
        ascendant: chart.lagna.name(),
        ascendant_number: chart.lagna.number(),
        birth_utc: birth.to_string(),
        positions: chart
            .positions
            .iter()
            .map(|p| PositionOut {
                planet: p.graha.english_name(),
                sign: p.rashi.western_name(),
                sign_number: p.rashi.number(),
                safe_house: p.bhava,
                longitude_degree: p.longitude_deg,
                is_retrograde: p.retrograde,
            })
            .collect(),
        mismatches: chart
            .mismatches
            .iter()
            .map(|m| MismatchOut {
                planet: m.graha.english_name(),
                provided_house: m.provided_bhava,
                derived_house: m.derived_bhava,
            })
            .collect(),
        yogas: report.yogas.iter().map(MatchOut::from_match).collect(),
        doshas: report.doshas.iter().map(MatchOut::from_match).collect(),
        varga_support: report.varga_support.iter().map(varga_match_out).collect(),
        vimshottari: DashaTreeOut::from_tree(&vimshottari),
        yogini: DashaTreeOut::from_tree(&yogini),
    })
}

/// The Moon longitude: explicit request field first, then the Moon
/// position's `longitudeDegree`.
fn resolve_moon_longitude(
    request: &KundaliRequest,
    chart: &jataka_chart::ResolvedChart,
) -> Result<f64, KundaliError> {
    if let Some(lon) = request.moon_longitude {
        return Ok(lon);
    }
    chart
        .position(jataka_base::Graha::Chandra)
        .and_then(|p| p.longitude_deg)
        .ok_or(KundaliError::InvalidInput(
            "moon longitude required: supply moonLongitude or the Moon's longitudeDegree",
        ))
}

/// Map the tradition hint onto a Yogini start rule.
fn yogini_start_rule(config: &AnalysisConfig) -> Result<YoginiStartRule, KundaliError> {
    match &config.tradition_hints.start_from {
        Some(name) => Ok(YoginiStartRule::FixedYogini(yogini_index_by_name(name)?)),
        None => Ok(YoginiStartRule::NakshatraMap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{BirthProfile, RawPositionInput, SignInput};

    fn position(planet: &str, sign: &str) -> RawPositionInput {
        RawPositionInput {
            planet: planet.to_string(),
            sign: SignInput::Name(sign.to_string()),
            longitude_degree: None,
            house: None,
            is_retrograde: false,
        }
    }

    fn request() -> KundaliRequest {
        KundaliRequest {
            profile: BirthProfile {
                birth_date: "1994-11-09".to_string(),
                birth_time: "07:44".to_string(),
                latitude: 27.7,
                longitude: 85.3,
                timezone_offset_minutes: 345,
            },
            ascendant: SignInput::Name("Aries".to_string()),
            moon_longitude: Some(0.0),
            positions: vec![position("Moon", "Aries"), position("Saturn", "Capricorn")],
            vargas: Vec::new(),
            config: None,
        }
    }

    #[test]
    fn analyze_produces_complete_output() {
        let analysis = analyze(&request()).unwrap();
        assert_eq!(analysis.ascendant, "Aries");
        assert_eq!(analysis.ascendant_number, 1);
        assert_eq!(analysis.positions.len(), 2);
        assert_eq!(analysis.vimshottari.periods.len(), 9);
        assert_eq!(analysis.yogini.periods.len(), 8);
        assert_eq!(analysis.vimshottari.notes.start_rule, "default");
        // Saturn in Capricorn house 10 → Shasha
        assert!(analysis.yogas.iter().any(|y| y.key == "shasha"));
    }

    #[test]
    fn missing_moon_longitude_is_rejected() {
        let mut req = request();
        req.moon_longitude = None;
        assert!(matches!(
            analyze(&req),
            Err(KundaliError::InvalidInput(_))
        ));
    }

    #[test]
    fn moon_longitude_from_position_entry() {
        let mut req = request();
        req.moon_longitude = None;
        req.positions[0].longitude_degree = Some(0.0);
        let analysis = analyze(&req).unwrap();
        assert_eq!(analysis.vimshottari.nakshatra, "Ashwini");
    }

    #[test]
    fn tradition_hint_flows_to_yogini_notes() {
        let mut req = request();
        req.config = Some(AnalysisConfig {
            tradition_hints: crate::request::TraditionHints {
                start_from: Some("Mangala".to_string()),
            },
            dasha_levels: 2,
            mangal_from_moon: false,
        });
        let analysis = analyze(&req).unwrap();
        assert_eq!(analysis.yogini.notes.start_rule, "custom");
        assert_eq!(analysis.yogini.periods[0].lord, "Mangala");
        // Vimshottari is unaffected by the hint
        assert_eq!(analysis.vimshottari.notes.start_rule, "default");
    }

    #[test]
    fn unknown_tradition_hint_fails() {
        let mut req = request();
        req.config = Some(AnalysisConfig {
            tradition_hints: crate::request::TraditionHints {
                start_from: Some("Invented".to_string()),
            },
            dasha_levels: 2,
            mangal_from_moon: false,
        });
        assert!(analyze(&req).is_err());
    }
}
