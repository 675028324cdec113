//! The yoga/dosha rule engine: an ordered catalog of pure predicates.
//!
//! Rules run in catalog order, each over the same context. Per-rule data
//! gaps (missing grahas, absent longitudes) make that single rule skip;
//! nothing aborts the catalog. When divisional charts are supplied, the
//! varga-eligible yoga rules run a second pass over each varga's positions
//! and the results land in a separate `varga_support` list.

use jataka_base::bhava_from_rashi;

use crate::chart_types::GrahaPosition;
use crate::rules;
use crate::yoga_types::{MatchKind, RuleContext, RuleMatch, VargaChart, VargaMatch, YogaReport};

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub key: &'static str,
    pub kind: MatchKind,
    /// Whether the rule is re-evaluated against divisional charts.
    pub varga_eligible: bool,
    pub eval: fn(&RuleContext) -> Vec<RuleMatch>,
}

/// The fixed rule catalog, in evaluation order.
pub static RULE_CATALOG: [Rule; 15] = [
    Rule {
        key: "gajakesari",
        kind: MatchKind::Yoga,
        varga_eligible: true,
        eval: rules::gajakesari,
    },
    Rule {
        key: "budhaditya",
        kind: MatchKind::Yoga,
        varga_eligible: true,
        eval: rules::budhaditya,
    },
    Rule {
        key: "chandra-mangal",
        kind: MatchKind::Yoga,
        varga_eligible: true,
        eval: rules::chandra_mangal,
    },
    Rule {
        key: "ruchaka",
        kind: MatchKind::Yoga,
        varga_eligible: true,
        eval: rules::ruchaka,
    },
    Rule {
        key: "bhadra",
        kind: MatchKind::Yoga,
        varga_eligible: true,
        eval: rules::bhadra,
    },
    Rule {
        key: "hamsa",
        kind: MatchKind::Yoga,
        varga_eligible: true,
        eval: rules::hamsa,
    },
    Rule {
        key: "malavya",
        kind: MatchKind::Yoga,
        varga_eligible: true,
        eval: rules::malavya,
    },
    Rule {
        key: "shasha",
        kind: MatchKind::Yoga,
        varga_eligible: true,
        eval: rules::shasha,
    },
    Rule {
        key: "harsha",
        kind: MatchKind::Yoga,
        varga_eligible: false,
        eval: rules::harsha,
    },
    Rule {
        key: "sarala",
        kind: MatchKind::Yoga,
        varga_eligible: false,
        eval: rules::sarala,
    },
    Rule {
        key: "vimala",
        kind: MatchKind::Yoga,
        varga_eligible: false,
        eval: rules::vimala,
    },
    Rule {
        key: "mangal-dosha",
        kind: MatchKind::Dosha,
        varga_eligible: false,
        eval: rules::mangal_dosha,
    },
    Rule {
        key: "kaal-sarp",
        kind: MatchKind::Dosha,
        varga_eligible: false,
        eval: rules::kaal_sarp,
    },
    Rule {
        key: "kemadruma",
        kind: MatchKind::Dosha,
        varga_eligible: false,
        eval: rules::kemadruma,
    },
    Rule {
        key: "guru-chandal",
        kind: MatchKind::Dosha,
        varga_eligible: false,
        eval: rules::guru_chandal,
    },
];

/// Build a varga sub-context from a divisional chart's placements.
fn varga_context(varga: &VargaChart) -> RuleContext {
    let positions: Vec<GrahaPosition> = varga
        .positions
        .iter()
        .map(|&(graha, rashi)| GrahaPosition {
            graha,
            rashi,
            bhava: bhava_from_rashi(rashi, varga.lagna),
            longitude_deg: None,
            retrograde: false,
        })
        .collect();
    RuleContext::from_positions(varga.lagna, &positions)
}

/// Evaluate the full catalog over a context.
pub fn detect_all(ctx: &RuleContext) -> YogaReport {
    let mut report = YogaReport::default();

    for rule in &RULE_CATALOG {
        let matches = (rule.eval)(ctx);
        match rule.kind {
            MatchKind::Yoga => report.yogas.extend(matches),
            MatchKind::Dosha => report.doshas.extend(matches),
        }
    }

    for varga in &ctx.vargas {
        let sub_ctx = varga_context(varga);
        for rule in RULE_CATALOG.iter().filter(|r| r.varga_eligible) {
            for matched in (rule.eval)(&sub_ctx) {
                report.varga_support.push(VargaMatch {
                    varga: varga.varga,
                    matched,
                });
            }
        }
    }

    report
}
