//! Types for the yoga/dosha rule engine.

use std::fmt;

use jataka_base::{Dignity, Graha, Rashi, bhava_from_rashi, dignity_in_rashi};

use crate::chart_types::{GrahaPosition, ResolvedChart};

/// Whether a rule describes an auspicious or inauspicious combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Yoga,
    Dosha,
}

/// A typed fact contributing to a rule match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    /// A graha's placement at match time.
    Placement { graha: Graha, rashi: Rashi, bhava: u8 },
    /// A graha's rulership of a house that the rule keyed on.
    Lordship { graha: Graha, bhava: u8 },
    /// A node axis the rule keyed on, in arc direction `from → to`.
    Axis { from: Graha, to: Graha },
    /// A free annotation (dignity, reference point, direction, ...).
    Note(&'static str),
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placement { graha, rashi, bhava } => {
                write!(f, "{} in {} (house {})", graha.name(), rashi.name(), bhava)
            }
            Self::Lordship { graha, bhava } => {
                write!(f, "{} lord of house {}", graha.name(), bhava)
            }
            Self::Axis { from, to } => write!(f, "{}-{} axis", from.name(), to.name()),
            Self::Note(note) => write!(f, "{note}"),
        }
    }
}

/// One matched yoga or dosha. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    /// Stable identifier, e.g. "shasha" or "kaal-sarp".
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Contributing facts, in rule-defined order.
    pub factors: Vec<Factor>,
}

/// Divisional (varga) chart kinds accepted for reinforcement passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Varga {
    /// D2 (Hora)
    Hora,
    /// D7 (Saptamsha)
    Saptamsha,
    /// D9 (Navamsha)
    Navamsha,
    /// D10 (Dashamsha)
    Dashamsha,
}

impl Varga {
    /// Short chart key ("d9" etc.).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hora => "d2",
            Self::Saptamsha => "d7",
            Self::Navamsha => "d9",
            Self::Dashamsha => "d10",
        }
    }

    /// Full chart name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hora => "Hora",
            Self::Saptamsha => "Saptamsha",
            Self::Navamsha => "Navamsha",
            Self::Dashamsha => "Dashamsha",
        }
    }
}

/// A divisional chart supplied by the provider: varga lagna plus graha
/// sign placements in that varga.
#[derive(Debug, Clone, PartialEq)]
pub struct VargaChart {
    pub varga: Varga,
    pub lagna: Rashi,
    pub positions: Vec<(Graha, Rashi)>,
}

/// A directed aspect fact (`from` aspects `to`), supplied by the provider
/// when available. Consumed by rules with aspect-based exceptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectFact {
    pub from: Graha,
    pub to: Graha,
}

/// Everything a rule may look at. Built once per evaluation from a
/// resolved chart plus optional auxiliary data.
#[derive(Debug, Clone)]
pub struct RuleContext {
    pub lagna: Rashi,
    /// Per-graha position slots, indexed by `Graha::index()`. A missing
    /// slot makes rules that need that graha skip silently.
    slots: [Option<GrahaPosition>; 9],
    /// Per-graha dignity overrides; when absent, dignity is computed from
    /// the placement sign.
    dignities: [Option<Dignity>; 9],
    /// Aspect facts, when the provider supplies them.
    pub aspects: Vec<AspectFact>,
    /// Divisional charts for the reinforcement pass.
    pub vargas: Vec<VargaChart>,
    /// Evaluate Mangal dosha from the Moon as well as the lagna.
    pub mangal_from_moon: bool,
}

impl RuleContext {
    /// Build a context from a resolved chart. Auxiliary data starts empty.
    pub fn new(chart: &ResolvedChart) -> Self {
        let mut slots = [None; 9];
        for p in &chart.positions {
            slots[p.graha.index() as usize] = Some(*p);
        }
        Self {
            lagna: chart.lagna,
            slots,
            dignities: [None; 9],
            aspects: Vec::new(),
            vargas: Vec::new(),
            mangal_from_moon: false,
        }
    }

    /// Build a context directly from positions (used for varga sub-passes).
    pub fn from_positions(lagna: Rashi, positions: &[GrahaPosition]) -> Self {
        let mut slots = [None; 9];
        for p in positions {
            slots[p.graha.index() as usize] = Some(*p);
        }
        Self {
            lagna,
            slots,
            dignities: [None; 9],
            aspects: Vec::new(),
            vargas: Vec::new(),
            mangal_from_moon: false,
        }
    }

    /// Override a graha's dignity (e.g. from a provider dignity table).
    pub fn set_dignity(&mut self, graha: Graha, dignity: Dignity) {
        self.dignities[graha.index() as usize] = Some(dignity);
    }

    /// A graha's position, if present.
    pub fn position(&self, graha: Graha) -> Option<&GrahaPosition> {
        self.slots[graha.index() as usize].as_ref()
    }

    /// A graha's dignity: the override when set, otherwise computed from
    /// its placement sign. None when the graha is absent.
    pub fn dignity(&self, graha: Graha) -> Option<Dignity> {
        if let Some(d) = self.dignities[graha.index() as usize] {
            return Some(d);
        }
        self.position(graha).map(|p| dignity_in_rashi(graha, p.rashi))
    }

    /// Whether a `from → to` aspect fact was supplied.
    pub fn has_aspect(&self, from: Graha, to: Graha) -> bool {
        self.aspects.iter().any(|a| a.from == from && a.to == to)
    }

    /// A graha's house counted from another graha's sign instead of the
    /// lagna (e.g. Kendra-from-Moon conditions).
    pub fn bhava_from(&self, graha: Graha, reference: Graha) -> Option<u8> {
        let g = self.position(graha)?;
        let r = self.position(reference)?;
        Some(bhava_from_rashi(g.rashi, r.rashi))
    }
}

/// A reinforcement match produced from a divisional chart, kept apart from
/// the main-chart matches to preserve provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct VargaMatch {
    pub varga: Varga,
    pub matched: RuleMatch,
}

/// The full output of one engine evaluation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YogaReport {
    pub yogas: Vec<RuleMatch>,
    pub doshas: Vec<RuleMatch>,
    /// Divisional-chart corroboration, never merged into `yogas`/`doshas`.
    pub varga_support: Vec<VargaMatch>,
}
