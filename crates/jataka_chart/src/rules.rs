//! The individual yoga/dosha rule predicates.
//!
//! Every rule is a pure function of the context. A rule whose required
//! grahas are absent returns no matches: it never errors and never stops
//! the rest of the catalog. A rule that holds for several distinct
//! combinations emits one match per combination.

use jataka_base::{
    Dignity, Graha, SAPTA_GRAHAS, bhava_from_rashi, is_dusthana, is_kendra, rashi_lord,
    rashi_of_bhava, within_arc,
};

use crate::yoga_types::{Factor, RuleContext, RuleMatch};

/// Houses that trigger Mangal dosha.
const MANGAL_BHAVAS: [u8; 6] = [1, 2, 4, 7, 8, 12];

fn placement(ctx: &RuleContext, graha: Graha) -> Option<Factor> {
    ctx.position(graha).map(|p| Factor::Placement {
        graha,
        rashi: p.rashi,
        bhava: p.bhava,
    })
}

// ── Kendra-benefic yogas ─────────────────────────────────────────────

/// Gajakesari: Jupiter in a Kendra (1/4/7/10) counted from the Moon.
pub fn gajakesari(ctx: &RuleContext) -> Vec<RuleMatch> {
    let Some(from_moon) = ctx.bhava_from(Graha::Guru, Graha::Chandra) else {
        return Vec::new();
    };
    if !is_kendra(from_moon) {
        return Vec::new();
    }
    vec![RuleMatch {
        key: "gajakesari",
        label: "Gajakesari Yoga",
        factors: [
            placement(ctx, Graha::Chandra),
            placement(ctx, Graha::Guru),
            Some(Factor::Note("Guru in Kendra from Chandra")),
        ]
        .into_iter()
        .flatten()
        .collect(),
    }]
}

/// Budhaditya: Sun and Mercury conjunct by sign.
pub fn budhaditya(ctx: &RuleContext) -> Vec<RuleMatch> {
    let (Some(sun), Some(mercury)) = (ctx.position(Graha::Surya), ctx.position(Graha::Buddh))
    else {
        return Vec::new();
    };
    if sun.rashi != mercury.rashi {
        return Vec::new();
    }
    vec![RuleMatch {
        key: "budhaditya",
        label: "Budhaditya Yoga",
        factors: [placement(ctx, Graha::Surya), placement(ctx, Graha::Buddh)]
            .into_iter()
            .flatten()
            .collect(),
    }]
}

/// Chandra-Mangal: Moon and Mars conjunct by sign.
pub fn chandra_mangal(ctx: &RuleContext) -> Vec<RuleMatch> {
    let (Some(moon), Some(mars)) = (ctx.position(Graha::Chandra), ctx.position(Graha::Mangal))
    else {
        return Vec::new();
    };
    if moon.rashi != mars.rashi {
        return Vec::new();
    }
    vec![RuleMatch {
        key: "chandra-mangal",
        label: "Chandra-Mangal Yoga",
        factors: [placement(ctx, Graha::Chandra), placement(ctx, Graha::Mangal)]
            .into_iter()
            .flatten()
            .collect(),
    }]
}

// ── Panchamahapurusha yogas ──────────────────────────────────────────

/// Shared Panchamahapurusha condition: the designated graha in its own or
/// exalted sign AND in a Kendra from the lagna. Both conditions are
/// mandatory.
fn mahapurush(
    ctx: &RuleContext,
    graha: Graha,
    key: &'static str,
    label: &'static str,
) -> Vec<RuleMatch> {
    let Some(pos) = ctx.position(graha) else {
        return Vec::new();
    };
    let Some(dignity) = ctx.dignity(graha) else {
        return Vec::new();
    };
    if !matches!(dignity, Dignity::OwnSign | Dignity::Exalted) {
        return Vec::new();
    }
    if !is_kendra(pos.bhava) {
        return Vec::new();
    }
    vec![RuleMatch {
        key,
        label,
        factors: vec![
            Factor::Placement {
                graha,
                rashi: pos.rashi,
                bhava: pos.bhava,
            },
            Factor::Note(dignity.name()),
        ],
    }]
}

/// Ruchaka: Mars own/exalted in a Kendra.
pub fn ruchaka(ctx: &RuleContext) -> Vec<RuleMatch> {
    mahapurush(ctx, Graha::Mangal, "ruchaka", "Ruchaka Yoga")
}

/// Bhadra: Mercury own/exalted in a Kendra.
pub fn bhadra(ctx: &RuleContext) -> Vec<RuleMatch> {
    mahapurush(ctx, Graha::Buddh, "bhadra", "Bhadra Yoga")
}

/// Hamsa: Jupiter own/exalted in a Kendra.
pub fn hamsa(ctx: &RuleContext) -> Vec<RuleMatch> {
    mahapurush(ctx, Graha::Guru, "hamsa", "Hamsa Yoga")
}

/// Malavya: Venus own/exalted in a Kendra.
pub fn malavya(ctx: &RuleContext) -> Vec<RuleMatch> {
    mahapurush(ctx, Graha::Shukra, "malavya", "Malavya Yoga")
}

/// Shasha: Saturn own/exalted in a Kendra.
pub fn shasha(ctx: &RuleContext) -> Vec<RuleMatch> {
    mahapurush(ctx, Graha::Shani, "shasha", "Shasha Yoga")
}

// ── Vipareeta Raja yogas ─────────────────────────────────────────────

/// Shared Vipareeta condition: the lord of the given Dusthana house is
/// itself placed in a Dusthana house. Single-Dusthana involvement (lord of
/// a Dusthana sitting in a Kendra, say) must not fire.
fn vipareeta(
    ctx: &RuleContext,
    dusthana: u8,
    key: &'static str,
    label: &'static str,
) -> Vec<RuleMatch> {
    let Some(rashi) = rashi_of_bhava(dusthana, ctx.lagna) else {
        return Vec::new();
    };
    let lord = rashi_lord(rashi);
    let Some(pos) = ctx.position(lord) else {
        return Vec::new();
    };
    if !is_dusthana(pos.bhava) {
        return Vec::new();
    }
    vec![RuleMatch {
        key,
        label,
        factors: vec![
            Factor::Lordship {
                graha: lord,
                bhava: dusthana,
            },
            Factor::Placement {
                graha: lord,
                rashi: pos.rashi,
                bhava: pos.bhava,
            },
        ],
    }]
}

/// Harsha: 6th lord in a Dusthana.
pub fn harsha(ctx: &RuleContext) -> Vec<RuleMatch> {
    vipareeta(ctx, 6, "harsha", "Harsha Vipareeta Rajyoga")
}

/// Sarala: 8th lord in a Dusthana.
pub fn sarala(ctx: &RuleContext) -> Vec<RuleMatch> {
    vipareeta(ctx, 8, "sarala", "Sarala Vipareeta Rajyoga")
}

/// Vimala: 12th lord in a Dusthana.
pub fn vimala(ctx: &RuleContext) -> Vec<RuleMatch> {
    vipareeta(ctx, 12, "vimala", "Vimala Vipareeta Rajyoga")
}

// ── Doshas ───────────────────────────────────────────────────────────

/// Mangal dosha: Mars in 1/2/4/7/8/12 from the lagna. When the context
/// asks for the Moon reference, the same set counted from the Moon is
/// checked too and emitted as a separate match.
pub fn mangal_dosha(ctx: &RuleContext) -> Vec<RuleMatch> {
    let Some(mars) = ctx.position(Graha::Mangal) else {
        return Vec::new();
    };
    let mut matches = Vec::new();

    if MANGAL_BHAVAS.contains(&mars.bhava) {
        matches.push(RuleMatch {
            key: "mangal-dosha",
            label: "Mangal Dosha",
            factors: vec![
                Factor::Placement {
                    graha: Graha::Mangal,
                    rashi: mars.rashi,
                    bhava: mars.bhava,
                },
                Factor::Note("counted from lagna"),
            ],
        });
    }

    if ctx.mangal_from_moon {
        if let Some(from_moon) = ctx.bhava_from(Graha::Mangal, Graha::Chandra) {
            if MANGAL_BHAVAS.contains(&from_moon) {
                matches.push(RuleMatch {
                    key: "mangal-dosha",
                    label: "Mangal Dosha",
                    factors: vec![
                        Factor::Placement {
                            graha: Graha::Mangal,
                            rashi: mars.rashi,
                            bhava: from_moon,
                        },
                        Factor::Note("counted from Chandra"),
                    ],
                });
            }
        }
    }

    matches
}

/// Kaal Sarp dosha: all seven classical grahas strictly inside one arc of
/// the Rahu-Ketu axis. Requires longitudes for all nine grahas; checked
/// with modular arc containment, so both wrap directions work.
pub fn kaal_sarp(ctx: &RuleContext) -> Vec<RuleMatch> {
    let rahu = match ctx.position(Graha::Rahu).and_then(|p| p.longitude_deg) {
        Some(lon) => lon,
        None => return Vec::new(),
    };
    let ketu = match ctx.position(Graha::Ketu).and_then(|p| p.longitude_deg) {
        Some(lon) => lon,
        None => return Vec::new(),
    };

    let mut lons = [0.0f64; 7];
    for (slot, &g) in lons.iter_mut().zip(SAPTA_GRAHAS.iter()) {
        match ctx.position(g).and_then(|p| p.longitude_deg) {
            Some(lon) => *slot = lon,
            None => return Vec::new(),
        }
    }

    let all_rahu_side = lons.iter().all(|&lon| within_arc(lon, rahu, ketu));
    let all_ketu_side = lons.iter().all(|&lon| within_arc(lon, ketu, rahu));

    let (from, to, note) = if all_rahu_side {
        (Graha::Rahu, Graha::Ketu, "all grahas in the Rahu-to-Ketu arc")
    } else if all_ketu_side {
        (Graha::Ketu, Graha::Rahu, "all grahas in the Ketu-to-Rahu arc")
    } else {
        return Vec::new();
    };

    vec![RuleMatch {
        key: "kaal-sarp",
        label: "Kaal Sarp Dosha",
        factors: vec![Factor::Axis { from, to }, Factor::Note(note)],
    }]
}

/// Kemadruma dosha: the 2nd and 12th from the Moon hold no classical graha
/// (the Sun never counts), cancelled by any graha in a Kendra from the
/// Moon or by a supplied Jupiter→Moon aspect.
pub fn kemadruma(ctx: &RuleContext) -> Vec<RuleMatch> {
    let Some(moon) = ctx.position(Graha::Chandra) else {
        return Vec::new();
    };

    let mut kendra_support = false;
    for g in SAPTA_GRAHAS {
        if g == Graha::Chandra || g == Graha::Surya {
            continue;
        }
        let Some(pos) = ctx.position(g) else {
            continue;
        };
        let from_moon = bhava_from_rashi(pos.rashi, moon.rashi);
        if from_moon == 2 || from_moon == 12 {
            return Vec::new(); // a neighbor breaks the dosha outright
        }
        if is_kendra(from_moon) && from_moon != 1 {
            kendra_support = true;
        }
    }

    if kendra_support || ctx.has_aspect(Graha::Guru, Graha::Chandra) {
        return Vec::new();
    }

    vec![RuleMatch {
        key: "kemadruma",
        label: "Kemadruma Dosha",
        factors: vec![
            Factor::Placement {
                graha: Graha::Chandra,
                rashi: moon.rashi,
                bhava: moon.bhava,
            },
            Factor::Note("2nd and 12th from Chandra unoccupied"),
        ],
    }]
}

/// Guru-Chandal dosha: Jupiter conjunct Rahu by sign.
pub fn guru_chandal(ctx: &RuleContext) -> Vec<RuleMatch> {
    let (Some(guru), Some(rahu)) = (ctx.position(Graha::Guru), ctx.position(Graha::Rahu)) else {
        return Vec::new();
    };
    if guru.rashi != rahu.rashi {
        return Vec::new();
    }
    vec![RuleMatch {
        key: "guru-chandal",
        label: "Guru-Chandal Dosha",
        factors: [placement(ctx, Graha::Guru), placement(ctx, Graha::Rahu)]
            .into_iter()
            .flatten()
            .collect(),
    }]
}
