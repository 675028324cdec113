use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jataka_base::dasha::{DashaSystem, YoginiStartRule, yogini_index_by_name};
use jataka_base::{Rashi, bhava_from_rashi, nakshatra_from_longitude, rashi_from_longitude};
use jataka_chart::{DashaNode, DashaTreeConfig, compute_dasha_tree, dasha_snapshot_at};
use jataka_rs::{KundaliRequest, analyze};
use jataka_time::UtcTime;

#[derive(Parser)]
#[command(name = "jataka", about = "Jataka chart-analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a sign name (English/Nepali/number) to its canonical form
    Sign {
        /// Sign name or 1-12 number
        input: String,
    },
    /// Whole-sign house of a planet sign relative to a lagna
    House {
        /// Planet's sign name or number
        planet_sign: String,
        /// Lagna sign name or number
        lagna: String,
    },
    /// Rashi and nakshatra for a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Dasha periods for a birth moment
    Dasha {
        /// System: vimshottari (default) or yogini
        #[arg(long, default_value = "vimshottari")]
        system: String,
        /// Moon sidereal longitude in degrees
        #[arg(long)]
        moon: f64,
        /// Birth UTC datetime (YYYY-MM-DDTHH:MM:SSZ)
        #[arg(long)]
        birth: String,
        /// Levels to compute (1-5)
        #[arg(long, default_value = "2")]
        levels: u8,
        /// Show only the active chain at this UTC datetime
        #[arg(long)]
        at: Option<String>,
        /// Yogini start override (yogini name, e.g. "Mangala")
        #[arg(long)]
        start_from: Option<String>,
    },
    /// Full analysis from a JSON request file
    Analyze {
        /// Path to the request JSON
        input: PathBuf,
        /// Emit the full analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Sign { input } => {
            let rashi = Rashi::parse(&input).map_err(|e| e.to_string())?;
            println!(
                "{} ({}), sign {}, {}",
                rashi.name(),
                rashi.western_name(),
                rashi.number(),
                rashi.nepali_name()
            );
            Ok(())
        }
        Commands::House { planet_sign, lagna } => {
            let planet = Rashi::parse(&planet_sign).map_err(|e| e.to_string())?;
            let lagna = Rashi::parse(&lagna).map_err(|e| e.to_string())?;
            println!(
                "{} from {} lagna: house {}",
                planet.name(),
                lagna.name(),
                bhava_from_rashi(planet, lagna)
            );
            Ok(())
        }
        Commands::Nakshatra { lon } => {
            let rashi = rashi_from_longitude(lon);
            let nak = nakshatra_from_longitude(lon);
            println!(
                "{:.4} deg: {} {}d{:02}m{:04.1}s: {} pada {}",
                lon,
                rashi.rashi.name(),
                rashi.dms.degrees,
                rashi.dms.minutes,
                rashi.dms.seconds,
                nak.nakshatra.name(),
                nak.pada
            );
            Ok(())
        }
        Commands::Dasha {
            system,
            moon,
            birth,
            levels,
            at,
            start_from,
        } => {
            let system = match system.to_lowercase().as_str() {
                "vimshottari" => DashaSystem::Vimshottari,
                "yogini" => DashaSystem::Yogini,
                _ => return Err("system must be vimshottari or yogini".to_string()),
            };
            let birth: UtcTime = birth.parse().map_err(|e: jataka_time::TimeError| e.to_string())?;
            let yogini_start = match start_from {
                Some(name) => YoginiStartRule::FixedYogini(
                    yogini_index_by_name(&name).map_err(|e| e.to_string())?,
                ),
                None => YoginiStartRule::NakshatraMap,
            };

            if let Some(at) = at {
                let at: UtcTime = at.parse().map_err(|e: jataka_time::TimeError| e.to_string())?;
                let chain = dasha_snapshot_at(system, moon, &birth, &at, levels, yogini_start)
                    .map_err(|e| e.to_string())?;
                if chain.is_empty() {
                    println!("no active period at {at}");
                }
                for node in &chain {
                    println!(
                        "{:<16} {:<10} {}  →  {}",
                        node.level.name(),
                        node.entity.name(),
                        node.start,
                        node.end
                    );
                }
                return Ok(());
            }

            let config = DashaTreeConfig {
                levels,
                range: None,
                yogini_start,
            };
            let tree =
                compute_dasha_tree(system, moon, &birth, &config).map_err(|e| e.to_string())?;
            println!(
                "{} dasha: {} (index {}), pada {}, start rule {}",
                tree.system.name(),
                tree.nakshatra.nakshatra.name(),
                tree.nakshatra.nakshatra_index,
                tree.nakshatra.pada,
                tree.start_rule.as_str()
            );
            for maha in &tree.periods {
                print_node(maha, 0);
            }
            Ok(())
        }
        Commands::Analyze { input, json } => {
            let payload = std::fs::read_to_string(&input)
                .map_err(|e| format!("cannot read {}: {e}", input.display()))?;
            let request: KundaliRequest =
                serde_json::from_str(&payload).map_err(|e| e.to_string())?;
            let analysis = analyze(&request).map_err(|e| e.to_string())?;

            if json {
                let out = serde_json::to_string_pretty(&analysis).map_err(|e| e.to_string())?;
                println!("{out}");
                return Ok(());
            }

            println!(
                "Lagna {} (sign {}): born {}",
                analysis.ascendant, analysis.ascendant_number, analysis.birth_utc
            );
            for p in &analysis.positions {
                println!(
                    "  {:<8} {:<12} house {:>2}{}",
                    p.planet,
                    p.sign,
                    p.safe_house,
                    if p.is_retrograde { "  (R)" } else { "" }
                );
            }
            if !analysis.mismatches.is_empty() {
                println!("provider house mismatches:");
                for m in &analysis.mismatches {
                    println!(
                        "  {}: provider said {}, derived {}",
                        m.planet, m.provided_house, m.derived_house
                    );
                }
            }
            println!("yogas:");
            for y in &analysis.yogas {
                println!("  {}: {}", y.label, y.factors.join("; "));
            }
            println!("doshas:");
            for d in &analysis.doshas {
                println!("  {}: {}", d.label, d.factors.join("; "));
            }
            for v in &analysis.varga_support {
                println!("  [{}] {}", v.varga, v.matched.label);
            }
            println!("current mahadasha sequence (Vimshottari):");
            for node in &analysis.vimshottari.periods {
                println!("  {:<10} {}  →  {}", node.lord, node.start, node.end);
            }
            Ok(())
        }
    }
}

fn print_node(node: &DashaNode, depth: usize) {
    println!(
        "{:indent$}{:<10} {}  →  {}",
        "",
        node.entity.name(),
        node.start,
        node.end,
        indent = depth * 2
    );
    for child in &node.children {
        print_node(child, depth + 1);
    }
}
