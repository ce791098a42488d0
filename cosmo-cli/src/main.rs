mod attempts;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cosmo_core::debrief::failure_analysis;
use cosmo_core::performance::performance_report;
use cosmo_core::{AttemptRecord, Catalog, EventVariant, Leaderboard, MissionPlan};

use attempts::AttemptLog;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Any event may fire; quiet turns are "All Clear"
    Simple,
    /// Module-aware narrative (default)
    Personalized,
}

impl From<VariantArg> for EventVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Simple => EventVariant::Simple,
            VariantArg::Personalized => EventVariant::Personalized,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cosmo", version)]
#[command(about = "Fly Cosmo-Casa habitat missions from the command line")]
struct Args {
    /// Load rockets, modules and events from a JSON catalog instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate a mission and print the ship's log and result
    Fly {
        /// moon, mars or exoplanet (lua, marte, exoplaneta also accepted)
        #[arg(short, long)]
        destination: String,

        /// Rocket id from the catalog
        #[arg(short, long)]
        rocket: String,

        /// Habitat module ids, in the order they were selected
        #[arg(short, long = "module", required = true)]
        modules: Vec<String>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = VariantArg::Personalized)]
        variant: VariantArg,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Student name recorded with the attempt
        #[arg(long, requires = "record_file")]
        student: Option<String>,

        /// Room code recorded with the attempt
        #[arg(long, requires = "student")]
        room: Option<String>,

        /// JSON Lines file that attempts are appended to
        #[arg(long, requires = "student")]
        record_file: Option<PathBuf>,
    },
    /// Print delta-v, range and payload figures for the rockets
    Performance {
        /// Only report on this rocket
        #[arg(long)]
        rocket: Option<String>,
    },
    /// List rockets and habitat modules
    Catalog,
    /// Rank recorded attempts by each student's best score
    Ranking {
        #[arg(long)]
        record_file: PathBuf,

        /// Only rank this room
        #[arg(long)]
        room: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let catalog = load_catalog(args.catalog.as_ref())?;

    match args.command {
        Command::Fly {
            destination,
            rocket,
            modules,
            seed,
            variant,
            json,
            student,
            room,
            record_file,
        } => {
            let plan = MissionPlan::new(&catalog, &destination, &rocket, &modules)
                .context("cannot prepare mission")?
                .with_variant(variant.into());
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let result = plan.fly(&mut rng);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render::mission(&catalog, &result));
                if let Some(analysis) = failure_analysis(&result, &plan.rocket().name) {
                    println!("\n{}", analysis);
                }
            }

            if let (Some(path), Some(student)) = (record_file, student) {
                let record =
                    AttemptRecord::from_result(&result, student, room.unwrap_or_default());
                AttemptLog::new(path).append(&record)?;
            }
        }
        Command::Performance { rocket } => {
            let rockets = match rocket {
                Some(id) => vec![catalog.rocket(&id)?],
                None => catalog.rockets.iter().collect(),
            };
            for rocket in rockets {
                print!("{}", render::performance(&performance_report(rocket)));
            }
        }
        Command::Catalog => print!("{}", render::catalog(&catalog)),
        Command::Ranking { record_file, room } => {
            let records = AttemptLog::new(record_file).read_all()?;
            let board = Leaderboard::from_records(&records, room.as_deref());
            print!("{}", render::leaderboard(&board));
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    log::info!(
        "loaded {} rockets and {} modules from {}",
        catalog.rockets.len(),
        catalog.modules.len(),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fly_collects_repeated_modules() {
        let args = Args::try_parse_from([
            "cosmo",
            "fly",
            "-d",
            "moon",
            "-r",
            "falcon9",
            "-m",
            "suporte_vida",
            "-m",
            "habitacional",
            "--seed",
            "7",
        ])
        .unwrap();

        match args.command {
            Command::Fly {
                modules,
                seed,
                variant,
                ..
            } => {
                assert_eq!(modules, vec!["suporte_vida", "habitacional"]);
                assert_eq!(seed, Some(7));
                assert!(matches!(variant, VariantArg::Personalized));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn fly_requires_a_module() {
        let result = Args::try_parse_from(["cosmo", "fly", "-d", "moon", "-r", "falcon9"]);
        assert!(result.is_err());
    }

    #[test]
    fn student_requires_record_file() {
        let result = Args::try_parse_from([
            "cosmo", "fly", "-d", "moon", "-r", "falcon9", "-m", "medico", "--student", "ana",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn record_file_requires_student() {
        let result = Args::try_parse_from([
            "cosmo",
            "fly",
            "-d",
            "moon",
            "-r",
            "falcon9",
            "-m",
            "medico",
            "--record-file",
            "attempts.jsonl",
        ]);
        assert!(result.is_err());

        let args = Args::try_parse_from([
            "cosmo",
            "fly",
            "-d",
            "moon",
            "-r",
            "falcon9",
            "-m",
            "medico",
            "--record-file",
            "attempts.jsonl",
            "--student",
            "ana",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Fly { student: Some(_), .. }));
    }

    #[test]
    fn catalog_flag_is_global() {
        let args =
            Args::try_parse_from(["cosmo", "performance", "--catalog", "custom.json"]).unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("custom.json")));
    }

    #[test]
    fn builtin_catalog_is_the_default() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.rockets.len(), 4);
    }
}
