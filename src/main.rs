//! Course Carver entry point
//!
//! Generates one course and prints it to stdout.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};

use course_carver::{Difficulty, GeneratorSettings, PathGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Full course as JSON
    Json,
    /// One `x y` step per line
    Steps,
    /// ASCII map of the carved grid
    Grid,
}

#[derive(Parser)]
#[command(about = "Generate a winding tile course")]
struct Args {
    /// JSON settings file; flags below override its values
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Grid radius (grid side is 2 * radius + 1)
    #[arg(short, long)]
    radius: Option<u32>,

    /// Path disturbance bias (0 = straightest route)
    #[arg(short, long)]
    wiggliness: Option<f32>,

    /// Preset wiggliness: easy, normal, hard, chaotic
    #[arg(short, long, conflicts_with = "wiggliness")]
    difficulty: Option<String>,

    /// Seed for a reproducible course
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Grid)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => GeneratorSettings::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GeneratorSettings::default(),
    };
    if let Some(radius) = args.radius {
        settings.radius = radius;
    }
    if let Some(name) = &args.difficulty {
        let Some(difficulty) = Difficulty::from_str(name) else {
            bail!("unknown difficulty '{name}'");
        };
        settings.apply_difficulty(difficulty);
    }
    if let Some(wiggliness) = args.wiggliness {
        settings.wiggliness = wiggliness;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let course = PathGenerator::from_settings(&settings)?.generate_course()?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&course)?),
        OutputFormat::Steps => {
            for step in &course.steps {
                println!("{} {}", step.x, step.y);
            }
        }
        OutputFormat::Grid => {
            print!("{course}");
            println!("{} tiles, exit {:?}", course.len(), course.exit_side);
        }
    }
    Ok(())
}
