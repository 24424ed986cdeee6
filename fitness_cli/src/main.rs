use clap::{Parser, Subcommand};
use fitness_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fitstat")]
#[command(about = "Workout statistics from raw sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Packages file (.jsonl or .csv); overrides the config file
    #[arg(long, global = true)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print one summary line per package (default)
    Report,

    /// Decode all packages without printing summaries
    Check,
}

fn main() -> Result<()> {
    // Initialize logging
    fitness_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let packages = resolve_packages(cli.input.as_deref(), &config)?;

    match cli.command {
        Some(Commands::Check) => cmd_check(&packages),
        Some(Commands::Report) | None => cmd_report(&packages),
    }
}

/// The CLI flag wins over the config file; the built-in sample set is the
/// fallback.
fn resolve_packages(input: Option<&Path>, config: &Config) -> Result<Vec<SensorPackage>> {
    match input.or(config.input.packages_file.as_deref()) {
        Some(path) => {
            tracing::info!("Loading packages from {:?}", path);
            load_packages(path)
        }
        None => Ok(builtin_packages().to_vec()),
    }
}

/// One line per package, in listed order. Any decode failure ends the run.
fn cmd_report(packages: &[SensorPackage]) -> Result<()> {
    for package in packages {
        let workout = package.decode()?;
        let summary = summarize(&workout);
        println!("{}", format_summary(&summary));
    }

    Ok(())
}

fn cmd_check(packages: &[SensorPackage]) -> Result<()> {
    for package in packages {
        package.decode()?;
    }

    println!("✓ {} packages decoded", packages.len());
    Ok(())
}
