mod analysis;
mod config;
mod error;
mod export;
mod grid;
mod patterns;
mod settings;
mod terminal;
mod viz;

use clap::{Parser, Subcommand};
use config::{CentroidConfig, LifetimeConfig, SeedPattern, ViewConfig};
use error::{LifeError, Result};
use settings::Settings;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lifelab")]
#[command(version = "0.1.0")]
#[command(about = "Toroidal Game of Life: live view, lifetime statistics, centroid tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch a pattern evolve live in the terminal
    View {
        /// Seed pattern: random, spaceship, oscillator
        #[arg(short, long, default_value = "random")]
        pattern: String,

        /// Grid side length
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Animation speed (seconds per frame)
        #[arg(short, long, default_value = "0.05")]
        time: f32,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Character used to draw alive cells
        #[arg(short, long, default_value = "#")]
        char: String,
    },

    /// Run random trials until population stability, export lifetimes as CSV
    Lifetime {
        /// Number of independent trials
        #[arg(short = 'T', long)]
        trials: Option<usize>,

        /// Grid side length per trial
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Base random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output CSV path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Track the glider's center of mass over time, export the trajectory as CSV
    Centroid {
        /// Grid side length
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Number of generations to track
        #[arg(short, long)]
        generations: Option<u32>,

        /// Output CSV path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let settings = Settings::load();

    if let Err(err) = run(cli, &settings) {
        eprintln!("lifelab: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, settings: &Settings) -> Result<()> {
    match cli.command {
        Some(Commands::View {
            pattern,
            size,
            time,
            seed,
            char: draw_char,
        }) => {
            let pattern = SeedPattern::from_name(&pattern)?;
            let size = size.unwrap_or(settings.grid_size);
            let template = match pattern {
                SeedPattern::Spaceship => Some(&patterns::GLIDER),
                SeedPattern::Oscillator => Some(&patterns::PENTADECATHLON),
                SeedPattern::Random => None,
            };
            if let Some(template) = template {
                // Any size wraps, but a tight torus lets the pattern collide
                // with its own wrapped image within a few generations.
                if size < 2 * template.extent() {
                    eprintln!(
                        "note: {size}x{size} is tight for the {} (extent {}); expect self-collision",
                        template.name,
                        template.extent()
                    );
                }
            }
            viz::run(&ViewConfig {
                pattern,
                size,
                time_step: time,
                seed,
                draw_char: draw_char.chars().next().unwrap_or('#'),
            })
        }
        Some(Commands::Lifetime {
            trials,
            size,
            seed,
            output,
        }) => run_lifetime(&LifetimeConfig {
            trials: trials.unwrap_or(settings.trials),
            size: size.unwrap_or(settings.grid_size),
            seed,
            cap: settings.lifetime_cap,
            window: settings.stability_window,
            output: output.unwrap_or_else(|| settings.lifetime_output.clone()),
        }),
        Some(Commands::Centroid {
            size,
            generations,
            output,
        }) => run_centroid(&CentroidConfig {
            size: size.unwrap_or(settings.grid_size),
            generations: generations.unwrap_or(settings.centroid_generations),
            output: output.unwrap_or_else(|| settings.centroid_output.clone()),
        }),
        None => run_menu(settings),
    }
}

/// The numbered menu shown when no subcommand is given.
fn run_menu(settings: &Settings) -> Result<()> {
    println!("Introduce the following command:");
    println!("(0) Live view of a random grid");
    println!("(1) Live view of the spaceship");
    println!("(2) Live view of the oscillator");
    println!("(3) Lifetime of a grid (batch analysis)");
    println!("(4) Center of mass evolution");
    print!("Place here your command: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let choice = line.trim();

    let view = |pattern| ViewConfig {
        pattern,
        size: settings.grid_size,
        time_step: 0.05,
        seed: None,
        draw_char: '#',
    };

    match choice {
        "0" => viz::run(&view(SeedPattern::Random)),
        "1" => viz::run(&view(SeedPattern::Spaceship)),
        "2" => viz::run(&view(SeedPattern::Oscillator)),
        "3" => run_lifetime(&LifetimeConfig {
            trials: settings.trials,
            size: settings.grid_size,
            seed: None,
            cap: settings.lifetime_cap,
            window: settings.stability_window,
            output: settings.lifetime_output.clone(),
        }),
        "4" => run_centroid(&CentroidConfig {
            size: settings.grid_size,
            generations: settings.centroid_generations,
            output: settings.centroid_output.clone(),
        }),
        other => Err(LifeError::InvalidCommand(other.to_string())),
    }
}

fn run_lifetime(config: &LifetimeConfig) -> Result<()> {
    let base_seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    eprintln!(
        "running {} trials on {}x{} grids (seed {base_seed})...",
        config.trials, config.size, config.size
    );
    let outcomes =
        analysis::lifetime_batch(config.trials, config.size, base_seed, config.cap, config.window);

    let timed_out = outcomes
        .iter()
        .filter(|o| **o == analysis::LifetimeOutcome::TimedOut)
        .count();
    let rows = export::write_lifetimes(&config.output, &outcomes)?;

    println!(
        "{rows} stabilized, {timed_out} timed out; wrote {rows} rows to {}",
        config.output.display()
    );
    Ok(())
}

fn run_centroid(config: &CentroidConfig) -> Result<()> {
    let samples = analysis::track_centroid(grid::Grid::spaceship(config.size), config.generations)?;
    export::write_centroids(&config.output, &samples)?;
    println!(
        "tracked {} generations; wrote {} rows to {}",
        config.generations,
        samples.len(),
        config.output.display()
    );
    Ok(())
}
