//! Tectonic Demos entry point
//!
//! Runs the plate simulator and prints scene data for an external renderer.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};

use tectonic_demos::scene::{self, FrontKind};
use tectonic_demos::sim::{BoundaryType, Direction, Simulation};
use tectonic_demos::{SettingsError, SimSettings};

/// Plate boundary, earth layer and weather front demos.
#[derive(Parser)]
#[command(name = "tectonic-demos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate two plates meeting at a boundary.
    Plates {
        /// JSON settings file; flags below override its fields.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the effective settings to this file.
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Plate 1 speed (0-10 in the demo).
        #[arg(long)]
        speed1: Option<f64>,

        /// Plate 1 direction (left/right).
        #[arg(long, value_parser = parse_direction)]
        direction1: Option<Direction>,

        /// Plate 2 speed (0-10 in the demo).
        #[arg(long)]
        speed2: Option<f64>,

        /// Plate 2 direction (left/right).
        #[arg(long, value_parser = parse_direction)]
        direction2: Option<Direction>,

        /// Boundary type (divergent/convergent/transform).
        #[arg(short, long, value_parser = parse_boundary)]
        boundary: Option<BoundaryType>,

        /// Number of frames to produce.
        #[arg(short, long)]
        frames: Option<usize>,

        /// Integration step.
        #[arg(long)]
        dt: Option<f64>,

        /// Plate extent used as contact distance.
        #[arg(long)]
        plate_length: Option<f64>,

        /// Delay between printed frames, in milliseconds.
        #[arg(long, default_value = "0")]
        frame_delay_ms: u64,

        /// Print the whole run as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print a boundary profile chart as JSON.
    Boundary {
        /// Boundary type (divergent/convergent/transform).
        #[arg(value_parser = parse_boundary)]
        kind: BoundaryType,

        /// Transform arrow heading in degrees (0-360).
        #[arg(long, default_value = "45")]
        angle: f64,
    },

    /// Print the earth interior cross-section as JSON.
    Layers,

    /// Print weather front curves as JSON.
    Fronts {
        /// Front type (warm/cold/stationary/occluded).
        #[arg(value_parser = parse_front)]
        kind: FrontKind,
    },
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    Direction::from_str(s).ok_or_else(|| format!("unknown direction '{}' (use left or right)", s))
}

fn parse_boundary(s: &str) -> Result<BoundaryType, String> {
    BoundaryType::from_str(s).ok_or_else(|| {
        format!(
            "unknown boundary '{}' (use divergent, convergent or transform)",
            s
        )
    })
}

fn parse_front(s: &str) -> Result<FrontKind, String> {
    FrontKind::from_str(s).ok_or_else(|| {
        format!(
            "unknown front '{}' (use warm, cold, stationary or occluded)",
            s
        )
    })
}

/// Consume a run at the requested pace
fn print_frames(sim: &Simulation, delay: Duration) {
    println!(
        "# {} boundary, {} frames, dt={}",
        sim.boundary.as_str(),
        sim.len(),
        sim.dt
    );
    if let Some(t) = sim.contact_frame() {
        println!("# plates in contact from frame {}", t);
    }
    println!("{:>6} {:>12} {:>12}", "frame", "plate1", "plate2");
    for frame in sim {
        println!(
            "{:>6} {:>12.4} {:>12.4}",
            frame.time_index, frame.position1, frame.position2
        );
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), SettingsError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), SettingsError> {
    match cli.command {
        Commands::Plates {
            config,
            save_config,
            speed1,
            direction1,
            speed2,
            direction2,
            boundary,
            frames,
            dt,
            plate_length,
            frame_delay_ms,
            json,
        } => {
            let mut settings = match config {
                Some(path) => SimSettings::load(&path)?,
                None => SimSettings::default(),
            };
            if let Some(v) = speed1 {
                settings.speed1 = v;
            }
            if let Some(v) = direction1 {
                settings.direction1 = v;
            }
            if let Some(v) = speed2 {
                settings.speed2 = v;
            }
            if let Some(v) = direction2 {
                settings.direction2 = v;
            }
            if let Some(v) = boundary {
                settings.boundary = v;
            }
            if let Some(v) = frames {
                settings.frame_count = v;
            }
            if let Some(v) = dt {
                settings.dt = v;
            }
            if let Some(v) = plate_length {
                settings.plate_length = v;
            }

            if let Some(path) = save_config {
                settings.save(&path)?;
            }

            let sim = settings.simulate()?;
            log::info!(
                "Simulated {} frames ({} boundary)",
                sim.len(),
                sim.boundary.as_str()
            );

            if json {
                print_json(&sim)?;
            } else {
                print_frames(&sim, Duration::from_millis(frame_delay_ms));
            }
        }
        Commands::Boundary { kind, angle } => {
            print_json(&scene::boundary_profile(kind, angle))?;
        }
        Commands::Layers => {
            print_json(&scene::cross_section())?;
        }
        Commands::Fronts { kind } => {
            log::info!("Rendering {}", kind.as_str());
            print_json(&scene::front_traces(kind))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
