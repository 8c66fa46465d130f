//! Clutch CLI
//!
//! Command-line tools around the ambient background engine:
//! - Run the background headlessly and report what it drew
//! - Generate a default config file
//! - Validate a config/theme file

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clutch::ambient::{
    AmbientBackground, DrawCommand, FrameOutcome, ManualHost, Point, RecordingSurface, Surface,
    Viewport,
};
use clutch::config::{Config, LoggingConfig};

#[derive(Parser)]
#[command(name = "clutch-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for the Clutch ambient background")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the background on an in-memory surface
    Simulate {
        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f64,
        /// Viewport height in pixels
        #[arg(long, default_value = "720")]
        height: f64,
        /// Frames to render after the initial one
        #[arg(long, default_value = "600")]
        frames: u64,
        /// Random seed for the particle field
        #[arg(long, default_value = "0")]
        seed: u64,
        /// Pointer position as X,Y
        #[arg(long, value_parser = parse_point)]
        pointer: Option<Point>,
        /// Milliseconds between frames
        #[arg(long, default_value = "16.667")]
        frame_ms: f64,
        /// Resize to WIDTHxHEIGHT halfway through
        #[arg(long, value_parser = parse_viewport)]
        resize: Option<Viewport>,
        /// Theme/config file overriding --config
        #[arg(long)]
        theme: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a config file's theme
    Theme {
        /// File to check
        #[arg(long)]
        check: PathBuf,
    },
}

/// What a simulation run drew
#[derive(Debug, Serialize)]
struct SimulationReport {
    viewport: String,
    final_viewport: String,
    seed: u64,
    particles: usize,
    frames: u64,
    recycled: usize,
    stale_callbacks: usize,
    last_frame_commands: usize,
    last_frame_circles: usize,
    pointer_glow: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Simulate {
            width,
            height,
            frames,
            seed,
            pointer,
            frame_ms,
            resize,
            theme,
        } => {
            let config = match theme {
                Some(path) => Config::load(&path)?,
                None => config,
            };
            let viewport = Viewport::new(width, height);
            let report = simulate(&config, viewport, frames, seed, pointer, frame_ms, resize);

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                _ => print_report(&report),
            }
        }

        Commands::Config { output } => {
            let config = clutch::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }

        Commands::Theme { check } => {
            let config = Config::load(&check)?;
            let theme = &config.ambient;

            println!("{:?}: ok", check);
            println!("  Max particles:       {}", theme.max_particles);
            println!("  Pixels per particle: {}", theme.pixels_per_particle);
            println!(
                "  Palette:             {}",
                theme
                    .palette
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            for (i, wave) in theme.waves.iter().enumerate() {
                println!(
                    "  Wave {}:              baseline {} amplitude {} wavelength {} {}",
                    i + 1,
                    wave.baseline_ratio,
                    wave.amplitude,
                    wave.wavelength,
                    wave.color
                );
            }
            println!(
                "  Highlight:           radius {} {}",
                theme.highlight.radius, theme.highlight.color
            );
        }
    }

    Ok(())
}

fn simulate(
    config: &Config,
    viewport: Viewport,
    frames: u64,
    seed: u64,
    pointer: Option<Point>,
    frame_ms: f64,
    resize: Option<Viewport>,
) -> SimulationReport {
    let mut background: AmbientBackground<RecordingSurface, ManualHost> =
        AmbientBackground::with_rng(
            config.ambient.clone(),
            ManualHost::new(),
            StdRng::seed_from_u64(seed),
        );

    background.mount(Some(RecordingSurface::frame_only(Viewport::default())), viewport, 0.0);
    let particles = background.pool().map(|p| p.len()).unwrap_or(0);
    tracing::info!(%viewport, particles, seed, "Simulating {} frames", frames);

    if let Some(p) = pointer {
        background.on_pointer_move(p.x, p.y);
    }

    // Halfway through, but never before the first callback
    let resize_at = (frames / 2).max(1);
    let mut recycled = 0;
    let mut stale_callbacks = 0;
    for frame in 1..=frames {
        if frame == resize_at {
            if let Some(size) = resize {
                tracing::info!(%size, frame, "Resizing viewport");
                background.on_resize(size);
            }
        }

        let Some(generation) = background.host_mut().next_frame() else {
            break;
        };
        match background.on_frame(generation, frame as f64 * frame_ms) {
            FrameOutcome::Rendered(stats) => recycled += stats.recycled,
            FrameOutcome::Stale => stale_callbacks += 1,
        }
    }

    let (last_frame_commands, last_frame_circles, pointer_glow) = background
        .surface()
        .map(|s| {
            let visible = s.visible();
            let circles = visible
                .iter()
                .filter(|c| matches!(c, DrawCommand::Circle { .. }))
                .count();
            let glow = visible
                .iter()
                .any(|c| matches!(c, DrawCommand::RadialGradient { .. }));
            (visible.len(), circles, glow)
        })
        .unwrap_or((0, 0, false));

    let final_viewport = background
        .surface()
        .map(|s| s.size())
        .unwrap_or(viewport)
        .to_string();

    let report = SimulationReport {
        viewport: viewport.to_string(),
        final_viewport,
        seed,
        particles,
        frames: background.frames(),
        recycled,
        stale_callbacks,
        last_frame_commands,
        last_frame_circles,
        pointer_glow,
    };

    background.unmount();
    report
}

fn print_report(report: &SimulationReport) {
    println!("Viewport:            {}", report.viewport);
    if report.final_viewport != report.viewport {
        println!("Resized to:          {}", report.final_viewport);
    }
    println!("Seed:                {}", report.seed);
    println!("Particles:           {}", report.particles);
    println!("Frames rendered:     {}", report.frames);
    println!("Particles recycled:  {}", report.recycled);
    println!("Stale callbacks:     {}", report.stale_callbacks);
    println!();
    println!("Last frame:");
    println!("  Draw commands:     {}", report.last_frame_commands);
    println!("  Circles:           {}", report.last_frame_circles);
    println!(
        "  Pointer glow:      {}",
        if report.pointer_glow { "yes" } else { "no" }
    );
}

fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let writer = match &logging.file {
        Some(path) => BoxMakeWriter::new(Mutex::new(open_log_file(Path::new(path))?)),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let (json, pretty) = if logging.format == "json" {
        (Some(tracing_subscriber::fmt::layer().json().with_writer(writer)), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer().with_writer(writer)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();
    Ok(())
}

fn open_log_file(path: &Path) -> anyhow::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {:?}", path))
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {:?}", s))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x: {:?}", x))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y: {:?}", y))?;
    Ok(Point::new(x, y))
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {:?}", s))?;
    let width = w.trim().parse().map_err(|_| format!("invalid width: {:?}", w))?;
    let height = h.trim().parse().map_err(|_| format!("invalid height: {:?}", h))?;
    Ok(Viewport::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("120, 80").unwrap(), Point::new(120.0, 80.0));
        assert!(parse_point("120").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_parse_viewport() {
        assert_eq!(parse_viewport("800x600").unwrap(), Viewport::new(800.0, 600.0));
        assert!(parse_viewport("800").is_err());
    }

    #[test]
    fn test_simulate_report() {
        let report = simulate(
            &Config::default(),
            Viewport::new(400.0, 300.0),
            30,
            7,
            Some(Point::new(50.0, 50.0)),
            16.0,
            None,
        );

        assert_eq!(report.particles, 20);
        assert_eq!(report.frames, 31);
        assert_eq!(report.stale_callbacks, 0);
        assert_eq!(report.last_frame_circles, 20);
        assert_eq!(report.last_frame_commands, 2 + 20 + 1);
        assert!(report.pointer_glow);
    }

    #[test]
    fn test_simulate_with_resize() {
        let report = simulate(
            &Config::default(),
            Viewport::new(400.0, 300.0),
            10,
            1,
            None,
            16.0,
            Some(Viewport::new(200.0, 100.0)),
        );

        assert_eq!(report.particles, 20);
        assert_eq!(report.last_frame_circles, 20);
        assert_eq!(report.final_viewport, Viewport::new(200.0, 100.0).to_string());
        assert!(!report.pointer_glow);
    }

    #[test]
    fn test_simulate_single_frame_still_resizes() {
        let report = simulate(
            &Config::default(),
            Viewport::new(400.0, 300.0),
            1,
            3,
            None,
            16.0,
            Some(Viewport::new(200.0, 100.0)),
        );

        assert_eq!(report.frames, 2);
        assert_eq!(report.final_viewport, Viewport::new(200.0, 100.0).to_string());
    }
}
