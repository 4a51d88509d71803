//! horde CLI - headless zombie simulation.
//!
//! - `horde run` - tick zombies against a scripted player and print snapshots
//! - `horde config` - print the default zombie config as YAML

mod sim;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use horde_agent::ZombieConfig;
use horde_core::Vec2;
use tracing_subscriber::{fmt, EnvFilter};

use crate::sim::{PlayerScript, SimOptions, Simulation};

#[derive(Parser)]
#[command(name = "horde")]
#[command(about = "Behavior-tree zombie simulation", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless simulation
    Run {
        /// Zombie config (YAML); defaults when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the config seed
        #[arg(long)]
        seed: Option<u64>,

        /// Number of zombies to spawn
        #[arg(long, default_value_t = 1)]
        zombies: u64,

        /// Frames to simulate
        #[arg(long, default_value_t = 600)]
        ticks: u64,

        /// Seconds per frame
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,

        /// Player position as `x,y`
        #[arg(long, value_parser = parse_point, default_value = "640,512")]
        player: Vec2,

        /// Player score
        #[arg(long, default_value_t = 0)]
        player_score: u32,

        /// Move the player on a circle of this radius around `--player`
        #[arg(long)]
        orbit_radius: Option<f32>,

        /// Angular speed of the orbit (radians per second)
        #[arg(long, default_value_t = 0.5)]
        orbit_speed: f32,

        /// Ball lying on the field as `x,y`; may be repeated
        #[arg(long = "ball", value_parser = parse_point)]
        balls: Vec<Vec2>,

        /// Print a snapshot every N frames (0 prints only the last frame)
        #[arg(long, default_value_t = 60)]
        every: u64,
    },

    /// Print the default zombie config
    Config,
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            config,
            seed,
            zombies,
            ticks,
            dt,
            player,
            player_score,
            orbit_radius,
            orbit_speed,
            balls,
            every,
        } => {
            let mut zombie_config = match config {
                Some(path) => ZombieConfig::load(&path)?,
                None => ZombieConfig::default(),
            };
            if seed.is_some() {
                zombie_config.seed = seed;
            }

            let script = match orbit_radius {
                Some(radius) => PlayerScript::Orbit {
                    center: player,
                    radius,
                    speed: orbit_speed,
                },
                None => PlayerScript::Fixed(player),
            };

            let options = SimOptions {
                zombies,
                ticks,
                dt,
                every,
            };
            let mut sim = Simulation::new(&zombie_config, script, player_score, balls, options)?;
            let stdout = std::io::stdout();
            sim.run(&mut stdout.lock())
        }
        Commands::Config => {
            let yaml = ZombieConfig::default()
                .to_yaml()
                .context("Failed to render default config")?;
            print!("{yaml}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("640,512").unwrap(), Vec2::new(640.0, 512.0));
        assert_eq!(parse_point(" 1.5 , -2 ").unwrap(), Vec2::new(1.5, -2.0));
        assert!(parse_point("640").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
