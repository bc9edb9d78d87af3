//! rtk - demo drivers for the ray tracing kernel
//!
//! Renders small PPM images from tuple and matrix math.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rtk")]
#[command(author, version, about = "Ray tracing kernel demos")]
#[command(long_about = "
Drives the geometry kernel to produce small PPM images.

Examples:
  rtk clock -o clock.ppm                      # Twelve hour marks
  rtk clock --size 200 -o small.ppm
  rtk projectile -o arc.ppm                   # Cannon shot under gravity and wind
  rtk projectile --speed 11.25 -W 900 -H 550 -o arc.ppm
  rtk ray --origin 2,3,4 --direction 1,0,0 -t 0 1 2.5
  RUST_LOG=debug rtk clock -o clock.ppm       # Verbose logging
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot the twelve hour marks of a clock face
    Clock(ClockArgs),

    /// Simulate a projectile and plot its trajectory
    #[command(visible_alias = "p")]
    Projectile(ProjectileArgs),

    /// Print positions along a ray
    Ray(RayArgs),
}

#[derive(Args)]
struct ClockArgs {
    /// Output PPM file
    #[arg(short, long, default_value = "clock.ppm")]
    output: PathBuf,

    /// Canvas width and height in pixels
    #[arg(short, long, default_value = "400")]
    size: usize,
}

#[derive(Args)]
struct ProjectileArgs {
    /// Output PPM file
    #[arg(short, long, default_value = "projectile.ppm")]
    output: PathBuf,

    /// Canvas width
    #[arg(short = 'W', long, default_value = "900")]
    width: usize,

    /// Canvas height
    #[arg(short = 'H', long, default_value = "550")]
    height: usize,

    /// Launch height of the projectile
    #[arg(long, default_value = "250")]
    start_height: f64,

    /// Launch speed along normalize(2, 1, 0)
    #[arg(long, default_value = "8")]
    speed: f64,

    /// Stop after this many ticks even if still airborne
    #[arg(long, default_value = "100000")]
    max_ticks: usize,
}

#[derive(Args)]
struct RayArgs {
    /// Ray origin as x,y,z
    #[arg(long, value_parser = commands::parse_triple, allow_hyphen_values = true)]
    origin: [f64; 3],

    /// Ray direction as x,y,z
    #[arg(long, value_parser = commands::parse_triple, allow_hyphen_values = true)]
    direction: [f64; 3],

    /// Parameters to evaluate
    #[arg(short = 't', long = "at", num_args = 1.., required = true, allow_negative_numbers = true)]
    t: Vec<f64>,
}

/// Installs the fmt subscriber; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Clock(args) => commands::clock::run(args, cli.verbose),
        Commands::Projectile(args) => commands::projectile::run(args, cli.verbose),
        Commands::Ray(args) => commands::ray::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ray_args() {
        let cli = Cli::try_parse_from([
            "rtk", "ray", "--origin", "-1,2,3", "--direction", "1,0,0", "-t", "0", "-2.5",
        ])
        .unwrap();
        let Commands::Ray(args) = cli.command else {
            panic!("expected ray command");
        };
        assert_eq!(args.origin, [-1.0, 2.0, 3.0]);
        assert_eq!(args.t, vec![0.0, -2.5]);
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["rtk", "-vv", "clock"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
