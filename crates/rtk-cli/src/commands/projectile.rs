//! Projectile command
//!
//! Fires a projectile from `(0, start_height, 0)` and steps it under
//! constant gravity and wind until it reaches the ground, plotting each
//! position in red. Canvas y grows downward, so world y is flipped.

use crate::ProjectileArgs;
use anyhow::{ensure, Result};
use rtk_canvas::{Canvas, Color};
use rtk_math::Tuple;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// A moving body: a position point and a velocity vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Tuple,
    pub velocity: Tuple,
}

/// Constant accelerations applied every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub gravity: Tuple,
    pub wind: Tuple,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: Tuple::vector(0.0, -0.1, 0.0),
            wind: Tuple::vector(-0.01, 0.0, 0.0),
        }
    }
}

/// Advances one step: move by the velocity, then accelerate.
pub fn tick(env: &Environment, proj: Projectile) -> Result<Projectile> {
    let position = proj.position.add(proj.velocity)?;
    let velocity = proj.velocity.add(env.gravity)?.add(env.wind)?;
    Ok(Projectile { position, velocity })
}

/// Positions from launch until the projectile is at or below y = 0,
/// or `max_ticks` positions have been produced.
pub fn trajectory(env: &Environment, launch: Projectile, max_ticks: usize) -> Result<Vec<Tuple>> {
    let mut path = Vec::new();
    let mut p = launch;
    while p.position.y > 0.0 && path.len() < max_ticks {
        path.push(p.position);
        p = tick(env, p)?;
    }
    Ok(path)
}

/// World position to canvas pixel: x truncated, y flipped after truncation.
pub fn to_canvas(height: i64, position: Tuple) -> Option<(i64, i64)> {
    let x = super::truncate(position.x)?;
    let y = super::truncate(position.y)?;
    Some((x, height - y))
}

pub fn run(args: ProjectileArgs, verbose: u8) -> Result<()> {
    trace!(
        output = %args.output.display(),
        width = args.width,
        height = args.height,
        speed = args.speed,
        "projectile::run"
    );
    ensure!(args.width > 0 && args.height > 0, "canvas dimensions must be positive");

    let launch = Projectile {
        position: Tuple::point(0.0, args.start_height, 0.0),
        velocity: Tuple::vector(2.0, 1.0, 0.0).normalize().scale(args.speed),
    };
    let env = Environment::default();

    info!(start_height = args.start_height, speed = args.speed, "Running simulation");
    let path = trajectory(&env, launch, args.max_ticks)?;
    if path.len() == args.max_ticks {
        debug!(max_ticks = args.max_ticks, "Simulation stopped before landing");
    }

    let mut canvas = Canvas::new(args.width, args.height);
    let height = i64::try_from(args.height)?;
    let plotted = path
        .iter()
        .filter_map(|&p| to_canvas(height, p))
        .filter(|&(x, y)| super::plot(&mut canvas, x, y, Color::RED))
        .count();
    info!(ticks = path.len(), plotted, "Simulation finished");

    super::save_canvas(&args.output, &canvas)?;

    if verbose > 0 {
        println!("{} ticks, {} points plotted, wrote {}", path.len(), plotted, args.output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick() {
        let env = Environment::default();
        let p = Projectile {
            position: Tuple::point(0.0, 1.0, 0.0),
            velocity: Tuple::vector(1.0, 1.0, 0.0),
        };
        let next = tick(&env, p).unwrap();
        assert_eq!(next.position, Tuple::point(1.0, 2.0, 0.0));
        assert!(next.velocity.equal(&Tuple::vector(0.99, 0.9, 0.0)));
        assert!(next.position.is_point() && next.velocity.is_vector());
    }

    #[test]
    fn test_tick_rejects_point_velocity() {
        let env = Environment::default();
        let p = Projectile {
            position: Tuple::point(0.0, 1.0, 0.0),
            velocity: Tuple::point(1.0, 1.0, 0.0),
        };
        assert!(tick(&env, p).is_err());
    }

    #[test]
    fn test_trajectory_lands() {
        let env = Environment::default();
        let launch = Projectile {
            position: Tuple::point(0.0, 1.0, 0.0),
            velocity: Tuple::vector(1.0, 1.0, 0.0).normalize(),
        };
        let path = trajectory(&env, launch, 10_000).unwrap();
        assert!(!path.is_empty() && path.len() < 10_000);
        assert!(path.iter().all(|p| p.y > 0.0));
        assert_eq!(path[0], launch.position);
    }

    #[test]
    fn test_trajectory_respects_max_ticks() {
        let env = Environment::default();
        let launch = Projectile {
            position: Tuple::point(0.0, 250.0, 0.0),
            velocity: Tuple::vector(2.0, 1.0, 0.0),
        };
        assert_eq!(trajectory(&env, launch, 5).unwrap().len(), 5);
    }

    #[test]
    fn test_to_canvas() {
        assert_eq!(to_canvas(550, Tuple::point(1.9, 250.0, 0.0)), Some((1, 300)));
        assert_eq!(to_canvas(55, Tuple::point(3.2, 0.5, 0.0)), Some((3, 55)));
        assert_eq!(to_canvas(55, Tuple::point(3.2, 24.7, 0.0)), Some((3, 31)));
        assert_eq!(to_canvas(55, Tuple::point(f64::NAN, 1.0, 0.0)), None);
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("arc.ppm");
        let args = ProjectileArgs {
            output: output.clone(),
            width: 90,
            height: 55,
            start_height: 25.0,
            speed: 2.0,
            max_ticks: 100_000,
        };
        run(args, 0).unwrap();
        let text = std::fs::read_to_string(output).unwrap();
        assert!(text.starts_with("P3\n90 55\n255\n"));
        assert!(text.contains("255 0 0"));
    }
}
