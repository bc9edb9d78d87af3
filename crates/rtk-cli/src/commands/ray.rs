//! Ray command
//!
//! Prints `position(t)` for each requested parameter.

use crate::RayArgs;
use anyhow::{Context, Result};
use rtk_math::{Ray, Tuple};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// One line per parameter: `t = <t>  <position>`.
pub fn positions(ray: &Ray, ts: &[f64]) -> Vec<String> {
    ts.iter()
        .map(|&t| format!("t = {t:>8.3}  {}", ray.position(t)))
        .collect()
}

pub fn run(args: RayArgs, verbose: u8) -> Result<()> {
    trace!(origin = ?args.origin, direction = ?args.direction, count = args.t.len(), "ray::run");

    let [ox, oy, oz] = args.origin;
    let [dx, dy, dz] = args.direction;
    let ray = Ray::new(Tuple::point(ox, oy, oz), Tuple::vector(dx, dy, dz))
        .context("Failed to construct ray")?;

    if verbose > 0 {
        println!("origin    {}", ray.origin());
        println!("direction {}", ray.direction());
    }
    for line in positions(&ray, &args.t) {
        println!("{line}");
    }

    Ok(())
}
