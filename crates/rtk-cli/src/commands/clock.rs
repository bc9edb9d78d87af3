//! Clock command
//!
//! Rotates the twelve o'clock point about Y in steps of π/6 and plots
//! each hour mark, viewed from above (x right, z down).

use crate::ClockArgs;
use anyhow::{ensure, Result};
use rtk_canvas::{Canvas, Color};
use rtk_math::{transform, Tuple};
use std::f64::consts::PI;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Hour marks in world space on a unit circle in the XZ plane.
pub fn hour_marks() -> Result<Vec<Tuple>> {
    let twelve = Tuple::point(0.0, 0.0, 1.0);
    (0..12u32)
        .map(|hour| {
            let rotation = transform::rotation_y(f64::from(hour) * PI / 6.0);
            Ok(rotation.multiply_tuple(twelve)?)
        })
        .collect()
}

/// Draws the marks on a `size x size` canvas.
pub fn render(size: usize) -> Result<Canvas> {
    let mut canvas = Canvas::new(size, size);
    let mid = i64::try_from(size / 2)?;
    let radius = (size / 4) as f64;

    for (hour, mark) in hour_marks()?.into_iter().enumerate() {
        // offsets are truncated before centering
        let (Some(dx), Some(dz)) = (
            super::truncate(mark.x * radius),
            super::truncate(mark.z * radius),
        ) else {
            continue;
        };
        let (x, y) = (mid + dx, mid + dz);
        trace!(hour, x, y, "hour mark");
        super::plot(&mut canvas, x, y, Color::WHITE);
    }
    Ok(canvas)
}

pub fn run(args: ClockArgs, verbose: u8) -> Result<()> {
    trace!(output = %args.output.display(), size = args.size, "clock::run");
    ensure!(args.size > 0, "canvas size must be positive");

    info!(size = args.size, "Rendering clock face");
    let canvas = render(args.size)?;

    super::save_canvas(&args.output, &canvas)?;

    if verbose > 0 {
        println!("Wrote {}", args.output.display());
    }

    Ok(())
}
