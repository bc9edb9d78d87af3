//! CLI command implementations

pub mod clock;
pub mod projectile;
pub mod ray;

use anyhow::{Context, Result};
use rtk_canvas::{Canvas, Color};
use std::path::Path;
use tracing::debug;

/// Save canvas to a PPM file
pub fn save_canvas(path: &Path, canvas: &Canvas) -> Result<()> {
    canvas
        .save_ppm(path)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Truncate toward zero; `None` for NaN or infinite input.
pub fn truncate(v: f64) -> Option<i64> {
    v.is_finite().then(|| v.trunc() as i64)
}

/// Plot at pixel coordinates; off-canvas points are skipped.
///
/// Returns true if the pixel was written.
pub fn plot(canvas: &mut Canvas, x: i64, y: i64, color: Color) -> bool {
    let (Ok(px), Ok(py)) = (usize::try_from(x), usize::try_from(y)) else {
        debug!(x, y, "Skipping off-canvas point");
        return false;
    };
    match canvas.write_pixel(px, py, color) {
        Ok(()) => true,
        Err(e) => {
            debug!(x, y, error = %e, "Skipping off-canvas point");
            false
        }
    }
}

/// Parse "x,y,z" into three floats
pub fn parse_triple(s: &str) -> std::result::Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got '{s}'"));
    };
    let parse = |v: &str| v.parse::<f64>().map_err(|e| format!("invalid number '{v}': {e}"));
    Ok([parse(*x)?, parse(*y)?, parse(*z)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("1,2,3").unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(parse_triple(" -0.5, 2 ,1e2").unwrap(), [-0.5, 2.0, 100.0]);
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("1,2,x").is_err());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(1.9), Some(1));
        assert_eq!(truncate(-1.9), Some(-1));
        assert_eq!(truncate(-1.8e-14), Some(0));
        assert_eq!(truncate(f64::NAN), None);
        assert_eq!(truncate(f64::INFINITY), None);
    }

    #[test]
    fn test_plot_skips_off_canvas() {
        let mut canvas = Canvas::new(4, 4);
        assert!(plot(&mut canvas, 1, 2, Color::RED));
        assert_eq!(canvas.pixel_at(1, 2).unwrap(), Color::RED);
        assert!(!plot(&mut canvas, -1, 0, Color::RED));
        assert!(!plot(&mut canvas, 4, 0, Color::RED));
        assert!(!plot(&mut canvas, 0, 4, Color::RED));
    }
}
