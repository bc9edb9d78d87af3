//! Plain PPM (P3) encoding.
//!
//! Layout:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! r g b r g b ...     one or more lines per pixel row
//! ```
//!
//! Channel values are `round(c * 255)` clamped to `0..=255`. No line is
//! longer than [`MAX_LINE_LEN`] characters; long rows wrap at a value
//! boundary. The output always ends with a newline.
//!
//! With the `parallel` feature, pixel rows are encoded on the rayon pool.

use crate::{Canvas, Color, MAX_CHANNEL};
use rtk_core::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Magic number for plain-text PPM.
pub const MAGIC: &str = "P3";

/// Longest line a PPM reader is required to accept.
pub const MAX_LINE_LEN: usize = 70;

/// Header lines: magic, dimensions, maximum channel value.
pub fn header(canvas: &Canvas) -> String {
    format!("{MAGIC}\n{} {}\n{MAX_CHANNEL}\n", canvas.width(), canvas.height())
}

/// Encodes one pixel row, wrapped to [`MAX_LINE_LEN`], newline-terminated.
pub fn encode_row(row: &[Color]) -> String {
    let mut out = String::with_capacity(row.len() * 12);
    let mut line_len = 0;
    for value in row.iter().flat_map(Color::to_rgb8) {
        let token = value.to_string();
        if line_len > 0 && line_len + 1 + token.len() > MAX_LINE_LEN {
            out.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(&token);
        line_len += token.len();
    }
    out.push('\n');
    out
}

#[cfg(feature = "parallel")]
fn encode_rows(canvas: &Canvas) -> Vec<String> {
    (0..canvas.height())
        .into_par_iter()
        .map(|y| encode_row(canvas.row(y)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn encode_rows(canvas: &Canvas) -> Vec<String> {
    (0..canvas.height()).map(|y| encode_row(canvas.row(y))).collect()
}

/// Encodes the whole canvas as PPM text.
///
/// # Example
///
/// ```rust
/// use rtk_canvas::{ppm, Canvas, Color};
///
/// let mut canvas = Canvas::new(2, 1);
/// canvas.write_pixel(0, 0, Color::RED).unwrap();
/// assert_eq!(ppm::to_string(&canvas), "P3\n2 1\n255\n255 0 0 0 0 0\n");
/// ```
pub fn to_string(canvas: &Canvas) -> String {
    let mut out = header(canvas);
    for row in encode_rows(canvas) {
        out.push_str(&row);
    }
    out
}

/// Writes PPM text to any writer.
///
/// # Errors
///
/// [`rtk_core::Error::Io`] if the writer fails.
pub fn write<W: Write>(canvas: &Canvas, mut writer: W) -> Result<()> {
    writer.write_all(header(canvas).as_bytes())?;
    for row in encode_rows(canvas) {
        writer.write_all(row.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes PPM text to a file, replacing it if it exists.
///
/// # Errors
///
/// [`rtk_core::Error::Io`] if the file cannot be created or written.
pub fn save<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), width = canvas.width(), height = canvas.height(), "Saving PPM");
    let file = File::create(path)?;
    write(canvas, BufWriter::new(file))?;
    info!(path = %path.display(), "Wrote PPM");
    Ok(())
}

impl Canvas {
    /// Encodes this canvas as PPM text. See [`to_string`].
    pub fn to_ppm(&self) -> String {
        to_string(self)
    }

    /// Writes this canvas as PPM text to `writer`. See [`write`].
    pub fn write_ppm<W: Write>(&self, writer: W) -> Result<()> {
        write(self, writer)
    }

    /// Saves this canvas as a PPM file. See [`save`].
    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save(self, path)
    }
}
