//! JASC-PAL palette files.
//!
//! ```text
//! JASC-PAL
//! 0100
//! <count>
//! <r> <g> <b>
//! ...
//! ```

use std::io::Write;

use greedy_palette::{Palette, Rgb};

use crate::error::{AppError, AppResult};

const MAGIC: &str = "JASC-PAL";
const VERSION: &str = "0100";

/// Write `palette` as JASC-PAL, padded with placeholders to its full length.
pub fn write_jasc<W: Write>(mut out: W, palette: &Palette) -> AppResult<()> {
    let colors = palette.padded_colors();
    writeln!(out, "{MAGIC}")?;
    writeln!(out, "{VERSION}")?;
    writeln!(out, "{}", colors.len())?;
    for c in &colors {
        writeln!(out, "{} {} {}", c.r, c.g, c.b)?;
    }
    out.flush()?;
    Ok(())
}

/// Parse JASC-PAL text into its colors.
///
/// The entry count must match the declared count; trailing blank lines are
/// ignored.
pub fn parse_jasc(text: &str) -> AppResult<Vec<Rgb>> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    match lines.next() {
        Some(MAGIC) => {}
        other => {
            return Err(AppError::PaletteFormat(format!(
                "expected {MAGIC} header, found {other:?}"
            )))
        }
    }
    match lines.next() {
        Some(VERSION) => {}
        other => {
            return Err(AppError::PaletteFormat(format!(
                "expected version {VERSION}, found {other:?}"
            )))
        }
    }

    let count: usize = lines
        .next()
        .and_then(|l| l.parse().ok())
        .ok_or_else(|| AppError::PaletteFormat("missing or invalid entry count".to_string()))?;

    let colors = lines
        .enumerate()
        .map(|(i, line)| parse_entry(line).ok_or_else(|| {
            AppError::PaletteFormat(format!("entry {i}: expected `r g b`, found {line:?}"))
        }))
        .collect::<AppResult<Vec<_>>>()?;

    if colors.len() != count {
        return Err(AppError::PaletteFormat(format!(
            "declared {count} entries, found {}",
            colors.len()
        )));
    }
    Ok(colors)
}

fn parse_entry(line: &str) -> Option<Rgb> {
    let mut parts = line.split_whitespace().map(|p| p.parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb::new(r, g, b))
}
