//! Pointer tracking: the indicator follows positions read line by line.
//!
//! Input is one event per line:
//! - `x y` moves the pointer (whitespace or comma separated)
//! - `remove` simulates the host page deleting the indicator; it is
//!   recreated with the tone it started with
//! - blank lines and `#` comments are ignored

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use swatch_sampler::{Sampler, Surface};

use crate::output::Output;

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerEvent {
    Move { x: f64, y: f64 },
    Remove,
}

/// Decide the page tone, create the indicator, then follow the input.
///
/// Only moves that change the painted color are reported. Malformed lines
/// are logged and skipped.
pub fn run<S, R, W>(sampler: &mut Sampler<S>, input: R, out: &mut Output<W>) -> Result<()>
where
    S: Surface,
    R: BufRead,
    W: Write,
{
    let tone = sampler.page_tone();
    let mut indicator = sampler.create_indicator(tone);
    out.indicator_created(&indicator)?;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read pointer input")?;
        match parse_event(&line) {
            Ok(None) => {}
            Ok(Some(PointerEvent::Move { x, y })) => {
                if indicator.track(sampler.resolve_color_at(x, y)) {
                    out.indicator_moved(x, y, &indicator)?;
                }
            }
            Ok(Some(PointerEvent::Remove)) => {
                indicator = sampler.create_indicator(indicator.tone());
                out.indicator_created(&indicator)?;
            }
            Err(message) => log::warn!("input line {}: {message}", index + 1),
        }
    }
    Ok(())
}

fn parse_event(line: &str) -> Result<Option<PointerEvent>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    if line.eq_ignore_ascii_case("remove") {
        return Ok(Some(PointerEvent::Remove));
    }

    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected `x y`, got `{line}`"));
    };
    let coordinate = |text: &str| {
        text.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("`{text}` is not a coordinate"))
    };
    Ok(Some(PointerEvent::Move {
        x: coordinate(x)?,
        y: coordinate(y)?,
    }))
}
