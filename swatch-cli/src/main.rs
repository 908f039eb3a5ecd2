//! swatch CLI - effective background color probe
//!
//! Loads a JSON scene (see `swatch_dom::scene`) and answers questions about
//! the colors a viewer would see on it.

mod output;
mod track;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swatch_common::logging::{LoggingConfig, init_logging};
use swatch_common::warning::clear_warnings;
use swatch_dom::{DomTree, load_scene};
use swatch_sampler::cache::DEFAULT_CACHE_CAPACITY;
use swatch_sampler::heuristic::DEFAULT_STEP_PX;
use swatch_sampler::{Sampler, SamplerConfig};

use output::Output;

/// swatch - find the color under the pointer
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Effective color at a point
    swatch probe page.json 120 340

    # Light or dark page, sampling every 50px
    swatch theme page.json --step 50

    # Which elements contributed to a color
    swatch trace page.json 120 340

    # Follow pointer positions ("x y" per line) from stdin
    printf '10 10\n400 300\n' | swatch track page.json
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Don't render color swatches with ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    /// Resolve every lookup from scratch
    #[arg(long, global = true)]
    no_cache: bool,

    /// Maximum number of cached element colors
    #[arg(long, global = true, default_value_t = DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the effective color at a point
    Probe {
        /// Scene file
        scene: PathBuf,
        /// Horizontal viewport coordinate
        x: f64,
        /// Vertical viewport coordinate
        y: f64,
    },
    /// Classify the page as light or dark
    Theme {
        /// Scene file
        scene: PathBuf,
        /// Grid spacing in CSS pixels
        #[arg(long, default_value_t = DEFAULT_STEP_PX)]
        step: f64,
    },
    /// Show each element composited into the color at a point
    Trace {
        /// Scene file
        scene: PathBuf,
        /// Horizontal viewport coordinate
        x: f64,
        /// Vertical viewport coordinate
        y: f64,
    },
    /// Read "x y" pointer positions from stdin and report indicator updates
    Track {
        /// Scene file
        scene: PathBuf,
        /// Grid spacing for the initial light/dark decision
        #[arg(long, default_value_t = DEFAULT_STEP_PX)]
        step: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let config = SamplerConfig {
        cache_capacity: if cli.no_cache { 0 } else { cli.cache_capacity },
        ..SamplerConfig::default()
    };
    let stdout = io::stdout();
    let mut out = Output::new(stdout.lock(), cli.json, !cli.no_color);

    match cli.command {
        Command::Probe { scene, x, y } => {
            let mut sampler = Sampler::with_config(load(&scene)?, config);
            let color = sampler.resolve_color_at(x, y);
            out.probe(x, y, color)?;
        }
        Command::Theme { scene, step } => {
            let mut sampler = Sampler::with_config(load(&scene)?, SamplerConfig {
                step_px: step,
                ..config
            });
            let sample = sampler.sample_page(step);
            out.theme(&sample)?;
        }
        Command::Trace { scene, x, y } => {
            let tree = load(&scene)?;
            let resolution = Sampler::with_config(&tree, config).trace_at(x, y);
            out.trace(&tree, x, y, &resolution)?;
        }
        Command::Track { scene, step } => {
            let mut sampler = Sampler::with_config(load(&scene)?, SamplerConfig {
                step_px: step,
                ..config
            });
            let stdin = io::stdin();
            track::run(&mut sampler, stdin.lock(), &mut out)?;
        }
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Load a scene, starting a fresh round of deduplicated warnings.
fn load(path: &Path) -> Result<DomTree> {
    clear_warnings();
    load_scene(path).with_context(|| format!("could not load scene {}", path.display()))
}
