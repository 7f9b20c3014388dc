//! tassel: render a tassel/embroidery patch mockup from a photo.
//!
//! Loads an image, centres it on a square canvas, runs the mockup
//! pipeline, and writes the result as PNG.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin tassel -- [OPTIONS] <INPUT>
//! ```
//!
//! Set `RUST_LOG=debug` for per-stage counts.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tassel_pipeline::{RenderConfig, Rendered, canvas, render_staged, style};

/// Render a tassel/embroidery patch mockup from a subject photo on a
/// light background.
///
/// The output is a stylised preview, not a dimensionally accurate
/// template.
#[derive(Parser)]
#[command(name = "tassel", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, WebP).
    input: PathBuf,

    /// Output PNG path. Defaults to `tassel-mockup-<millis>.png`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Padding around the subject, in pixels (capped at 60).
    #[arg(long, default_value_t = RenderConfig::DEFAULT_PADDING)]
    padding: u32,

    /// Nominal fringe stroke length, in pixels.
    #[arg(long, default_value_t = RenderConfig::DEFAULT_FRINGE_LENGTH)]
    fringe_length: u32,

    /// Number of fringe strokes.
    #[arg(long, default_value_t = RenderConfig::DEFAULT_FRINGE_DENSITY)]
    fringe_density: u32,

    /// Full render config as a JSON string.
    ///
    /// When provided, `--padding`, `--fringe-length` and
    /// `--fringe-density` are ignored. Missing fields take their defaults.
    #[arg(long)]
    config_json: Option<String>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Side length of the square canvas, in pixels.
    #[arg(
        long,
        default_value_t = style::CANVAS_SIDE,
        value_parser = clap::builder::RangedU64ValueParser::<u32>::new().range(1..),
    )]
    canvas_size: u32,

    /// Also write mask, padded and edge previews into this directory.
    #[arg(long, value_name = "DIR")]
    stages: Option<PathBuf>,

    /// Print render statistics as JSON on stdout.
    #[arg(long)]
    json: bool,
}

/// Build a [`RenderConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and the
/// individual flags are ignored.
fn config_from_cli(cli: &Cli) -> Result<RenderConfig, String> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    Ok(RenderConfig {
        padding: cli.padding,
        fringe_length: cli.fringe_length,
        fringe_density: cli.fringe_density,
    })
}

/// Default output name, timestamped like a browser download.
fn default_output() -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());
    PathBuf::from(format!("tassel-mockup-{millis}.png"))
}

/// Write the intermediate masks as grayscale PNGs.
fn write_stages(dir: &Path, rendered: &Rendered) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;
    for (name, mask) in [
        ("mask.png", &rendered.mask),
        ("padded.png", &rendered.padded),
        ("edges.png", &rendered.edges),
    ] {
        let path = dir.join(name);
        mask.to_luma().save(&path)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_from_cli(cli)?;

    log::info!("reading image from {}", cli.input.display());
    let source = std::fs::read(&cli.input)
        .map_err(|e| e.to_string())
        .and_then(|bytes| {
            canvas::load_centered(&bytes, cli.canvas_size).map_err(|e| e.to_string())
        })
        .map_err(|e| {
            format!(
                "could not load {}: {e} (try a different image)",
                cli.input.display()
            )
        })?;

    log::info!(
        "rendering {}x{} canvas: padding {}px, fringe {}px x {}",
        source.width(),
        source.height(),
        config.padding,
        config.fringe_length,
        config.fringe_density,
    );
    let rendered = match cli.seed {
        Some(seed) => render_staged(&source, &config, &mut StdRng::seed_from_u64(seed))?,
        None => render_staged(&source, &config, &mut rand::rng())?,
    };

    let output = cli.output.clone().unwrap_or_else(default_output);
    rendered.image.save(&output)?;
    log::info!("saved {}", output.display());

    if let Some(ref dir) = cli.stages {
        write_stages(dir, &rendered)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rendered.stats)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tassel").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_build_config() {
        let cli = parse(&[
            "in.png",
            "--padding",
            "4",
            "--fringe-length",
            "9",
            "--fringe-density",
            "100",
        ]);
        let config = config_from_cli(&cli).unwrap();
        assert_eq!(
            config,
            RenderConfig {
                padding: 4,
                fringe_length: 9,
                fringe_density: 100,
            }
        );
    }

    #[test]
    fn defaults_match_render_config() {
        let cli = parse(&["in.png"]);
        assert_eq!(config_from_cli(&cli).unwrap(), RenderConfig::default());
        assert_eq!(cli.canvas_size, style::CANVAS_SIDE);
        assert!(cli.output.is_none());
    }

    #[test]
    fn config_json_overrides_flags() {
        let cli = parse(&[
            "in.png",
            "--padding",
            "4",
            "--config-json",
            r#"{"padding": 30, "fringe_length": 5, "fringe_density": 7}"#,
        ]);
        let config = config_from_cli(&cli).unwrap();
        assert_eq!(config.padding, 30);
        assert_eq!(config.fringe_density, 7);
    }

    #[test]
    fn bad_config_json_is_reported() {
        let cli = parse(&["in.png", "--config-json", "{nope"]);
        let err = config_from_cli(&cli).unwrap_err();
        assert!(err.starts_with("Error parsing --config-json"));
    }

    #[test]
    fn zero_canvas_size_is_rejected() {
        let result = Cli::try_parse_from(["tassel", "in.png", "--canvas-size", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn default_output_is_timestamped_png() {
        let name = default_output();
        let name = name.to_string_lossy();
        assert!(name.starts_with("tassel-mockup-"));
        assert!(name.ends_with(".png"));
    }
}
