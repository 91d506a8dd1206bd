//! Application entry point for the doodle garden viewer.
//!
//! This binary reads saved backend payloads, sets up eframe/egui and
//! delegates all drawing and interaction to [`Viewer`].

mod viewer;

use anyhow::{Context, Result};
use clap::Parser;
use garden_core::{
    config::LayoutConfig,
    garden::{self, Cosmetic},
    skin::Skin,
    types::Plant,
};
use std::{fs, path::Path, path::PathBuf};
use viewer::Viewer;

#[derive(Parser, Debug)]
#[command(name = "garden-view", about = "Paint a saved doodle garden")]
struct Args {
    /// Saved `/plants` response body.
    plants: PathBuf,

    /// Saved `/cosmetics` response body; the first owned cosmetic picks the skin.
    #[arg(long)]
    cosmetics: Option<PathBuf>,

    /// Skin to apply, overriding `--cosmetics` (e.g. `golden_leaves`).
    #[arg(long)]
    skin: Option<Skin>,

    /// JSON file overriding layout geometry.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Seed for the branch jitter; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn load_plants(path: &Path) -> Result<Vec<Plant>> {
    let json =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    garden::parse_plants(&json).with_context(|| format!("decoding plants in {}", path.display()))
}

fn load_cosmetics(path: &Path) -> Result<Vec<Cosmetic>> {
    let json =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    garden::parse_cosmetics(&json)
        .with_context(|| format!("decoding cosmetics in {}", path.display()))
}

fn load_layout(path: &Path) -> Result<LayoutConfig> {
    let json =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("decoding layout in {}", path.display()))
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` when the window is closed normally.
/// - `Err` if an input file cannot be read or decoded, or eframe fails to
///   create the native window.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let plants = load_plants(&args.plants)?;

    let skin = match (args.skin, &args.cosmetics) {
        (Some(skin), _) => Some(skin),
        (None, Some(path)) => garden::active_skin(&load_cosmetics(path)?),
        (None, None) => None,
    };

    let cfg = match &args.layout {
        Some(path) => load_layout(path)?,
        None => LayoutConfig::default(),
    };

    log::info!("loaded {} plants, skin = {:?}", plants.len(), skin);

    let viewer = Viewer::new(plants, skin, cfg, args.seed);

    eframe::run_native(
        "Doodle Garden",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(viewer))),
    )
    .map_err(|err| anyhow::anyhow!("viewer failed: {err}"))
}
