//! atlasgen - build a color tile atlas from a scene file

mod scene;

use std::path::PathBuf;

use anyhow::{Context, Result};
use atlas::{AtlasSettings, grid_capacity, run};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::scene::{FileHost, SceneFile};

#[derive(Parser, Debug)]
#[command(name = "atlasgen", version, about = "Pack material colors into a texture atlas")]
struct Cli {
    /// Log every pipeline step
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an atlas PNG and remapped UVs for a scene
    Generate {
        /// Scene JSON with per-face colors and UVs
        #[arg(long)]
        scene: PathBuf,
        /// Output PNG path [default: <image name>.png]
        #[arg(long)]
        out: Option<PathBuf>,
        /// Write the scene with remapped UVs to this path
        #[arg(long)]
        uv_out: Option<PathBuf>,
        /// Settings JSON; command line values override it
        #[arg(long)]
        settings: Option<PathBuf>,
        #[command(flatten)]
        overrides: SettingsOverrides,
    },
    /// Print how many tiles fit into an image
    Capacity {
        #[arg(long, default_value_t = atlasgen_config::DEFAULT_IMAGE_WIDTH)]
        width: u32,
        #[arg(long, default_value_t = atlasgen_config::DEFAULT_IMAGE_HEIGHT)]
        height: u32,
        #[arg(long, default_value_t = atlasgen_config::DEFAULT_TILE_WIDTH)]
        tile_width: u32,
        #[arg(long, default_value_t = atlasgen_config::DEFAULT_TILE_HEIGHT)]
        tile_height: u32,
    },
}

#[derive(Args, Debug, Default)]
struct SettingsOverrides {
    /// Atlas width in pixels (64-4096)
    #[arg(long)]
    width: Option<u32>,
    /// Atlas height in pixels (64-4096)
    #[arg(long)]
    height: Option<u32>,
    /// Tile width in pixels (8-512)
    #[arg(long)]
    tile_width: Option<u32>,
    /// Tile height in pixels (8-512)
    #[arg(long)]
    tile_height: Option<u32>,
    /// Name of the atlas image, also the default output file stem
    #[arg(long)]
    name: Option<String>,
    /// Keep colors linear instead of converting to sRGB
    #[arg(long)]
    linear: bool,
    /// UV inset inside each tile in pixels
    #[arg(long)]
    margin: Option<f32>,
}

impl SettingsOverrides {
    fn apply(self, settings: &mut AtlasSettings) {
        if let Some(width) = self.width {
            settings.image_width = width;
        }
        if let Some(height) = self.height {
            settings.image_height = height;
        }
        if let Some(tile_width) = self.tile_width {
            settings.tile_width = tile_width;
        }
        if let Some(tile_height) = self.tile_height {
            settings.tile_height = tile_height;
        }
        if let Some(name) = self.name {
            settings.image_name = name;
        }
        if self.linear {
            settings.use_srgb = false;
        }
        if let Some(margin) = self.margin {
            settings.margin = margin;
        }
    }
}

fn load_settings(path: Option<&PathBuf>) -> Result<AtlasSettings> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("Invalid settings file {}", path.display()))
        }
        None => Ok(AtlasSettings::default()),
    }
}

/// Explicit output path, or `<image name>.png` in the working directory
fn output_path(out: Option<PathBuf>, settings: &AtlasSettings) -> PathBuf {
    out.unwrap_or_else(|| PathBuf::from(format!("{}.png", settings.image_name)))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = execute(cli.cmd) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn execute(cmd: Command) -> Result<()> {
    match cmd {
        Command::Generate {
            scene,
            out,
            uv_out,
            settings,
            overrides,
        } => {
            let mut atlas_settings = load_settings(settings.as_ref())?;
            overrides.apply(&mut atlas_settings);

            let out = output_path(out, &atlas_settings);
            let scene_file = SceneFile::load(&scene)?;
            let mut host = FileHost::new(scene_file, out, uv_out);
            let output = run(&mut host, &atlas_settings).context("Atlas generation failed")?;

            println!(
                "Packed {} faces into {} tiles ({}x{})",
                host.scene().faces.len(),
                output.tiles.len(),
                output.width,
                output.height
            );
        }
        Command::Capacity {
            width,
            height,
            tile_width,
            tile_height,
        } => {
            let capacity = grid_capacity((width, height), (tile_width, tile_height))?;
            println!("{capacity}");
        }
    }
    Ok(())
}
