//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod list;
mod render;
mod trace;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::chip::SpriteChip;
use crate::composition::{DrawReport, DrawRequest, Warning};
use crate::config::{load_config, merge_cli_overrides, CliOverrides, MetaSpriteConfig};
use crate::game_chip::GameChip;
use crate::models::{DrawMode, SpriteCollection};
use crate::parser::load_collections;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Selector prefix forcing a lookup by name
const NAME_PREFIX: &str = "name:";

/// msprite - Compose and draw meta-sprites
#[derive(Parser)]
#[command(name = "msprite")]
#[command(about = "msprite - Compose meta-sprites from sprite placements and draw them")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that draws a meta-sprite
#[derive(Args, Debug, Clone)]
pub struct DrawArgs {
    /// Meta-sprite to draw: an id (-1 draws nothing), a name, or `name:<name>`
    /// for names that look like numbers
    #[arg(short, long, allow_negative_numbers = true)]
    pub meta_sprite: String,

    /// X position of the meta-sprite's top-left corner
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub x: i32,

    /// Y position of the meta-sprite's top-left corner
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub y: i32,

    /// Mirror the meta-sprite horizontally
    #[arg(long)]
    pub flip_h: bool,

    /// Mirror the meta-sprite vertically
    #[arg(long)]
    pub flip_v: bool,

    /// Draw mode: background, sprite-below, tile, sprite, sprite-above, ui, ui-above
    #[arg(long, default_value = "sprite")]
    pub mode: String,

    /// Added to every placement's color offset
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub color_offset: i32,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the meta-sprites in a collections file
    List {
        /// Collections file (JSON5 array or one collection per line)
        input: PathBuf,

        /// Path to metasprite.toml (default: discovered from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the sprite draws a meta-sprite produces, one JSON object per line
    Trace {
        /// Collections file (JSON5 array or one collection per line)
        input: PathBuf,

        #[command(flatten)]
        draw: DrawArgs,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Path to metasprite.toml (default: discovered from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Draw a meta-sprite from a sprite sheet and save it as PNG
    Render {
        /// Collections file (JSON5 array or one collection per line)
        input: PathBuf,

        /// Sprite sheet image; sprites are numbered row-major from the top-left
        #[arg(long)]
        sheet: PathBuf,

        /// Output file or directory (ends with /).
        /// If omitted: {input}_{meta_sprite}.png
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        draw: DrawArgs,

        /// Scale output by integer factor (1-16)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=16))]
        scale: Option<u8>,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Path to metasprite.toml (default: discovered from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { input, config } => list::run_list(&input, config.as_deref()),
        Commands::Trace { input, draw, strict, config } => {
            trace::run_trace(&input, &draw, strict, config.as_deref())
        }
        Commands::Render { input, sheet, output, draw, scale, strict, config } => {
            render::run_render(
                &input,
                &sheet,
                output.as_deref(),
                &draw,
                scale,
                strict,
                config.as_deref(),
            )
        }
    }
}

/// Load configuration and apply command-line overrides.
pub(crate) fn load_settings(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<MetaSpriteConfig, ExitCode> {
    match load_config(config_path) {
        Ok(mut config) => {
            merge_cli_overrides(&mut config, overrides);
            Ok(config)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

/// Read the collections file, printing parse warnings.
pub(crate) fn load_input(input: &Path, strict: bool) -> Result<Vec<SpriteCollection>, ExitCode> {
    let parsed = match load_collections(input) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: '{}': {}", input.display(), e);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };

    report_warnings(&parsed.warnings, strict)?;
    Ok(parsed.collections)
}

/// Size the registry from `config` and install `collections` at ids 0, 1, ...
pub(crate) fn install_collections<C: SpriteChip>(
    game: &mut GameChip<C>,
    config: &MetaSpriteConfig,
    collections: Vec<SpriteCollection>,
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    let capacity = game.set_total_meta_sprites(config.chip.total_meta_sprites);
    if capacity as i64 != config.chip.total_meta_sprites as i64 {
        warnings.push(Warning::new(format!(
            "total_meta_sprites {} clamped to {}",
            config.chip.total_meta_sprites, capacity
        )));
    }

    for (id, collection) in collections.into_iter().enumerate() {
        let name = collection.name.clone();
        if game.meta_sprite(id as i32, Some(collection)).is_none() {
            warnings.push(Warning::new(format!(
                "Meta-sprite '{}' does not fit in a registry of {} and was skipped",
                name, capacity
            )));
        }
    }

    warnings
}

/// Print warnings; in strict mode any warning is an error.
pub(crate) fn report_warnings(warnings: &[Warning], strict: bool) -> Result<(), ExitCode> {
    for warning in warnings {
        eprintln!("Warning: {}", warning.message);
    }
    if strict && !warnings.is_empty() {
        eprintln!("Error: {} warning(s) in strict mode", warnings.len());
        return Err(ExitCode::from(EXIT_ERROR));
    }
    Ok(())
}

/// Resolve a meta-sprite selector: a numeric id, a name, or `name:<name>`.
pub(crate) fn resolve_meta_sprite<C: SpriteChip>(
    game: &GameChip<C>,
    selector: &str,
) -> Result<i32, ExitCode> {
    let name = match selector.strip_prefix(NAME_PREFIX) {
        Some(name) => name,
        None => match selector.parse::<i32>() {
            Ok(id) => return Ok(id),
            Err(_) => selector,
        },
    };

    match game.find_meta_sprite_id(name) {
        -1 => {
            eprintln!("Error: No meta-sprite named '{}'", name);
            Err(ExitCode::from(EXIT_INVALID_ARGS))
        }
        id => Ok(id),
    }
}

/// Build a draw request from command-line flags.
pub(crate) fn draw_request(args: &DrawArgs) -> Result<DrawRequest, ExitCode> {
    let Some(mode) = DrawMode::from_str(&args.mode) else {
        eprintln!("Error: Unknown draw mode '{}'", args.mode);
        return Err(ExitCode::from(EXIT_INVALID_ARGS));
    };

    Ok(DrawRequest::new(args.x, args.y)
        .with_flip(args.flip_h, args.flip_v)
        .with_mode(mode)
        .with_color_offset(args.color_offset))
}

/// Draw `id`, printing any warnings.
pub(crate) fn draw_meta_sprite<C: SpriteChip>(
    game: &mut GameChip<C>,
    id: i32,
    request: &DrawRequest,
    strict: bool,
) -> Result<DrawReport, ExitCode> {
    match game.draw(id, request) {
        Ok(report) => {
            report_warnings(&report.warnings, strict)?;
            Ok(report)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}
