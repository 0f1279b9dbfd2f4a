//! Render command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::game_chip::GameChip;
use crate::output::{generate_output_path, save_png, scale_image};
use crate::raster::{RasterChip, SpriteSheet};

use super::{
    draw_meta_sprite, draw_request, install_collections, load_input, load_settings,
    report_warnings, resolve_meta_sprite, DrawArgs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS,
};

/// Execute the render command - draw one meta-sprite onto a canvas and save it
pub fn run_render(
    input: &Path,
    sheet_path: &Path,
    output: Option<&Path>,
    args: &DrawArgs,
    scale: Option<u8>,
    strict: bool,
    config_path: Option<&Path>,
) -> ExitCode {
    let overrides = CliOverrides { strict: strict.then_some(true), scale };
    let config = match load_settings(config_path, &overrides) {
        Ok(config) => config,
        Err(code) => return code,
    };
    let strict = config.chip.strict;

    let request = match draw_request(args) {
        Ok(request) => request,
        Err(code) => return code,
    };

    let sheet =
        match SpriteSheet::load(sheet_path, config.chip.sprite_width, config.chip.sprite_height) {
            Ok(sheet) => sheet,
            Err(e) => {
                eprintln!("Error: '{}': {}", sheet_path.display(), e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        };

    let collections = match load_input(input, strict) {
        Ok(collections) => collections,
        Err(code) => return code,
    };

    let chip = RasterChip::new(
        sheet,
        config.render.canvas_width,
        config.render.canvas_height,
        config.chip.max_sprite_count,
    );
    let mut game = GameChip::from_config(chip, &config.chip);
    let warnings = install_collections(&mut game, &config, collections);
    if let Err(code) = report_warnings(&warnings, strict) {
        return code;
    }

    let id = match resolve_meta_sprite(&game, &args.meta_sprite) {
        Ok(id) => id,
        Err(code) => return code,
    };
    let name = game
        .registry()
        .at(id)
        .map(|collection| collection.name.clone())
        .unwrap_or_else(|| format!("meta_sprite_{}", id));

    let report = match draw_meta_sprite(&mut game, id, &request, strict) {
        Ok(report) => report,
        Err(code) => return code,
    };

    let canvas = scale_image(game.into_sprite_chip().into_canvas(), config.render.scale);
    let output_path = generate_output_path(input, &name, output);
    if let Err(e) = save_png(&canvas, &output_path) {
        eprintln!("Error: Failed to save '{}': {}", output_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved: {} ({} sprite(s) drawn)", output_path.display(), report.drawn);
    ExitCode::from(EXIT_SUCCESS)
}
