//! Trace command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::chip::RecordingChip;
use crate::config::CliOverrides;
use crate::game_chip::GameChip;

use super::{
    draw_meta_sprite, draw_request, install_collections, load_input, load_settings,
    report_warnings, resolve_meta_sprite, DrawArgs, EXIT_ERROR, EXIT_SUCCESS,
};

/// Execute the trace command - print every sprite draw as a JSON line
pub fn run_trace(
    input: &Path,
    args: &DrawArgs,
    strict: bool,
    config_path: Option<&Path>,
) -> ExitCode {
    let overrides = CliOverrides { strict: strict.then_some(true), ..Default::default() };
    let config = match load_settings(config_path, &overrides) {
        Ok(config) => config,
        Err(code) => return code,
    };
    let strict = config.chip.strict;

    let request = match draw_request(args) {
        Ok(request) => request,
        Err(code) => return code,
    };

    let collections = match load_input(input, strict) {
        Ok(collections) => collections,
        Err(code) => return code,
    };

    let chip = RecordingChip::new(
        config.chip.sprite_width,
        config.chip.sprite_height,
        config.chip.total_sprites,
    )
    .with_max_sprite_count(config.chip.max_sprite_count);
    let mut game = GameChip::from_config(chip, &config.chip);
    let warnings = install_collections(&mut game, &config, collections);
    if let Err(code) = report_warnings(&warnings, strict) {
        return code;
    }

    let id = match resolve_meta_sprite(&game, &args.meta_sprite) {
        Ok(id) => id,
        Err(code) => return code,
    };

    if let Err(code) = draw_meta_sprite(&mut game, id, &request, strict) {
        return code;
    }

    for draw in game.sprite_chip().draws() {
        match serde_json::to_string(draw) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
