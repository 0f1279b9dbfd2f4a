//! List command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::chip::RecordingChip;
use crate::config::CliOverrides;
use crate::game_chip::GameChip;

use super::{install_collections, load_input, load_settings, report_warnings, EXIT_SUCCESS};

/// Execute the list command - print id, name, size and bounds of each meta-sprite
pub fn run_list(input: &Path, config_path: Option<&Path>) -> ExitCode {
    let config = match load_settings(config_path, &CliOverrides::default()) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let collections = match load_input(input, false) {
        Ok(collections) => collections,
        Err(code) => return code,
    };
    let installed = collections.len();

    let chip = RecordingChip::new(
        config.chip.sprite_width,
        config.chip.sprite_height,
        config.chip.total_sprites,
    );
    let mut game = GameChip::from_config(chip, &config.chip);
    let warnings = install_collections(&mut game, &config, collections);
    if let Err(code) = report_warnings(&warnings, false) {
        return code;
    }

    println!("{} meta-sprite slot(s)", game.total_meta_sprites());
    for (id, collection) in game.registry().iter().take(installed) {
        println!(
            "{:>3}  {:<24} {:>3} sprite(s)  {}x{}",
            id,
            collection.name,
            collection.len(),
            collection.bounds.width,
            collection.bounds.height
        );
    }

    ExitCode::from(EXIT_SUCCESS)
}
