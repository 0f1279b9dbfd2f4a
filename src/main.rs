//! msprite - Command-line tool for inspecting and rendering meta-sprites

use std::process::ExitCode;

use metasprite::cli;

fn main() -> ExitCode {
    cli::run()
}
