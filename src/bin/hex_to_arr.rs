#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice
)]

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use iif::hex::HexPalette;

/// The exit status for any failure.
const EXIT_ERR: u8 = 255;

/// Converts a text file of #RRGGBB colors (one per line) into a Rust array of bytes.
///
/// Lines that are not colors are skipped with a warning.
#[derive(Parser)]
#[command(name = "hex_to_arr", version)]
pub struct Options {
    /// name of the generated array constant.
    #[arg(short, long, default_value = "COLORS")]
    name: String,

    /// path to the color file.
    file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Options { name, file } = Options::parse();

    match read_palette(&file) {
        Ok(palette) => {
            print!("{}", palette.to_rust_source(&name, &file.display().to_string()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERR)
        }
    }
}

fn read_palette(file: &Path) -> anyhow::Result<HexPalette> {
    let reader = File::open(file)
        .with_context(|| format!("file not found or permission not met: {}", file.display()))?;

    HexPalette::read(BufReader::new(reader))
        .with_context(|| format!("failed to read {}", file.display()))
}
