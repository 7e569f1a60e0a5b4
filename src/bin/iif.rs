#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice
)]

use std::{num::NonZeroU32, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use iif::{
    codec::default_output_path, hex::HexPalette, ConsoleProgress, Image, Palette, Progress,
    QuantizeOutcome, Quantizer, DEFAULT_REPORT_INTERVAL,
};

/// The exit status for any failure.
const EXIT_ERR: u8 = 255;

/// A program to convert any image into a nice warm image.
#[derive(Parser)]
#[command(name = "iif", version)]
pub struct Options {
    /// path to the image.
    #[arg(short, long)]
    input: PathBuf,

    /// provide an output path (defaults to <name>_by_iif.<ext> in the current directory).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// a text file with one #RRGGBB color per line to use instead of the warm palette.
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// number of pixels between progress updates.
    #[arg(long, default_value_t = NonZeroU32::new(DEFAULT_REPORT_INTERVAL).unwrap_or(NonZeroU32::MIN))]
    report_interval: NonZeroU32,

    /// number of threads to use, 0 uses all cores.
    #[arg(short, long, default_value_t = 1)]
    threads: u8,

    /// do not print progress.
    #[arg(short, long)]
    quiet: bool,

    /// print how long each step took.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Options::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERR)
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    let Options {
        input,
        output,
        palette,
        report_interval,
        threads,
        quiet,
        verbose,
    } = options;

    macro_rules! log {
        ($name: literal, $val: expr) => {
            if verbose {
                let time = std::time::Instant::now();
                let value = $val;
                println!("{} took {}ms", $name, time.elapsed().as_millis());
                value
            } else {
                $val
            }
        };
    }

    let output = match output {
        Some(output) => output,
        None => default_output_path(&input)
            .with_context(|| format!("cannot derive an output path from {}", input.display()))?,
    };

    let palette = match palette {
        Some(path) => log!("read palette", {
            HexPalette::open(&path)
                .with_context(|| format!("failed to read palette {}", path.display()))?
                .into_palette()
                .with_context(|| format!("no colors in palette {}", path.display()))?
        }),
        None => Palette::warm(),
    };

    let mut image = log!(
        "read image",
        Image::open(&input).with_context(|| format!("failed to load image {}", input.display()))?
    );

    println!(
        "Image spec:\n    dimensions: {}x{}\n    color channels: {}",
        image.width(),
        image.height(),
        image.channels()
    );

    let quantizer = Quantizer::new(&palette).report_interval(report_interval);
    let progress: Box<dyn Progress + Send> = if quiet {
        Box::new(())
    } else {
        println!();
        Box::new(ConsoleProgress::stdout())
    };

    let outcome = log!(
        "quantization",
        match threads {
            1 => quantizer.quantize(&mut image, progress),
            0 => quantizer.quantize_par(&mut image, progress),
            t => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t.into())
                    .build()
                    .context("failed to build the thread pool")?;

                pool.install(|| quantizer.quantize_par(&mut image, progress))
            }
        }
    );

    if let QuantizeOutcome::Skipped { channels } = outcome {
        log::warn!("images with {channels} color channel(s) are not quantized, writing it unchanged");
    }

    log!(
        "write image",
        image
            .save(&output)
            .with_context(|| format!("failed to write image {}", output.display()))?
    );

    Ok(())
}
