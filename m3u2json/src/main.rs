use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use m3u2json_rs::{CONFIG_ENV, convert_file, resolve_config};

#[derive(Parser, Debug)]
#[command(name = "m3u2json")]
#[command(about = "Convert an IPTV m3u playlist into a grouped json document", long_about = None)]
struct Args {
    /// Playlist to convert
    input: PathBuf,

    /// Json file to write, defaults to output.json
    output: Option<PathBuf>,

    /// YAML config file
    #[arg(short = 'c', long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn app_entry(args: Args) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(config.output_path()));

    info!("Converting {} to {}", args.input.display(), output.display());
    convert_file(&args.input, &output, &config)?;

    println!("Conversion completed. File saved as: {}", output.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    app_entry(args)
}
