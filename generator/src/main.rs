//! Generates the table module of one floating-point format.
//!
//! ```text
//! teju-gen generator/configs/ieee64.json -o src/flt2dec/generated/ieee64.rs
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use teju_gen::emit::emit;
use teju_gen::{generate, FormatConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generates the multiplier tables of teju", long_about = None)]
struct Args {
    /// JSON description of the format.
    config: PathBuf,

    /// Where to write the Rust module; standard output if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder().filter_level(log_level).init();

    let config = FormatConfig::load(&args.config)?;
    debug!("configuration: {:?}", config);

    let start = Instant::now();
    let table = generate(&config).with_context(|| format!("generation failed for {}", config.id))?;
    info!("generation finished in {:?}", start.elapsed());

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            emit(&mut out, &config, &table)?;
            out.flush()?;
            info!("wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            emit(&mut out, &config, &table)?;
        }
    }
    Ok(())
}
