use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tgb_edit::persist;

#[derive(Parser, Debug)]
#[command(about = "Render a 2bpp tile file as a PNG tile sheet")]
struct Args {
    /// Packed tile file (256 tiles, 4096 bytes)
    input: PathBuf,

    /// PNG file to write
    output: PathBuf,
}

pub fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let store = persist::load_tiles(&args.input)?;
    persist::export_png(&store, &args.output)?;
    Ok(())
}
