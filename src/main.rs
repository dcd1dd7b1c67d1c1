use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use log::error;
use tgb_edit::{
    message::Message,
    repl, state,
    update::update,
};

#[derive(Parser, Debug)]
#[command(about = "Game Boy 2bpp tile editor")]
struct Args {
    /// Tile file to load at start-up
    file: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let mut state = state::get_initial_state(args.config)?;

    if let Some(path) = args.file {
        if let Err(e) = update(&mut state, Message::LoadTiles(Some(path))) {
            error!("{:#}", e);
            println!("ERROR LOADING: {:#}", e);
        }
    }

    repl::run(&mut state, io::stdin().lock(), &mut io::stdout())
}
