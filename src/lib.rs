pub mod cli;
pub mod export;
pub mod io_utils;
pub mod rows;
pub mod schema;
pub mod schema_cmd;
pub mod sort;
pub mod table;
pub mod view;
pub mod view_cmd;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("tabview", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::View(args) => view_cmd::execute(&args),
        Commands::Export(args) => export::execute(&args),
        Commands::Schema(args) => schema_cmd::execute(&args),
    }
}
