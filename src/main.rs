//! CLI entry point for the origin shift maze generator

use clap::Parser;
use originshift::io::cli::{Cli, MazeRunner};
use originshift::io::configuration::DEFAULT_LOG_FILTER;

fn main() -> originshift::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();
    let runner = MazeRunner::new(cli);
    runner.run(&mut std::io::stdout().lock())
}
