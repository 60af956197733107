//! CLI entry point for the hand-partitioned block reducer

use blockreduce::io::cli::{Cli, Driver};
use clap::Parser;

fn main() -> blockreduce::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();
    let mut driver = Driver::new(cli);
    driver.run()
}
