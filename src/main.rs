//! colstat CLI entry point

use anyhow::Result;
use colstat::config::cli::Cli;
use colstat::coordinator;

fn main() -> Result<()> {
    env_logger::init();

    let config = Cli::parse_args().into_config();

    let mut out = std::io::stdout().lock();
    coordinator::run(&config, &mut out)?;

    Ok(())
}
