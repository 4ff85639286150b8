// Interactive employee roster: add, list, find, rename, delete and sort employees by salary.
// Records live in memory for the length of one session.
use std::error::Error;

use clap::Parser;
use roster::config::Config;
use roster::logging::init_logging;
use roster::textinterface::TextInterface;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    init_logging(config.log_level.into())?;

    let mut interface = TextInterface::init(config);
    interface.run()?;

    Ok(())
}
