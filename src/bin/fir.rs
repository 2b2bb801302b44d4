use anyhow::Result;
use clap::Parser;
use filtergen::cli;
use filtergen::cli::FirArgs;
use filtergen::logging;
use filtergen::tracing::debug;

fn main() -> Result<()> {
    logging::init();
    let args = FirArgs::parse();
    debug!("Configuration {args:?}");

    let taps = cli::fir(&args)?;
    println!("{taps}");

    Ok(())
}
