use anyhow::Result;
use clap::Parser;
use filtergen::cli;
use filtergen::cli::IirArgs;
use filtergen::logging;
use filtergen::tracing::debug;

fn main() -> Result<()> {
    logging::init();
    let args = IirArgs::parse();
    debug!("Configuration {args:?}");

    let coefficients = cli::iir(&args)?;
    println!("{coefficients}");

    Ok(())
}
