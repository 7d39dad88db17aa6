// src/bin/cli.rs
use bo_scrape::cli;
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    bo_scrape::log::init();

    cli::run().map_err(|e| eyre!("{e}"))
}
