//! This crate contains the source code for the binary for the game gridplay.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

use std::path::PathBuf;

use clap::Parser;
use color_eyre::{eyre::Result, install};
use gridplay::App;

/// Command-line arguments for the grid sandbox.
///
/// This structure holds the glue input the play view itself leaves out of scope: the path to the
/// plain-text map file to load.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the plain-text map file to play.
    map: PathBuf,
}

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    let mut app = App::new(&cli.map)?;

    let mut terminal = ratatui::init();
    app.run(&mut terminal)?;
    ratatui::restore();

    Ok(())
}
