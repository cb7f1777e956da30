// src/bin/cli.rs
use nfl_chat::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
