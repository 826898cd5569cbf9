//! `cubix`: play five-in-a-row on the surface of a cube in a terminal.
//!
//! The cube is drawn as an unfolded net around a chosen centre face.
//! Marks are placed on the centre face; lines continue across its edges
//! onto the neighbouring faces.
//!
//! **Usage:**
//! ```text
//! cubix [--size <N>] [--win-length <L>]
//! ```

#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![forbid(unsafe_code)]

mod command;
mod session;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use cubix_engine::GameConfig;

use crate::session::Session;

/// Play five-in-a-row on the surface of a cube.
#[derive(Parser)]
#[command(name = "cubix", about = "Play five-in-a-row on the surface of a cube")]
struct Args {
    /// Edge length of each cube face.
    #[arg(long, default_value_t = 4)]
    size: u32,

    /// Run length that wins the game.
    #[arg(long, default_value_t = 4)]
    win_length: u32,
}

impl From<&Args> for GameConfig {
    fn from(args: &Args) -> Self {
        GameConfig::default()
            .with_size(args.size)
            .with_win_length(args.win_length)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut session = Session::new(GameConfig::from(&args)).with_context(|| {
        format!(
            "cannot start a game with --size {} --win-length {}",
            args.size, args.win_length
        )
    })?;

    session
        .run(io::stdin().lock(), &mut io::stdout().lock())
        .context("terminal I/O failed")?;

    let metrics = session.game().metrics();
    println!(
        "{} marks placed, {} cursor steps scanned",
        metrics.placements, metrics.cursor_steps
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_config() {
        let args = Args::try_parse_from(["cubix"]).unwrap();
        assert_eq!(GameConfig::from(&args), GameConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from(["cubix", "--size", "3", "--win-length", "5"]).unwrap();
        assert_eq!(GameConfig::from(&args), GameConfig::new(3, 5));
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        assert!(Args::try_parse_from(["cubix", "--size", "big"]).is_err());
    }
}
