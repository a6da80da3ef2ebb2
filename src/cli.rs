use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::app::{App, Screen};
use crate::config::ArcadeConfig;
use crate::games::GameKind;

#[derive(Parser, Debug)]
#[command(name = "lab-arcade")]
#[command(about = "🧪 Physics-lab puzzle games for the terminal")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON config file (defaults to ./lab-arcade.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible deals; overrides the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Jump straight into a game
    Play {
        /// Game id (see `list`)
        game: String,
    },
    /// List available games
    List,
}

pub async fn run_cli(cli: Cli) -> Result<()> {
    let mut config = ArcadeConfig::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let start = match cli.command {
        Some(Commands::List) => {
            println!("🎮 Available games:");
            println!();
            for kind in GameKind::ALL {
                let info = kind.info();
                println!("📦 {} ({})", info.name, info.id);
                println!("   {}", info.description);
                println!();
            }
            return Ok(());
        }
        Some(Commands::Play { game }) => {
            let kind = GameKind::from_id(&game).ok_or_else(|| {
                let ids: Vec<&str> = GameKind::ALL.iter().map(|k| k.info().id).collect();
                anyhow!("Game '{}' not found. Available: {}", game, ids.join(", "))
            })?;
            Screen::Playing(kind)
        }
        None => Screen::Menu,
    };

    let mut terminal = ratatui::init();
    let result = App::new(config).run(&mut terminal, start).await;
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play_with_seed() {
        let cli = Cli::try_parse_from(["lab-arcade", "--seed", "42", "play", "sudoku"]).unwrap();
        assert_eq!(cli.seed, Some(42));
        assert!(matches!(cli.command, Some(Commands::Play { ref game }) if game == "sudoku"));
    }

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["lab-arcade"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }
}
