use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use sweeper_core::{CellCount, Coord, Game, GameConfig, RevealOutcome, default_mine_count};

use command::{Command, HELP};

mod command;
mod render;

/// Screen geometry the board size is derived from when no side is given.
const SCREEN_LEN: u32 = 512;
const SQUARE_LEN: u32 = 35;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board side length, derived from a 512px screen of 35px squares by default
    #[arg(short = 'n', long)]
    side: Option<Coord>,

    /// Number of mines, one per eight cells by default
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the board as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let side = match self.side {
            Some(side) => side,
            None => GameConfig::from_screen(SCREEN_LEN, SQUARE_LEN)?.side(),
        };
        let mines = self.mines.unwrap_or(default_mine_count(side));
        Ok(GameConfig::new(side, mines)?)
    }
}

fn print_view(game: &Game, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let view = game.render_view();
    if json {
        serde_json::to_writer(&mut *out, &view).context("Could not serialize board")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render::render_text(&view))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.game_config().context("Invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut game = Game::new(config, seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{HELP}")?;
    print_view(&game, args.json, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read input")?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "error: {err:#}")?;
                continue;
            }
        };

        match command {
            Command::Reveal(coords) => {
                if game.on_reveal(coords) == RevealOutcome::HitMine {
                    log::info!("Hit a mine at {:?}", coords);
                }
            }
            Command::Flag(coords) => {
                game.on_toggle_flag(coords);
            }
            Command::New(new_seed) => {
                let new_seed = new_seed.unwrap_or_else(rand::random);
                log::debug!("seed: {}", new_seed);
                game.restart(new_seed);
            }
            Command::Show => {}
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }
        print_view(&game, args.json, &mut out)?;
        if game.is_finished() {
            writeln!(out, "type \"n\" for a new game or \"q\" to quit")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn default_config_follows_screen_geometry() {
        let args = Args::try_parse_from(["sweeper"]).unwrap();
        let config = args.game_config().unwrap();

        assert_eq!(config.side(), 14);
        assert_eq!(config.mines(), 24);
    }

    #[test]
    fn explicit_side_gets_default_density() {
        let args = Args::try_parse_from(["sweeper", "-n", "9", "--seed", "7"]).unwrap();
        let config = args.game_config().unwrap();

        assert_eq!(config.side(), 9);
        assert_eq!(config.mines(), 10);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn rejects_overfull_board() {
        let args = Args::try_parse_from(["sweeper", "-n", "4", "-m", "10"]).unwrap();
        assert!(args.game_config().is_err());
    }
}
