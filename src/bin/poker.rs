use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;
use draw_poker::cards::Card;
use draw_poker::game::{Game, GameConfig, GameError, Seat};
use draw_poker::hand::Hand;
use draw_poker::showdown::Outcome;
use log::{info, warn};
use std::io::{self, BufRead, IsTerminal, Write};

#[derive(Debug, Parser)]
#[clap(version = draw_poker::VERSION, about = "Two-player five-card draw.")]
struct Cli {
    /// Shuffle seed, for replaying a round.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Name of the first player.
    #[clap(long, default_value = "player0")]
    name_a: String,
    /// Name of the second player.
    #[clap(long, default_value = "player1")]
    name_b: String,
    /// Skip the card exchange prompts.
    #[clap(long)]
    no_exchange: bool,
    /// Increase log verbosity (-v debug, -vv trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn styled(card: Card) -> String {
    let text = card.to_string();
    if card.suit().is_red() {
        text.red().to_string()
    } else {
        text.bold().to_string()
    }
}

fn render(hand: &Hand) -> String {
    hand.cards().iter().map(|&c| styled(c)).collect::<Vec<_>>().join(" ")
}

fn print_table(game: &Game) {
    for p in game.players() {
        println!("{:>10}: {}  [{}]", p.name(), render(p.hand()), p.score());
    }
}

fn parse_indices(line: &str) -> Result<Vec<usize>, std::num::ParseIntError> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Ask a player which cards to exchange until the answer is accepted.
fn prompt_exchange(game: &mut Game, seat: Seat, input: &mut impl BufRead) -> Result<()> {
    loop {
        let player = game.player(seat);
        print!(
            "{}, card indexes 0-4 to replace (enter to keep {}): ",
            player.name(),
            render(player.hand())
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let indices = match parse_indices(&line) {
            Ok(indices) => indices,
            Err(e) => {
                println!("{}", format!("not a list of indexes: {e}").yellow());
                continue;
            }
        };
        match game.exchange(seat, &indices) {
            Ok(()) => return Ok(()),
            Err(e @ (GameError::Hand(_) | GameError::RepeatedIndex(_))) => {
                println!("{}", e.to_string().yellow());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder().filter_level(level).format_target(false).init();

    let config = GameConfig { seed: cli.seed, names: [cli.name_a, cli.name_b] };
    let mut game = Game::deal(&config)?;
    info!("dealt a round, {} cards left in the deck", game.deck().len());
    print_table(&game);

    let interactive = io::stdin().is_terminal();
    if !cli.no_exchange {
        if interactive {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            for seat in Seat::ALL {
                prompt_exchange(&mut game, seat, &mut input)?;
            }
            println!();
            print_table(&game);
        } else {
            warn!("stdin is not a terminal, skipping card exchange");
        }
    }

    let showdown = game.showdown();
    match (showdown.outcome, showdown.winner) {
        (Outcome::Draw, _) | (_, None) => println!("{}", "draw".bold()),
        (_, Some(name)) => println!("{}", format!("{name} won").green().bold()),
    }
    Ok(())
}
