//! Console Go Fish
//!
//! Hot-seat play at a terminal. The first `--humans` seats are prompted on
//! stdin; the rest are random bots.
//!
//! Options: --players, --hand-size, --decks, --seed, --humans, --quiet

use anyhow::{Context, Result};
use clap::Parser;
use go_fish::cards::Rank;
use go_fish::core::{Action, ActionKind, GameConfig, PlayerId};
use go_fish::rules::{GameEvent, GameObserver, LogObserver, PlayerInput, PlayerView, RandomBot};
use log::error;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "go_fish", about = "Play Go Fish in the terminal")]
struct Args {
    /// Number of seats
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Cards dealt to each player
    #[arg(long, default_value_t = 7)]
    hand_size: usize,

    /// Standard decks in the pool
    #[arg(long, default_value_t = 1)]
    decks: usize,

    /// RNG seed for the deal and the bots
    #[arg(long)]
    seed: Option<u64>,

    /// Seats controlled from stdin, starting at player 0
    #[arg(long, default_value_t = 1)]
    humans: usize,

    /// Send events to the log instead of stdout
    #[arg(long)]
    quiet: bool,
}

/// Write `question`, then read one trimmed line. `None` at end of input.
fn read_answer(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> io::Result<Option<String>> {
    write!(output, "{question} ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts on stdin, re-asking until the answer is valid.
struct ConsoleInput;

impl ConsoleInput {
    fn prompt(&self, question: &str) -> String {
        match read_answer(&mut io::stdin().lock(), &mut io::stdout(), question) {
            Ok(Some(answer)) => answer,
            Ok(None) => {
                println!();
                println!("Input closed, leaving the table.");
                std::process::exit(0);
            }
            Err(err) => {
                error!("console I/O failed: {err}");
                std::process::exit(1);
            }
        }
    }

    fn ask_target(&self, view: &PlayerView<'_>) -> PlayerId {
        loop {
            let answer = self.prompt("Which player would you like to ask?");
            match answer.parse::<u8>() {
                Ok(id) if (id as usize) < view.player_count && PlayerId::new(id) != view.player => {
                    return PlayerId::new(id)
                }
                _ => println!("Pick another player between 0 and {}", view.player_count - 1),
            }
        }
    }

    fn ask_rank(&self) -> Rank {
        loop {
            match self.prompt("Which rank?").parse::<Rank>() {
                Ok(rank) => return rank,
                Err(err) => println!("{err}"),
            }
        }
    }
}

impl PlayerInput for ConsoleInput {
    fn choose_action(&mut self, view: &PlayerView<'_>) -> Action {
        loop {
            println!("Choose from the following actions:");
            for (index, kind) in view.offered.iter().enumerate() {
                println!("[{index}]: {}", kind.name());
            }

            let choice = self
                .prompt(">")
                .parse::<usize>()
                .ok()
                .and_then(|i| view.offered.get(i).copied());
            match choice {
                Some(ActionKind::Pass) => return Action::Pass,
                Some(ActionKind::Inquire) => {
                    return Action::inquire(self.ask_target(view), self.ask_rank())
                }
                None => println!("Invalid choice"),
            }
        }
    }
}

/// Routes each seat to the console or a bot.
struct Seating {
    console: ConsoleInput,
    bot: RandomBot,
    humans: usize,
}

impl PlayerInput for Seating {
    fn choose_action(&mut self, view: &PlayerView<'_>) -> Action {
        if view.player.index() < self.humans {
            self.console.choose_action(view)
        } else {
            self.bot.choose_action(view)
        }
    }
}

/// Prints events, hiding bots' hands.
struct ConsoleObserver {
    humans: usize,
}

impl GameObserver for ConsoleObserver {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::TurnStarted { player, turn, .. } if player.index() >= self.humans => {
                println!();
                println!("Turn {turn}: {player}'s turn");
            }
            GameEvent::TurnStarted { .. } => {
                println!();
                println!("{event}");
            }
            _ => println!("{event}"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = GameConfig::default()
        .with_players(args.players)
        .with_hand_size(args.hand_size)
        .with_decks(args.decks)
        .with_seed(seed);
    config.validate().context("invalid table")?;

    let humans = args.humans.min(args.players);
    let mut seating = Seating {
        console: ConsoleInput,
        bot: RandomBot::new(seed.wrapping_add(1)),
        humans,
    };

    let outcome = if args.quiet {
        let mut observer = LogObserver;
        go_fish::play(config, &mut seating, &mut observer)
    } else {
        let mut observer = ConsoleObserver { humans };
        go_fish::play(config, &mut seating, &mut observer)
    }
    .context("game aborted")?;

    println!();
    println!(
        "{} wins on turn {} ({} sets on the table)",
        outcome.winner,
        outcome.state.turn_number,
        outcome.state.sets.len()
    );
    Ok(())
}
