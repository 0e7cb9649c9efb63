//! Fairhand CLI
//!
//! Terminal front end for the provably fair move game: parses the move
//! list from arguments, publishes the commitment, runs the menu loop,
//! and prints the reveal.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use fairhand_core::{Commitment, GameError, GameRound, MoveSet, OutcomeMatrix, RoundOutcome, Verdict};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod table;

#[derive(Parser)]
#[command(
    name = "fairhand",
    version,
    about = "Provably fair move-selection game over any odd number of moves"
)]
struct Cli {
    /// Move names in circular order: odd count, at least 3, no repeats.
    /// Each move beats the moves immediately after it in the list.
    moves: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let moves = match MoveSet::new(cli.moves) {
        Ok(moves) => moves,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            eprintln!("example: fairhand Rock Paper Scissors Lizard Spock");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(moves) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(moves: MoveSet) -> Result<()> {
    let mut round = GameRound::new(moves);
    let commitment = round.start()?;
    info!(phase = ?round.phase(), "round committed");
    println!("HMAC: {}", commitment.to_string().yellow());
    round.await_choice()?;

    let mut editor = DefaultEditor::new()?;
    loop {
        print_menu(&round);
        let line = match editor.readline("Your choice: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                round.cancel()?;
                info!("round cancelled");
                println!("Exiting...");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        match line.trim() {
            "0" => {
                round.cancel()?;
                info!("round cancelled");
                println!("Exiting...");
                return Ok(());
            }
            "?" => {
                let matrix = OutcomeMatrix::build(round.moves())?;
                table::render(&matrix);
            }
            input => {
                let choice = resolve_choice(input, &round);
                match round.play(&choice) {
                    Ok(outcome) => {
                        info!(verdict = %outcome.verdict, "round resolved");
                        print_outcome(&outcome, &commitment);
                        return Ok(());
                    }
                    Err(GameError::InvalidChoice(_)) => {
                        println!("{}", "Invalid choice, please try again!".red());
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
    }
}

/// Map a 1-based menu number to its move name; anything else is passed
/// through verbatim so the round can report it as an invalid choice.
fn resolve_choice(input: &str, round: &GameRound) -> String {
    match input.parse::<usize>() {
        Ok(number) if number >= 1 => round
            .moves()
            .get(number - 1)
            .map(str::to_string)
            .unwrap_or_else(|| input.to_string()),
        _ => input.to_string(),
    }
}

fn print_menu(round: &GameRound) {
    println!();
    println!("{}", "Make your move:".bold());
    for (index, name) in round.moves().iter().enumerate() {
        println!("{} - {}", index + 1, name);
    }
    println!("0 - Exit");
    println!("? - Help");
}

fn print_outcome(outcome: &RoundOutcome, published: &Commitment) {
    println!("Your move: {}", outcome.player_move.cyan());
    println!("Computer move: {}", outcome.computer_move.cyan());
    match outcome.verdict {
        Verdict::FirstWins => println!("{}", "You win!".green().bold()),
        Verdict::SecondWins => println!("{}", "Computer wins!".red().bold()),
        Verdict::Draw => println!("{}", "Draw".yellow().bold()),
    }
    println!("Key: {}", outcome.key);
    if outcome.verify(published) {
        println!(
            "{}",
            "Commitment verified: the computer's move was fixed before yours.".green()
        );
    } else {
        warn!("revealed key does not reproduce the published commitment");
        println!(
            "{}",
            "WARNING: the revealed key does not match the published HMAC!"
                .red()
                .bold()
        );
    }
}
