//! Simple interactive CLI mode
//!
//! Text-based play without the TUI

use crate::output::{print_board, print_profile};
use crate::service::PuzzleService;
use crate::session::{SelectOutcome, SessionEngine, SessionStatus, StartOutcome, SubmitOutcome};
use crate::store::ProfileStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A parsed line of player input while a puzzle is in progress
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    Home,
    Shuffle,
    Deselect,
    Submit,
    /// Toggle these words, given by number or by text
    Pick(Vec<String>),
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub async fn run_simple<P: PuzzleService, S: ProfileStore>(
    engine: &mut SessionEngine<P, S>,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  GridConnect - How to Play                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("  - Find groups of four words that share a common theme.");
    println!("  - Select four words and submit them.");
    println!("  - Correct groups earn points. Fewer mistakes mean a bigger bonus!");
    println!("  - Win every day to build up your streak.\n");
    println!("Select words by number or by typing them (e.g. '1 5 9 13' or 'bass pike').");
    println!("Commands: Enter/'submit', 's' shuffle, 'd' deselect all, 'h' home, 'q' quit");

    print_profile(engine.profile());

    loop {
        if engine.status() != SessionStatus::InProgress {
            match get_user_input("Play today's puzzle? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" | "" => {
                    println!("\nLoading...");
                    if let StartOutcome::Failed(e) = engine.start_session().await {
                        println!("❌ {} ({e})", engine.message());
                    }
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        print_board(&engine.snapshot());

        let input = get_user_input("\n>")?;
        match parse_command(&input, engine.words()) {
            Command::Quit => {
                engine.return_home();
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Home => {
                engine.return_home();
                print_profile(engine.profile());
            }
            Command::Shuffle => {
                engine.shuffle();
            }
            Command::Deselect => {
                engine.deselect_all();
            }
            Command::Submit => submit(engine).await,
            Command::Pick(words) => pick(engine, &words),
        }
    }
}

async fn submit<P: PuzzleService, S: ProfileStore>(engine: &mut SessionEngine<P, S>) {
    match engine.submit().await {
        SubmitOutcome::Ignored => println!("Select exactly four words first."),
        SubmitOutcome::Incorrect { .. } => println!("{}", "✗ Not a group.".red().bold()),
        SubmitOutcome::Correct(group) => println!("{} {}", "✓".green().bold(), group),
        SubmitOutcome::Failed(e) => println!("❌ {} ({e})", engine.message()),
        SubmitOutcome::Lost => {
            print_board(&engine.snapshot());
            println!("\n{}", engine.message().bright_red().bold());
        }
        SubmitOutcome::Won { .. } => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!("    🎉 {} 🎉", engine.message().bright_green().bold());
            println!("{}", "═".repeat(60).bright_cyan());
            for group in engine.solved_groups() {
                println!("  {group}");
            }
            print_profile(engine.profile());
        }
    }
}

fn pick<P: PuzzleService, S: ProfileStore>(engine: &mut SessionEngine<P, S>, words: &[String]) {
    for word in words {
        if engine.select_word(word) == SelectOutcome::Full {
            println!("Four words are already selected.");
            break;
        }
    }
}

/// Parse a line of input against the active words in display order
fn parse_command(input: &str, words: &[String]) -> Command {
    match input.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "h" | "home" => Command::Home,
        "s" | "shuffle" => Command::Shuffle,
        "d" | "deselect" => Command::Deselect,
        "" | "submit" => Command::Submit,
        other => Command::Pick(
            other
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
                .filter_map(|token| resolve_word(token, words))
                .collect(),
        ),
    }
}

/// Resolve a 1-based index or a case-insensitive word to an active word
fn resolve_word(token: &str, words: &[String]) -> Option<String> {
    token
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| words.get(i))
        .or_else(|| words.iter().find(|w| w.eq_ignore_ascii_case(token)))
        .cloned()
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
