//! Display functions for line-mode output

use super::formatters::{last_played, mistake_dots};
use crate::core::Profile;
use crate::session::{SessionStatus, Snapshot};
use colored::{ColoredString, Colorize};

/// Color for the `index`-th solved group
fn paint_group(index: usize, text: &str) -> ColoredString {
    match index % 4 {
        0 => text.bright_blue(),
        1 => text.bright_magenta(),
        2 => text.bright_yellow(),
        _ => text.bright_green(),
    }
}

/// Print the persisted score and streak
pub fn print_profile(profile: &Profile) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "GRIDCONNECT STATS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    println!(
        "   ⭐ Score:        {}",
        profile.score.to_string().bright_yellow().bold()
    );
    println!(
        "   🔥 Streak:       {}",
        profile.streak.to_string().bright_red().bold()
    );
    println!(
        "   📅 Last win:     {}",
        last_played(profile.last_played_date)
    );
    println!();
}

/// Print the board for line mode
///
/// Active words are numbered from 1 in display order so the player can pick
/// them by number.
pub fn print_board(snapshot: &Snapshot) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "⭐ {}   🔥 {}   {}",
        snapshot.score,
        snapshot.streak,
        snapshot.message.bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, group) in snapshot.solved.iter().enumerate() {
        println!(
            "  {} {}",
            paint_group(i, group.name()).bold(),
            paint_group(i, &group.words().join(", "))
        );
    }
    if !snapshot.solved.is_empty() {
        println!();
    }

    for (row, chunk) in snapshot.words.chunks(4).enumerate() {
        let cells: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, word)| {
                let label = format!("{:>2}. {:<10}", row * 4 + col + 1, word);
                if snapshot.is_selected(word) {
                    label.black().on_bright_white().bold().to_string()
                } else {
                    label
                }
            })
            .collect();
        println!("  {}", cells.join(" "));
    }

    println!(
        "\n  Mistakes remaining: {}",
        mistake_dots(snapshot.mistakes_remaining).bright_red()
    );

    if snapshot.status == SessionStatus::InProgress {
        println!(
            "  Selected ({}/4): {}",
            snapshot.selection.len(),
            snapshot.selection.join(", ")
        );
    }
}
