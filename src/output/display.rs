//! Display functions for command results

use super::formatters::{row_letters, row_squares};
use crate::commands::{CheckResult, ShowResult};
use colored::Colorize;

/// Print the result of validating one attempt
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Attempt: {}", result.attempt.bright_yellow().bold());
    if result.state_found {
        println!("Board:   {} graded row(s)", result.rows_known);
    } else {
        println!("Board:   {}", "no stored state (nothing to check)".dimmed());
    }
    println!("{}", "─".repeat(60).cyan());

    for outcome in &result.results {
        let mark = if outcome.is_valid {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("  {mark} {:8} {}", outcome.kind.tag(), outcome.message);
    }

    println!();
    if result.violations.is_empty() {
        println!("{}", "No conflicts with the board so far.".green().bold());
    } else {
        for violation in &result.violations {
            println!(
                "{} {}",
                format!("[{}]", violation.tag()).red().bold(),
                violation.message.red()
            );
        }
    }
}

/// Print the stored board snapshot
pub fn print_show_result(result: &ShowResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STORED BOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let Some(grid) = &result.grid else {
        println!("\n{}", "No stored state found.".dimmed());
        return;
    };

    println!();
    for (index, row) in grid.rows().iter().enumerate() {
        match row {
            Some(cells) => {
                println!(
                    "  {}: {}  {}",
                    index + 1,
                    row_letters(cells).bold(),
                    row_squares(cells)
                );
            }
            None => println!("  {}: {}", index + 1, "·····".dimmed()),
        }
    }
    println!("\n{} graded row(s)", result.rows_known());
}
