//! Display functions for command results

use super::formatters::{create_progress_bar, lives_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::GuessOutcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let mark = match step.outcome {
            GuessOutcome::Hit { .. } => "✓".green(),
            GuessOutcome::Miss { .. } => "✗".red(),
            GuessOutcome::AlreadyGuessed { .. } => "·".bright_black(),
        };
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            step.letter.to_string().to_uppercase().bold(),
            mark,
            step.display
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!(
        "\nLives: {}",
        lives_bar(result.lives_left, result.initial_lives)
    );
    if result.success() {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses with {} misses!",
                result.steps.len(),
                result.misses()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Hanged after {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         [{}] {}",
        create_progress_bar(result.win_rate, 1.0, 20).green(),
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Average misses:   {:.2}", result.average_misses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Misses per round:".bright_cyan().bold());
    let mut misses: Vec<_> = result.miss_distribution.iter().collect();
    misses.sort_unstable();
    for (&miss_count, &count) in misses {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {miss_count}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.lost_words.is_empty() {
        println!("\n💀 {}", "Lost words:".bright_red().bold());
        for word in result.lost_words.iter().take(20) {
            println!("   • {}", word.to_uppercase());
        }
        if result.lost_words.len() > 20 {
            println!("   … and {} more", result.lost_words.len() - 20);
        }
    }
}
