//! Display functions for command results

use super::formatters::{create_progress_bar, format_distance, format_path};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.bright_yellow().bold(),
        result.end.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!(
            "\n  Indexed:  {} words, {} edges",
            result.indexed_words, result.edges
        );
        println!("  Time:     {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }

    println!();
    match (result.distance, result.path.as_deref()) {
        (Some(distance), Some(path)) => {
            println!(
                "{}",
                format!("✅ Distance: {}", format_distance(Some(distance)))
                    .green()
                    .bold()
            );
            println!("   {}", format_path(Some(path)));
        }
        _ => {
            println!("{}", format!("❌ {}", format_path(None)).red().bold());
        }
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBOR ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_dictionary {
        println!("\n{}", "⚠ Word is not in the dictionary".yellow());
    }

    println!(
        "\n📊 Among {} words of length {}:",
        result.indexed_words,
        result.word.chars().count()
    );
    println!("   Edges:       {}", result.edges);
    println!("   Max degree:  {}", result.max_degree);

    let bar = create_progress_bar(
        result.neighbors.len() as f64,
        result.max_degree as f64,
        30,
    );
    println!(
        "   Degree:      [{}] {}",
        bar.green(),
        format!("{}", result.neighbors.len()).bright_yellow()
    );

    if result.neighbors.is_empty() {
        println!("\n   No neighbors");
    } else {
        println!("\n   Neighbors:   {}", result.neighbors.join(", "));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!(
        "   Reachable:        {}",
        format!("{}", result.reachable).green()
    );
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    println!(
        "   Average distance: {}",
        format!("{:.2}", result.average_distance)
            .bright_yellow()
            .bold()
    );
    println!("   Longest ladder:   {}", result.max_distance);
    if let Some((start, end)) = &result.longest {
        println!("                     {start} → {end}");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if result.reachable == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for distance in 0..=result.max_distance {
        if let Some(&count) = result.distribution.get(&distance) {
            let pct = (count as f64 / result.reachable as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {distance:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
