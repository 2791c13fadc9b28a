//! # CLI Module
//!
//! Command-line interface for the gestalt matcher.
//!
//! ## Usage
//! ```bash
//! # Compare two strings and show the alignment
//! gestalt compare MH12AB1234 MH12AB1235
//!
//! # Run the plate validation batch
//! gestalt validate --count 1000 --failure-chance 0.05 --seed 7
//!
//! # One line per test, then export everything
//! gestalt validate --verbose --export report.json
//!
//! # Just print some generated plates
//! gestalt plates --count 5
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use gestalt_match::core::harness::{
    Category, HarnessConfig, HarnessResult, Outcome, Summary, TestRecord, ValidationHarness,
    DEFAULT_TEST_COUNT,
};
use gestalt_match::core::matcher::{compare, similarity};
use gestalt_match::core::plate::{PlateGenerator, DEFAULT_FAILURE_CHANCE};
use gestalt_match::core::reporter::{alignment_rows, export_to_path, AlignedRow, BatchReport};
use gestalt_match::error::{GestaltError, Result};
use gestalt_match::events::{Event, EventChannel, HarnessEvent, TestEvent};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::thread;

/// Gestalt Match - Sequence similarity you can audit
#[derive(Parser, Debug)]
#[command(name = "gestalt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two strings and show the per-character alignment
    Compare {
        /// First string
        first: String,

        /// Second string
        second: String,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Run the licence plate validation batch
    Validate {
        /// Total number of tests (half valid, half invalid)
        #[arg(short = 'n', long, default_value_t = DEFAULT_TEST_COUNT)]
        count: usize,

        /// Probability that an invalid plate collides with its valid twin (0-1)
        #[arg(short, long, default_value_t = DEFAULT_FAILURE_CHANCE)]
        failure_chance: f64,

        /// Seed for plate generation (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Score on the calling thread only
        #[arg(long)]
        sequential: bool,

        /// Print one line per test
        #[arg(short, long)]
        verbose: bool,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,

        /// Write the full report to a .json or .csv file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Print generated valid/invalid plate pairs
    Plates {
        /// Number of pairs
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// Probability that an invalid plate collides with its valid twin (0-1)
        #[arg(short, long, default_value_t = DEFAULT_FAILURE_CHANCE)]
        failure_chance: f64,

        /// Seed for plate generation (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (scores or failures only)
    Minimal,
}

/// User-facing line for an error that ends the run
pub fn render_error(error: &GestaltError) -> String {
    format!("{} {}", style("error:").red().bold(), error)
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            first,
            second,
            output,
        } => run_compare(&first, &second, output),
        Commands::Validate {
            count,
            failure_chance,
            seed,
            sequential,
            verbose,
            output,
            export,
        } => {
            let config = HarnessConfig {
                count,
                failure_chance,
                seed: seed.unwrap_or_else(rand::random),
                parallel: !sequential,
            };
            run_validate(config, verbose, output, export)
        }
        Commands::Plates {
            count,
            failure_chance,
            seed,
        } => run_plates(count, failure_chance, seed.unwrap_or_else(rand::random)),
    }
}

fn run_compare(first: &str, second: &str, output: OutputFormat) -> Result<()> {
    let first = first.trim();
    let second = second.trim();
    let result = compare(first, second)?;
    let rows = alignment_rows(first, second, &result.opcodes)?;

    match output {
        OutputFormat::Pretty => {
            let term = Term::stdout();
            term.write_line(&format!("{}", style("Char1  Char2  Match").bold()))
                .ok();
            term.write_line("---------------------").ok();
            for row in &rows {
                term.write_line(&format_row(row)).ok();
            }
            term.write_line("").ok();
            term.write_line(&format!(
                "Similarity: {} %",
                style(format!("{:.2}", result.ratio)).cyan().bold()
            ))
            .ok();
            if result.is_identical() {
                term.write_line(&format!("{}", style("Strings are identical").green()))
                    .ok();
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "first": first,
                "second": second,
                "ratio": result.ratio,
                "opcodes": result.opcodes,
                "alignment": rows,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        }
        OutputFormat::Minimal => println!("{:.2}", result.ratio),
    }

    Ok(())
}

fn format_row(row: &AlignedRow) -> String {
    let left = row.left.unwrap_or('-');
    let right = row.right.unwrap_or('-');
    let mark = if row.matched {
        style("✓").green().to_string()
    } else {
        style("✗").red().to_string()
    };
    format!("{left}      {right}      {mark}")
}

fn run_validate(
    config: HarnessConfig,
    verbose: bool,
    output: OutputFormat,
    export: Option<PathBuf>,
) -> Result<()> {
    config.validate()?;

    let term = Term::stderr();
    let pretty = matches!(output, OutputFormat::Pretty);

    if pretty {
        term.write_line(&format!(
            "{} {}",
            style("Starting License Plate Similarity Tests").bold().cyan(),
            style(format!("(seed {})", config.seed)).dim()
        ))
        .ok();
        term.write_line("").ok();
    }

    let harness = ValidationHarness::builder().config(config).build();

    let (sender, receiver) = EventChannel::new();

    // Progress bar unless every record gets its own line
    let progress = if pretty && !verbose {
        let pb = ProgressBar::new((config.pairs() * 2) as u64);
        if let Ok(bar_style) =
            ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(bar_style.progress_chars("█▓░"));
        }
        Some(pb)
    } else {
        None
    };

    let progress_clone = progress.clone();
    let print_records = pretty && verbose;

    // Handle events in a separate thread
    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Harness(HarnessEvent::PhaseChanged { phase }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message(format!("{}", phase));
                    }
                }
                Event::Test(TestEvent::Record(record)) => {
                    if let Some(ref pb) = progress_clone {
                        pb.inc(1);
                    }
                    if print_records {
                        println!("{}", format_record(&record));
                    }
                }
                Event::Harness(HarnessEvent::Completed { .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.finish_and_clear();
                    }
                }
                _ => {}
            }
        }
    });

    let result = harness.run_with_events(&sender);

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    let result = result?;

    match output {
        OutputFormat::Pretty => print_pretty_summary(&term, &result.summary),
        OutputFormat::Json => print_json_results(&result),
        OutputFormat::Minimal => print_minimal_results(&result),
    }

    if let Some(path) = export {
        let report = BatchReport::new(config, &result);
        export_to_path(&report, &path)?;
        if pretty {
            term.write_line(&format!(
                "{} {}",
                style("Report written to").dim(),
                path.display()
            ))
            .ok();
        }
    }

    Ok(())
}

fn format_record(record: &TestRecord) -> String {
    let status = match record.outcome {
        Outcome::Pass => style(record.outcome.to_string()).green(),
        Outcome::Fail => style(record.outcome.to_string()).red(),
    };
    match record.category {
        Category::Valid => format!(
            "Valid Plate {:03}: {} | Similarity: {:.2}% | {}",
            record.index, record.left, record.similarity, status
        ),
        Category::Invalid => format!(
            "Invalid Plate {:03}: {} vs {} | Similarity: {:.2}% | {}",
            record.index, record.right, record.left, record.similarity, status
        ),
    }
}

fn print_pretty_summary(term: &Term, summary: &Summary) {
    term.write_line("").ok();
    term.write_line(&format!(
        "{}",
        style("--- License Plate Test Summary ---").bold().underlined()
    ))
    .ok();

    let lines = [
        ("Valid Plates:  ", summary.valid),
        ("Invalid Plates:", summary.invalid),
        ("Total Tests:   ", summary.totals()),
    ];
    for (label, stats) in lines {
        term.write_line(&format!(
            "{} Passed = {}, Failed = {} ({:.2}% passed, {:.2}% failed)",
            label,
            style(stats.passed).green(),
            style(stats.failed).red(),
            stats.pass_rate(),
            stats.failure_rate()
        ))
        .ok();
    }

    term.write_line("").ok();
    let highlight = format!(
        ">>> TOTAL FAILED PLATES = {} out of {} ({:.2}%) <<<",
        summary.total_failed(),
        summary.total_tests(),
        summary.failure_rate()
    );
    let highlight = if summary.total_failed() == 0 {
        style(highlight).green().bold()
    } else {
        style(highlight).red().bold()
    };
    term.write_line(&highlight.to_string()).ok();
    term.write_line("").ok();
}

fn print_json_results(result: &HarnessResult) {
    let output = serde_json::json!({
        "seed": result.seed,
        "duration_ms": result.duration_ms,
        "summary": result.summary,
        "total_tests": result.summary.total_tests(),
        "total_failed": result.summary.total_failed(),
        "failure_rate": result.summary.failure_rate(),
        "pass_rate": result.summary.totals().pass_rate(),
        "records": result.records,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

fn print_minimal_results(result: &HarnessResult) {
    for record in result.records.iter().filter(|r| !r.outcome.is_pass()) {
        println!("{}\t{}\t{}", record.category, record.left, record.right);
    }
}

fn run_plates(count: usize, failure_chance: f64, seed: u64) -> Result<()> {
    let generator = PlateGenerator::new(failure_chance)?;
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..count {
        let valid = generator.valid(&mut rng);
        let invalid = generator.invalid(&mut rng, valid.as_str())?;
        println!(
            "{}  {}  {:.2}%",
            valid,
            invalid,
            similarity(valid.as_str(), &invalid)
        );
    }

    Ok(())
}
