//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::filter::LevelFilter;

use chatstats::ChatStatsError;
use chatstats::cli::{Args, render_table};
use chatstats::core::apply_window;
use chatstats::format::{OutputFormat, to_format_string, write_to_format};
use chatstats::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::from(args.log_level))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Where the report goes.
enum Destination {
    /// Aligned table on stdout, with progress and summary lines.
    Terminal,
    /// Machine-readable report on stdout and nothing else, for piping.
    Stdout(OutputFormat),
    /// Report file, with progress and summary lines on stdout.
    File(OutputFormat, String),
}

fn destination(args: &Args) -> Result<Destination, ChatStatsError> {
    Ok(match (args.format.file_format(), &args.output) {
        (None, None) => Destination::Terminal,
        (None, Some(path)) => Destination::File(OutputFormat::from_path(path)?, path.clone()),
        (Some(format), None) => Destination::Stdout(format),
        (Some(format), Some(path)) => Destination::File(format, path.clone()),
    })
}

fn run(args: &Args) -> Result<(), ChatStatsError> {
    let total_start = Instant::now();
    let destination = destination(args)?;
    let report = args.report_config();
    let output_config = args.output_config();
    let parser = TranscriptParser::with_config(args.transcript_config())?;

    if let Destination::Stdout(format) = destination {
        let dataset = parser.analyze(&args.input)?;
        let view = apply_window(&dataset, report.window, report.show_silent);
        let rendered = to_format_string(&view, report.sort_order, format, &output_config)?;
        print!("{rendered}");
        if !rendered.is_empty() && !rendered.ends_with('\n') {
            println!();
        }
        return Ok(());
    }

    // Print header
    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("🗓️  Window:  {}", report.window);
    println!("🔃 Sort:    {}", report.sort_order);
    if let Destination::File(format, path) = &destination {
        println!("💾 Output:  {}", path);
        println!("📄 Format:  {}", format);
    }
    println!();

    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let dataset = parser.analyze(&args.input)?;
    println!(
        "   Found {} members, {} messages ({:.2}s)",
        dataset.stats.len(),
        dataset.total_messages(),
        parse_start.elapsed().as_secs_f64()
    );

    let view = apply_window(&dataset, report.window, report.show_silent);

    match &destination {
        Destination::File(format, path) => {
            println!("💾 Writing {}...", format);
            let write_start = Instant::now();
            write_to_format(&view, report.sort_order, path, *format, &output_config)?;
            println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());
            println!();
            println!("✅ Done! Report saved to {}", path);
        }
        _ => {
            println!();
            print!("{}", render_table(&view, report.sort_order, &output_config));
        }
    }

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Members:   {}", view.total_members);
    println!("   Active:    {}", view.active_members);
    println!("   Silent:    {}", view.silent_members);
    println!("   Messages:  {}", view.total_messages());
    println!();
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
