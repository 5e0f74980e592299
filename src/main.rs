//! # sentiview CLI
//!
//! Command-line interface for the sentiview library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use sentiview::SentiviewError;
use sentiview::cli::Args;
use sentiview::core::render;
use sentiview::dataset;
use sentiview::format::{to_format_string, write_to_format};
use sentiview::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SentiviewError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    logging::init(args.debug);

    let loader_config = args.loader_config()?;
    let analysis_config = args.analysis_config();
    let format = args.output_format()?;

    let dataset = dataset::get_or_load(&args.input, &loader_config)?;
    let params = args.filter_params(dataset.date_bounds())?;
    let rendered = render(dataset.posts(), &params, &analysis_config);

    // Without --output the report itself is the only thing on stdout.
    let Some(output_path) = &args.output else {
        print!("{}", to_format_string(&rendered, format)?);
        return Ok(());
    };

    println!("📊 sentiview v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", output_path.display());
    println!("📄 Format:  {}", format);
    println!(
        "📅 Range:   {} to {}",
        params.date_range.start(),
        params.date_range.end()
    );
    if params.is_keyword_active() {
        println!("🔍 Keyword: {}", params.keyword);
    }
    println!();

    let write_start = Instant::now();
    write_to_format(&rendered, output_path, format)?;
    println!(
        "✅ Done! Output saved to {} ({:.2}s)",
        output_path.display(),
        write_start.elapsed().as_secs_f64()
    );

    let report = dataset.report();
    let stats = rendered.stats;

    println!();
    println!("📊 Summary:");
    println!(
        "   Loaded:    {} posts ({} rows skipped)",
        dataset.len(),
        report.skipped.len()
    );
    println!(
        "   Filtered:  {} posts ({:.1}%)",
        stats.filtered_posts,
        stats.selectivity()
    );
    if let Some(dominant) = rendered.views.distribution.dominant() {
        println!(
            "   Dominant:  {} ({:.1}%)",
            dominant,
            rendered.views.distribution.share(dominant).percentage
        );
    }
    if stats.malformed_mentions > 0 {
        println!(
            "   Skipped:   {} posts with unreadable mentions",
            stats.malformed_mentions
        );
    }

    println!();
    println!("⚡ Performance:");
    println!(
        "   Total time:  {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
