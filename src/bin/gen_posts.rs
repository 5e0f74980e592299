//! Mock post dataset generator for trying out and stress testing sentiview.
//!
//! Usage: cargo run --features gen-test --bin gen_posts -- [posts] [output]
//! Example: cargo run --features gen-test --bin gen_posts -- 50000 posts.csv
//!
//! About 2% of rows get an unreadable mentions cell and 1% an unparseable
//! timestamp, so the loader's recovery path is exercised too.

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use sentiview::mentions::encode;

const TOPICS: &[&str] = &[
    "climate", "election", "vaccine", "bitcoin", "football", "housing", "AI", "inflation",
];

const OPENERS: &[&str] = &[
    "Really excited about",
    "Not sure what to think about",
    "So tired of hearing about",
    "Great thread on",
    "Terrible take on",
    "Interesting numbers on",
    "Everyone is talking about",
    "Can't believe the news on",
];

const CLOSERS: &[&str] = &[
    "today.",
    "this week!",
    "again...",
    "- thoughts?",
    "https://t.co/x9Ab12",
    "#trending",
    "lol",
    "and it's getting worse.",
    "and it's getting better!",
    "",
];

const HANDLES: &[&str] = &[
    "alice", "bob", "carol", "dave", "eve", "newsdesk", "datasci", "policy_wonk", "fan_123",
    "Иван", "村上",
];

const HEADER: [&str; 9] = [
    "id",
    "created_at",
    "text",
    "sentiment_score",
    "mentions",
    "retweet_count",
    "reply_count",
    "like_count",
    "quote_count",
];

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("mock_posts.csv");

    println!("🧪 Mock Post Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Posts:  {}", count);
    println!("   Output: {}", output);
    println!();

    let start = std::time::Instant::now();
    let file = File::create(output)?;
    let mut writer = csv::Writer::from_writer(BufWriter::with_capacity(1024 * 1024, file));
    writer.write_record(HEADER)?;

    let mut rng = rand::thread_rng();
    let first_day = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or("invalid start date")?;

    for i in 0..count {
        let created_at = first_day + Duration::seconds(rng.gen_range(0..90 * 24 * 3600));
        let created_at = if rng.gen_bool(0.01) {
            "sometime last week".to_string()
        } else {
            created_at.format("%Y-%m-%d %H:%M:%S").to_string()
        };

        let topic = TOPICS.choose(&mut rng).copied().unwrap_or("news");
        let text = format!(
            "{} {} {}",
            OPENERS.choose(&mut rng).copied().unwrap_or(""),
            topic,
            CLOSERS.choose(&mut rng).copied().unwrap_or("")
        );

        let mention_count = rng.gen_range(0..4);
        let mentioned: Vec<String> = HANDLES
            .choose_multiple(&mut rng, mention_count)
            .map(|h| h.to_string())
            .collect();
        let mentions = if rng.gen_bool(0.02) {
            "['unterminated".to_string()
        } else {
            encode(&mentioned)
        };

        // Likes follow a long tail: most posts get a few, some go viral.
        let likes: u64 = if rng.gen_bool(0.05) {
            rng.gen_range(1_000..50_000)
        } else {
            rng.gen_range(0..200)
        };

        writer.write_record([
            (i + 1).to_string(),
            created_at,
            text,
            format!("{:.4}", rng.gen_range(-1.0..=1.0_f64)),
            mentions,
            rng.gen_range(0..likes / 3 + 1).to_string(),
            rng.gen_range(0..likes / 10 + 1).to_string(),
            likes.to_string(),
            rng.gen_range(0..likes / 20 + 1).to_string(),
        ])?;
    }

    writer.flush()?;

    println!(
        "✅ Wrote {} posts in {:.2}s",
        count,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
