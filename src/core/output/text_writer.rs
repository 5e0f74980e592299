//! Plain-text report writer.
//!
//! The report lists each view under its own heading. Empty views print an
//! explicit `no data` line instead of disappearing, so a reader can tell
//! "nothing matched" apart from "section missing".

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::processor::Rendered;
use crate::error::Result;

/// Terms listed in the report; the JSON output carries the full list.
const REPORT_TERMS: usize = 20;
/// Engagement rows listed in the report.
const REPORT_ROWS: usize = 10;
/// Post text is cut to this many characters in the engagement table.
const TEXT_WIDTH: usize = 60;

/// Writes the text report to a file.
pub fn write_text(rendered: &Rendered, output_path: impl AsRef<Path>) -> Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(to_text(rendered).as_bytes())?;
    Ok(())
}

/// Renders the text report to a string.
pub fn to_text(rendered: &Rendered) -> String {
    TextReport(rendered).to_string()
}

struct TextReport<'a>(&'a Rendered);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rendered {
            params,
            stats,
            views,
        } = self.0;

        write!(
            f,
            "Posts: {} of {} ({:.1}%) | {} to {}",
            stats.filtered_posts,
            stats.total_posts,
            stats.selectivity(),
            params.date_range.start(),
            params.date_range.end()
        )?;
        if params.is_keyword_active() {
            write!(f, " | keyword: \"{}\"", params.keyword)?;
        }
        writeln!(f)?;

        heading(f, "Sentiment distribution")?;
        if views.distribution.is_empty() {
            no_data(f)?;
        } else {
            for (sentiment, share) in views.distribution.iter() {
                writeln!(
                    f,
                    "  {:<10}{:>6}  {:>5.1}%",
                    sentiment.label(),
                    share.count,
                    share.percentage
                )?;
            }
        }

        heading(f, "Sentiment trend")?;
        if views.trend.is_empty() {
            no_data(f)?;
        }
        for point in &views.trend {
            writeln!(
                f,
                "  {}  {:+.3}  ({} {})",
                point.date,
                point.mean_score,
                point.post_count,
                plural(point.post_count, "post")
            )?;
        }

        heading(f, "Top mentioned users")?;
        if views.top_users.is_empty() {
            no_data(f)?;
        }
        for (rank, user) in views.top_users.users.iter().enumerate() {
            writeln!(f, "  {:>2}. @{}  {}", rank + 1, user.handle, user.count)?;
        }
        if views.top_users.skipped_posts > 0 {
            let skipped = views.top_users.skipped_posts;
            writeln!(
                f,
                "  ({skipped} {} with unreadable mentions skipped)",
                plural(skipped, "post")
            )?;
        }

        heading(f, "Top terms")?;
        if views.terms.is_empty() {
            no_data(f)?;
        }
        for term in views.terms.terms.iter().take(REPORT_TERMS) {
            writeln!(f, "  {:<20}{:>6}", term.term, term.count)?;
        }

        heading(f, "Engagement by likes")?;
        if views.engagement.is_empty() {
            return no_data(f);
        }
        writeln!(
            f,
            "  {:>7} {:>8} {:>7} {:>6}  text",
            "likes", "retweets", "replies", "quotes"
        )?;
        for row in views.engagement.iter().take(REPORT_ROWS) {
            writeln!(
                f,
                "  {:>7} {:>8} {:>7} {:>6}  {}",
                row.like_count,
                row.retweet_count,
                row.reply_count,
                row.quote_count,
                clip(&row.text)
            )?;
        }
        if views.engagement.len() > REPORT_ROWS {
            writeln!(f, "  ... {} more", views.engagement.len() - REPORT_ROWS)?;
        }
        Ok(())
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "\n== {title} ==")
}

fn no_data(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "  no data")
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Single line, at most [`TEXT_WIDTH`] characters.
fn clip(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if flat.chars().count() <= TEXT_WIDTH {
        return flat;
    }
    let mut cut: String = flat.chars().take(TEXT_WIDTH - 3).collect();
    cut.push_str("...");
    cut
}
