//! Edge case tests for sentiview
//!
//! These tests cover boundary conditions of the filter, the aggregations and
//! the loader that the unit tests only touch in isolation.

use chrono::NaiveDate;
use sentiview::config::{AnalysisConfig, LoaderConfig};
use sentiview::core::analysis::{sentiment_distribution, term_frequencies, top_mentioned_users};
use sentiview::core::{DateRange, FilterParams, filter_posts, render};
use sentiview::loader::load_from_str;
use sentiview::mentions::{Mentions, MentionsError, decode};
use sentiview::{Post, Sentiment, SentiviewError};

const HEADER: &str =
    "created_at,text,sentiment_score,mentions,retweet_count,reply_count,like_count,quote_count";

fn ts(d: u32, h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, d)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn range(a: u32, b: u32) -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, a).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, b).unwrap(),
    )
    .unwrap()
}

// =========================================================================
// Filter boundaries
// =========================================================================

#[test]
fn test_range_bounds_are_inclusive_whole_days() {
    let posts = vec![
        Post::new("before", ts(1, 23, 59, 59), "x"),
        Post::new("first", ts(2, 0, 0, 0), "x"),
        Post::new("last", ts(3, 23, 59, 59), "x"),
        Post::new("after", ts(4, 0, 0, 0), "x"),
    ];
    let ids: Vec<&str> = filter_posts(&posts, &FilterParams::new(range(2, 3)))
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "last"]);
}

#[test]
fn test_single_day_range() {
    let posts = vec![
        Post::new("a", ts(5, 0, 0, 0), "x"),
        Post::new("b", ts(5, 23, 0, 0), "x"),
        Post::new("c", ts(6, 0, 0, 0), "x"),
    ];
    let params = FilterParams::new(range(5, 5));
    assert_eq!(filter_posts(&posts, &params).len(), 2);
}

#[test]
fn test_keyword_is_literal_not_pattern() {
    let posts = vec![
        Post::new("1", ts(1, 0, 0, 0), "price is $5.00 (approx)"),
        Post::new("2", ts(1, 0, 0, 0), "price is $5x00 approx"),
    ];
    for needle in ["$5.00", "(approx)", "5.0"] {
        let params = FilterParams::new(range(1, 1)).with_keyword(needle);
        let hits = filter_posts(&posts, &params);
        assert_eq!(hits.len(), 1, "needle {needle:?}");
        assert_eq!(hits[0].id, "1");
    }
    let star = FilterParams::new(range(1, 1)).with_keyword(".*");
    assert!(filter_posts(&posts, &star).is_empty());
}

#[test]
fn test_keyword_unicode_case_folding() {
    let posts = vec![
        Post::new("1", ts(1, 0, 0, 0), "ПРИВЕТ мир"),
        Post::new("2", ts(1, 0, 0, 0), "Ärger über Straßen"),
    ];
    let params = FilterParams::new(range(1, 1)).with_keyword("привет");
    assert_eq!(filter_posts(&posts, &params).len(), 1);

    let params = FilterParams::new(range(1, 1)).with_keyword("ärger");
    assert_eq!(filter_posts(&posts, &params)[0].id, "2");
}

#[test]
fn test_nothing_matches_is_not_an_error() {
    let posts = vec![Post::new("1", ts(1, 0, 0, 0), "hello")];
    let params = FilterParams::new(range(1, 31)).with_keyword("absent");
    let rendered = render(&posts, &params, &AnalysisConfig::default());

    assert_eq!(rendered.stats.filtered_posts, 0);
    assert!(rendered.views.is_empty());
    assert_eq!(rendered.stats.selectivity(), 0.0);
}

#[test]
fn test_bad_date_strings() {
    for bad in ["2024-13-01", "2024-02-30", "01/02/2024", "", "2024-1-1x"] {
        let err = DateRange::parse(bad, "2024-12-31").unwrap_err();
        assert!(
            matches!(err, SentiviewError::InvalidDate { .. }),
            "input {bad:?}"
        );
    }
}

// =========================================================================
// Classification boundaries
// =========================================================================

#[test]
fn test_zero_score_is_neutral() {
    assert_eq!(Sentiment::from_score(0.0), Sentiment::Neutral);
    assert_eq!(Sentiment::from_score(-0.0), Sentiment::Neutral);
    assert_eq!(Sentiment::from_score(f64::MIN_POSITIVE), Sentiment::Positive);
    assert_eq!(Sentiment::from_score(-f64::MIN_POSITIVE), Sentiment::Negative);
}

#[test]
fn test_all_neutral_distribution() {
    let posts: Vec<Post> = (0..3)
        .map(|i| Post::new(i.to_string(), ts(1, i, 0, 0), "x"))
        .collect();
    let refs: Vec<&Post> = posts.iter().collect();
    let dist = sentiment_distribution(&refs);
    assert_eq!(dist.neutral.count, 3);
    assert_eq!(dist.neutral.percentage, 100.0);
    assert_eq!(dist.dominant(), Some(Sentiment::Neutral));
}

// =========================================================================
// Mentions
// =========================================================================

#[test]
fn test_mentions_variants() {
    assert_eq!(decode("[]").unwrap(), Vec::<String>::new());
    assert_eq!(decode("  [ 'a' , \"b\" , ]  ").unwrap(), vec!["a", "b"]);
    assert_eq!(decode(r"['it\'s']").unwrap(), vec!["it's"]);
    assert_eq!(decode(""), Err(MentionsError::Empty));
    assert!(decode("['a'] trailing").is_err());
    assert!(decode("[a]").is_err());
    assert!(decode("__import__('os')").is_err());
}

#[test]
fn test_duplicate_handles_in_one_post_count_twice() {
    let post = Post::new("1", ts(1, 0, 0, 0), "x")
        .with_mentions(vec!["alice".into(), "alice".into()]);
    let top = top_mentioned_users(&[&post], 10);
    assert_eq!(top.users[0].count, 2);
}

#[test]
fn test_handles_are_case_sensitive() {
    let post = Post::new("1", ts(1, 0, 0, 0), "x")
        .with_mentions(vec!["Alice".into(), "alice".into()]);
    let top = top_mentioned_users(&[&post], 10);
    assert_eq!(top.users.len(), 2);
}

#[test]
fn test_top_users_limit_zero() {
    let post = Post::new("1", ts(1, 0, 0, 0), "x").with_mentions(vec!["a".into()]);
    assert!(top_mentioned_users(&[&post], 0).is_empty());
}

#[test]
fn test_default_mentions_is_empty_list() {
    assert_eq!(Mentions::default().handles(), Some(&[][..]));
}

// =========================================================================
// Terms
// =========================================================================

#[test]
fn test_terms_unicode_words() {
    let posts = [
        Post::new("1", ts(1, 0, 0, 0), "Привет мир, привет!"),
        Post::new("2", ts(1, 0, 0, 0), "日本語 テキスト"),
    ];
    let refs: Vec<&Post> = posts.iter().collect();
    let freqs = term_frequencies(&refs, &AnalysisConfig::default());
    assert_eq!(freqs.terms[0].term, "привет");
    assert_eq!(freqs.terms[0].count, 2);
}

#[test]
fn test_terms_only_emoji() {
    let posts = [Post::new("1", ts(1, 0, 0, 0), "🔥🔥 💀")];
    let refs: Vec<&Post> = posts.iter().collect();
    let freqs = term_frequencies(&refs, &AnalysisConfig::default());
    assert!(freqs.is_empty());
    assert_eq!(freqs.corpus, "🔥🔥 💀");
}

// =========================================================================
// Loader
// =========================================================================

#[test]
fn test_loader_header_only() {
    let report = load_from_str(&format!("{HEADER}\n"), &LoaderConfig::default()).unwrap();
    assert!(report.posts.is_empty());
    assert!(report.is_clean());
}

#[test]
fn test_loader_missing_column() {
    let err = load_from_str(
        "created_at,text,sentiment_score\n2024-01-01,x,0.1\n",
        &LoaderConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SentiviewError::MissingColumn { column: "mentions" }));
}

#[test]
fn test_loader_headers_case_and_order_insensitive() {
    let csv = "Like_Count,TEXT,created_at,quote_count,reply_count,retweet_count,mentions,sentiment_score,extra\n\
               7,hi,2024-01-01,0,0,0,[],0.2,ignored\n";
    let report = load_from_str(csv, &LoaderConfig::default()).unwrap();
    assert_eq!(report.posts[0].like_count, 7);
    assert_eq!(report.posts[0].text, "hi");
    // No id column: 1-based row number.
    assert_eq!(report.posts[0].id, "1");
}

#[test]
fn test_loader_negative_count_rejected() {
    let csv = format!("{HEADER}\n2024-01-01,x,0.1,[],0,0,-3,0\n");
    let report = load_from_str(&csv, &LoaderConfig::default()).unwrap();
    assert!(report.posts.is_empty());
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn test_loader_short_row_is_skipped() {
    let csv = format!("{HEADER}\n2024-01-01,x,0.1\n2024-01-02,y,0.2,[],0,0,1,0\n");
    let report = load_from_str(&csv, &LoaderConfig::default()).unwrap();
    assert_eq!(report.posts.len(), 1);
    assert_eq!(report.skipped[0].line, 2);
}

#[test]
fn test_loader_offset_timestamps_keep_local_day() {
    let csv = format!(
        "{HEADER}\n2024-01-01T23:30:00-02:00,x,0.1,[],0,0,0,0\n2024-01-02T00:15:00+09:00,y,0.1,[],0,0,0,0\n"
    );
    let report = load_from_str(&csv, &LoaderConfig::default()).unwrap();
    assert_eq!(
        report.posts[0].date(),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    );
    assert_eq!(
        report.posts[1].date(),
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    );
}

#[test]
fn test_loader_semicolon_delimiter() {
    let csv = HEADER.replace(',', ";") + "\n2024-01-01;a, b;0.1;['x'];0;0;0;0\n";
    let report = load_from_str(&csv, &LoaderConfig::default().with_delimiter(b';')).unwrap();
    assert_eq!(report.posts[0].text, "a, b");
    assert_eq!(report.posts[0].handles().unwrap(), ["x"]);
}
