//! Sentiment distribution and per-day trend.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{Post, Sentiment};

/// Count and share of one sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ClassShare {
    pub count: usize,
    /// Share of the total, `0.0..=100.0`
    pub percentage: f64,
}

/// Posts per sentiment class.
///
/// When `total > 0` the three percentages sum to 100. When `total == 0`
/// every count and percentage is zero and [`is_empty`](Self::is_empty)
/// reports the "no data" state.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SentimentDistribution {
    pub total: usize,
    pub positive: ClassShare,
    pub neutral: ClassShare,
    pub negative: ClassShare,
}

impl SentimentDistribution {
    /// Returns `true` if there is no data to show.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The share for one class.
    pub fn share(&self, sentiment: Sentiment) -> ClassShare {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Classes with their shares, in label order (Positive, Neutral, Negative).
    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, ClassShare)> + '_ {
        Sentiment::all().into_iter().map(|s| (s, self.share(s)))
    }

    /// Class with the most posts; earlier label order wins ties.
    ///
    /// Returns `None` when there is no data.
    pub fn dominant(&self) -> Option<Sentiment> {
        if self.is_empty() {
            return None;
        }
        self.iter()
            .fold(None::<(Sentiment, usize)>, |best, (s, share)| match best {
                Some((_, count)) if count >= share.count => best,
                _ => Some((s, share.count)),
            })
            .map(|(s, _)| s)
    }
}

/// Mean sentiment for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub mean_score: f64,
    /// Number of posts averaged into this point
    pub post_count: usize,
}

/// Classifies every post and computes per-class shares.
pub fn sentiment_distribution(posts: &[&Post]) -> SentimentDistribution {
    let total = posts.len();
    if total == 0 {
        return SentimentDistribution::default();
    }

    let (mut positive, mut neutral, mut negative) = (0usize, 0usize, 0usize);
    for post in posts {
        match post.sentiment() {
            Sentiment::Positive => positive += 1,
            Sentiment::Neutral => neutral += 1,
            Sentiment::Negative => negative += 1,
        }
    }

    let share = |count: usize| ClassShare {
        count,
        percentage: count as f64 / total as f64 * 100.0,
    };

    SentimentDistribution {
        total,
        positive: share(positive),
        neutral: share(neutral),
        negative: share(negative),
    }
}

/// Averages sentiment per calendar day.
///
/// Points are strictly ascending by date. Days without posts are absent,
/// not zero-filled. The mean is accumulated incrementally, so it stays
/// finite for any finite scores.
pub fn sentiment_trend(posts: &[&Post]) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<NaiveDate, DayMean> = BTreeMap::new();

    for post in posts {
        buckets
            .entry(post.date())
            .or_default()
            .push(post.sentiment_score);
    }

    buckets
        .into_iter()
        .map(|(date, day)| TrendPoint {
            date,
            mean_score: day.mean(),
            post_count: day.count,
        })
        .collect()
}

/// Running mean of one day's scores.
#[derive(Debug, Default)]
struct DayMean {
    mean: f64,
    count: usize,
    min: f64,
    max: f64,
}

impl DayMean {
    fn push(&mut self, score: f64) {
        self.count += 1;
        if self.count == 1 {
            self.mean = score;
            self.min = score;
            self.max = score;
            return;
        }
        let n = self.count as f64;
        // Scale before subtracting: `score - mean` overflows for opposite huge scores.
        self.mean += score / n - self.mean / n;
        self.min = self.min.min(score);
        self.max = self.max.max(score);
    }

    /// Rounding can drift past the observed scores by an ulp; the true mean
    /// never does.
    fn mean(&self) -> f64 {
        self.mean.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(day: u32, hour: u32, score: f64) -> Post {
        let created = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Post::new(format!("{day}-{hour}"), created, "text").with_sentiment(score)
    }

    #[test]
    fn test_distribution_half_and_half() {
        let posts = [post(1, 8, 0.5), post(1, 9, -0.5)];
        let refs: Vec<&Post> = posts.iter().collect();
        let dist = sentiment_distribution(&refs);

        assert_eq!(dist.total, 2);
        assert_eq!(dist.positive.count, 1);
        assert_eq!(dist.negative.count, 1);
        assert_eq!(dist.neutral.count, 0);
        assert!((dist.positive.percentage - 50.0).abs() < 1e-9);
        assert!((dist.negative.percentage - 50.0).abs() < 1e-9);
        assert_eq!(dist.neutral.percentage, 0.0);
    }

    #[test]
    fn test_distribution_percentages_sum_to_100() {
        let posts = [post(1, 1, 0.1), post(1, 2, 0.0), post(1, 3, -0.3)];
        let refs: Vec<&Post> = posts.iter().collect();
        let dist = sentiment_distribution(&refs);
        let sum: f64 = dist.iter().map(|(_, s)| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_distribution_empty() {
        let dist = sentiment_distribution(&[]);
        assert!(dist.is_empty());
        assert_eq!(dist, SentimentDistribution::default());
        assert_eq!(dist.dominant(), None);
    }

    #[test]
    fn test_distribution_dominant() {
        let posts = [post(1, 1, -1.0), post(1, 2, -2.0), post(1, 3, 1.0)];
        let refs: Vec<&Post> = posts.iter().collect();
        assert_eq!(
            sentiment_distribution(&refs).dominant(),
            Some(Sentiment::Negative)
        );

        let tied = [post(1, 1, -1.0), post(1, 3, 1.0)];
        let refs: Vec<&Post> = tied.iter().collect();
        assert_eq!(
            sentiment_distribution(&refs).dominant(),
            Some(Sentiment::Positive)
        );
    }

    #[test]
    fn test_trend_averages_per_day() {
        let posts = [post(1, 8, 0.5), post(1, 20, -0.5), post(3, 1, 0.9)];
        let refs: Vec<&Post> = posts.iter().collect();
        let trend = sentiment_trend(&refs);

        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(trend[0].mean_score, 0.0);
        assert_eq!(trend[0].post_count, 2);
        // Jan 2 has no posts and is not zero-filled.
        assert_eq!(trend[1].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert!((trend[1].mean_score - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_trend_sorted_regardless_of_input_order() {
        let posts = [post(5, 1, 0.1), post(2, 1, 0.2), post(9, 1, 0.3), post(2, 5, 0.4)];
        let refs: Vec<&Post> = posts.iter().collect();
        let trend = sentiment_trend(&refs);
        let dates: Vec<u32> = trend
            .iter()
            .map(|p| chrono::Datelike::day(&p.date))
            .collect();
        assert_eq!(dates, vec![2, 5, 9]);
    }

    #[test]
    fn test_trend_mean_of_huge_scores_is_finite() {
        let posts = [post(1, 8, 1e308), post(1, 9, 1e308)];
        let refs: Vec<&Post> = posts.iter().collect();
        let trend = sentiment_trend(&refs);

        assert!(trend[0].mean_score.is_finite());
        assert_eq!(trend[0].mean_score, 1e308);

        let posts = [post(2, 8, f64::MAX), post(2, 9, -f64::MAX), post(2, 10, f64::MAX)];
        let refs: Vec<&Post> = posts.iter().collect();
        assert!(sentiment_trend(&refs)[0].mean_score.is_finite());
    }

    #[test]
    fn test_trend_empty() {
        assert!(sentiment_trend(&[]).is_empty());
    }
}
