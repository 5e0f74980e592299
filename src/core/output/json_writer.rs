//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::analysis::DerivedViews;
use crate::error::Result;

/// Writes every derived view to a JSON file.
///
/// # Format
/// ```json
/// {
///   "distribution": {"total": 2, "positive": {"count": 1, "percentage": 50.0}, ...},
///   "trend": [{"date": "2024-01-01", "mean_score": 0.0, "post_count": 2}],
///   "top_users": {"users": [], "skipped_posts": 0},
///   "terms": {"corpus": "...", "terms": [...]},
///   "engagement": [...]
/// }
/// ```
pub fn write_json(views: &DerivedViews, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(views)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts every derived view to a pretty-printed JSON string.
///
/// Same format as [`write_json`], but returns a String instead of writing to
/// a file.
pub fn to_json(views: &DerivedViews) -> Result<String> {
    Ok(serde_json::to_string_pretty(views)?)
}
