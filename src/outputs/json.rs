//! JSON output generation.
//!
//! Serializes the harvested articles to a single aggregate file:
//!
//! ```text
//! output_folder/
//! └── articles_info.json
//! ```
//!
//! The file is an ordered array of `{title, date, link}` objects in
//! discovery order, pretty-printed with non-ASCII text preserved. An
//! existing file of the same name is overwritten without warning.

use crate::models::ArticleRecord;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Fixed name of the aggregate output file.
pub const OUTPUT_FILENAME: &str = "articles_info.json";

/// Write the harvested records to `<output_dir>/articles_info.json`.
///
/// Creates `output_dir` (including parents) if absent.
///
/// # Returns
///
/// The path of the file written.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn write_articles(
    records: &[ArticleRecord],
    output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(records)?;

    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(%output_dir, error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = Path::new(output_dir).join(OUTPUT_FILENAME);
    fs::write(&path, json).await?;
    info!(path = %path.display(), count = records.len(), "Wrote article index");

    Ok(path)
}
