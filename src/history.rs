//! Session log of interpretations, one JSON object per line.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::models::Interpretation;
use crate::search::SearchUrl;

/// Append one record for `query` to `path`, creating the file if needed
pub async fn append(
    path: &Path,
    query: &str,
    interpretation: &Interpretation,
    search: Option<&SearchUrl>,
) -> Result<()> {
    let record = json!({
        "query": query,
        "interpretation": interpretation,
        "search": search,
    });
    let mut line = serde_json::to_string(&record)?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.write_all(line.as_bytes())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.flush().await?;

    Ok(())
}
