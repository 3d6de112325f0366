// File: crates/demo/src/load.rs
// Summary: Transaction CSV loader; malformed rows are skipped with a warning.

use std::path::Path;

use anyhow::{Context, Result};
use fintrack_metrics::Transaction;
use tracing::{info, warn};

/// Load `date,kind,amount,category[,description]` rows.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (row, rec) in rdr.deserialize::<Transaction>().enumerate() {
        match rec {
            Ok(t) => out.push(t),
            Err(err) => {
                skipped += 1;
                warn!(row = row + 2, %err, "skipping malformed transaction row");
            }
        }
    }
    info!(path = %path.display(), loaded = out.len(), skipped, "loaded transactions");
    Ok(out)
}
