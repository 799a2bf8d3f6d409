//! JSON output writing
//!
//! Pretty-printed JSON with stable ordering: struct field order fixes the
//! key layout, lists are already ranked, and the per-user aggregation is
//! sorted by user id. Identical pipeline input (and seed) produces
//! byte-identical files.

use crate::error::Result;
use matchx_engine::{Recommendation, UserRecommendations};
use matchx_schema::EntityKind;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output file for one item kind's flattened list
#[must_use]
pub fn flat_output_path(out_dir: &Path, kind: EntityKind) -> PathBuf {
    out_dir.join(format!("{}_recommendations.json", kind.as_str()))
}

/// Output file for the per-user aggregation
#[must_use]
pub fn user_output_path(out_dir: &Path) -> PathBuf {
    out_dir.join("user_recommendations.json")
}

/// Write one item kind's flattened recommendation list.
pub fn write_flat(out_dir: &Path, kind: EntityKind, recommendations: &[Recommendation]) -> Result<()> {
    let path = flat_output_path(out_dir, kind);
    write_json(&path, recommendations)?;
    info!(
        "wrote {} {} recommendations to {}",
        recommendations.len(),
        kind,
        path.display()
    );
    Ok(())
}

/// Write the per-user aggregation, sorted by user id.
pub fn write_per_user(out_dir: &Path, users: &[UserRecommendations]) -> Result<()> {
    let mut sorted: Vec<&UserRecommendations> = users.iter().collect();
    sorted.sort_by(|a, b| a.user_id.cmp(&b.user_id));

    let path = user_output_path(out_dir);
    write_json(&path, &sorted)?;
    info!("wrote recommendations for {} users to {}", sorted.len(), path.display());
    Ok(())
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut body = serde_json::to_vec_pretty(value)?;
    body.push(b'\n');
    fs::write(path, body)?;
    Ok(())
}
