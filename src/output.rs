use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, ResultExt};

/// Encodes `value` as JSON indented with four spaces.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

/// Writes `value` to `path`, replacing whatever was there.
///
/// The document is staged next to the target and renamed into place, so a
/// failed write never leaves a truncated file behind. The staged file takes
/// the permissions of the file it replaces. A symlinked target is written
/// through in place so the link survives.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let bytes = to_json_pretty(value)?;
    let existing = tokio::fs::symlink_metadata(path).await.ok();

    if existing.as_ref().is_some_and(|m| m.file_type().is_symlink()) {
        tokio::fs::write(path, &bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {} bytes through link {}", bytes.len(), path.display());
        return Ok(());
    }

    let staging = staging_path(path);
    if let Err(e) = stage(&staging, &bytes, existing.map(|m| m.permissions())).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(e).with_context(|| format!("Failed to write {}", staging.display()));
    }
    if let Err(e) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(e).with_context(|| format!("Failed to replace {}", path.display()));
    }

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

async fn stage(
    staging: &Path,
    bytes: &[u8],
    permissions: Option<std::fs::Permissions>,
) -> std::io::Result<()> {
    tokio::fs::write(staging, bytes).await?;
    if let Some(permissions) = permissions {
        tokio::fs::set_permissions(staging, permissions).await?;
    }
    Ok(())
}
