use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Leaderboard file name used when no path is configured
pub const DEFAULT_LEADERBOARD_FILE: &str = "word_scramble_leaderboard.json";

/// Sibling path a write is staged in before being renamed over `path`
pub fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LEADERBOARD_FILE.to_string());

    path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
}

/// Replace `path` with `contents` so readers see either the old or the new file.
///
/// Writes a uniquely named sibling first, then renames it into place. The
/// staging file is removed if the rename fails.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let staging = staging_path(path);
    tokio::fs::write(&staging, contents).await?;

    if let Err(e) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(e);
    }

    Ok(())
}
