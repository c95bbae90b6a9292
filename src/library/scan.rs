use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LibrarySettings;

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the regular files directly inside `dir`.
///
/// Entries come back in the order the filesystem yields them. That order is
/// platform-defined and is deliberately left unsorted.
pub fn read_directory(dir: &Path, settings: &LibrarySettings) -> walkdir::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            // The folder itself is unreadable.
            Err(e) if e.depth() == 0 => return Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if !settings.include_hidden && is_hidden(path) {
            continue;
        }
        entries.push(path.to_path_buf());
    }

    tracing::debug!(dir = %dir.display(), count = entries.len(), "listed folder");
    Ok(entries)
}
