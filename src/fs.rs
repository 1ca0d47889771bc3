use crate::domain::{self, SourceFile};
use anyhow::{Context, Result};
use filetime::FileTime;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

/// Lists the source files under `source_root`, in file name order.
///
/// Any traversal error is fatal: an unreadable directory would otherwise
/// silently drop its sources from the build.
pub fn list_source_files(source_root: &Path) -> Result<Vec<SourceFile>> {
    let mut source_files = Vec::new();

    for entry in WalkDir::new(source_root).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to traverse directory {}", source_root.display()))?;

        if entry.file_type().is_dir() || !domain::is_source_file_name(entry.path()) {
            continue;
        }

        // Follows symlinks, so a link to a regular file is a source too.
        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => continue,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("Ignoring dangling link {}", entry.path().display());
                continue;
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to read metadata of {}", entry.path().display())))
            }
        };
        source_files.push(SourceFile {
            path: entry.into_path(),
            modified: FileTime::from_last_modification_time(&metadata),
        });
    }

    Ok(source_files)
}

/// Modification time of `path`, or `None` if nothing exists there.
pub fn modification_time(path: &Path) -> Result<Option<FileTime>> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(Some(FileTime::from_last_modification_time(&metadata))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("Failed to read metadata of {}", path.display()))),
    }
}

pub fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    Ok(())
}
