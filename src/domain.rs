use anyhow::{Context, Result};
use filetime::FileTime;
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix identifying the files compiled by the builder.
pub const SOURCE_EXTENSION: &str = ".c";

pub fn is_source_file_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.ends_with(SOURCE_EXTENSION))
}

/// A source file discovered under the source root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub modified: FileTime,
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// The executable produced from one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildTarget {
    pub source: SourceFile,
    pub destination: PathBuf,
}

impl BuildTarget {
    pub fn new(source: SourceFile, source_root: &Path, build_root: &Path) -> Result<Self> {
        let destination = destination_path(&source.path, source_root, build_root)?;
        Ok(Self {
            source,
            destination,
        })
    }

    /// The destination exists and was modified no earlier than the source.
    pub fn is_up_to_date(&self, destination_modified: Option<FileTime>) -> bool {
        match destination_modified {
            Some(destination_modified) => destination_modified >= self.source.modified,
            None => false,
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

/// Swaps the source root for the build root and drops the last extension.
pub fn destination_path(source: &Path, source_root: &Path, build_root: &Path) -> Result<PathBuf> {
    let relative_path = source.strip_prefix(source_root).with_context(|| {
        format!(
            "Source file {} is not located under {}",
            source.display(),
            source_root.display()
        )
    })?;

    Ok(build_root.join(relative_path).with_extension(""))
}
