use crate::errors::StoreResult;
use bytes::Bytes;
use std::path::{Path, PathBuf};

const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

/// Read-only view of the working directory, addressed by paths relative
/// to its root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// List the direct children of a directory as workspace-relative
    /// paths, sorted by name bytes. Metadata directories are skipped.
    pub fn list_dir(&self, dir_path: &Path) -> StoreResult<Vec<PathBuf>> {
        let full_path = self.path.join(dir_path);

        let mut entries = std::fs::read_dir(full_path)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter_map(|entry| self.check_if_not_ignored_path(&entry.path()))
            .collect::<Vec<_>>();
        entries.sort();

        Ok(entries)
    }

    /// True when the path names a directory itself. Symbolic links are
    /// never followed here, so a link to a directory reports `false`.
    pub fn is_dir(&self, path: &Path) -> StoreResult<bool> {
        let metadata = std::fs::symlink_metadata(self.path.join(path))?;
        Ok(metadata.is_dir())
    }

    /// Read a file's raw bytes. Content is treated as opaque binary.
    pub fn read_file(&self, file_path: &Path) -> StoreResult<Bytes> {
        let content = std::fs::read(self.path.join(file_path))?;
        Ok(content.into())
    }

    fn check_if_not_ignored_path(&self, path: &Path) -> Option<PathBuf> {
        let name = path.file_name()?.to_string_lossy();
        if IGNORED_PATHS.contains(&name.as_ref()) {
            return None;
        }

        Some(path.strip_prefix(self.path.as_ref()).ok()?.to_path_buf())
    }
}
