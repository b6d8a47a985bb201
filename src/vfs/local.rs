//! Local-disk VFS backed by `walkdir`.

use super::VfsEntry;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocalKind {
    Folder,
    File,
    Other,
}

/// A file or folder on the local disk.
///
/// Symbolic links are not followed and count as neither folder nor file.
/// Hidden entries (dot-prefixed names) are skipped during enumeration unless
/// [`LocalEntry::include_hidden`] is set.
#[derive(Debug, Clone)]
pub struct LocalEntry {
    path: PathBuf,
    display: String,
    name: String,
    kind: LocalKind,
    include_hidden: bool,
}

impl LocalEntry {
    /// Open a root entry, resolving the path to its canonical form.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let canonical = dunce::canonicalize(path.as_ref())?;
        let file_type = std::fs::symlink_metadata(&canonical)?.file_type();
        let kind = if file_type.is_dir() {
            LocalKind::Folder
        } else if file_type.is_file() {
            LocalKind::File
        } else {
            LocalKind::Other
        };
        let display = canonical.display().to_string();
        let name = canonical
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| display.clone());
        Ok(Self {
            path: canonical,
            display,
            name,
            kind,
            include_hidden: false,
        })
    }

    /// Expose dot-prefixed entries in child listings.
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn fs_path(&self) -> &Path {
        &self.path
    }
}

impl VfsEntry for LocalEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.display
    }

    fn is_folder(&self) -> bool {
        self.kind == LocalKind::Folder
    }

    fn is_file(&self) -> bool {
        self.kind == LocalKind::File
    }

    fn children(&self) -> io::Result<Vec<Self>> {
        if self.kind != LocalKind::Folder {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a folder", self.display),
            ));
        }

        let mut children = Vec::new();
        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);
        for entry in walker {
            let entry = entry.map_err(io::Error::from)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.include_hidden && name.starts_with('.') {
                continue;
            }
            let file_type = entry.file_type();
            let kind = if file_type.is_dir() {
                LocalKind::Folder
            } else if file_type.is_file() {
                LocalKind::File
            } else {
                LocalKind::Other
            };
            children.push(LocalEntry {
                display: entry.path().display().to_string(),
                path: entry.into_path(),
                name,
                kind,
                include_hidden: self.include_hidden,
            });
        }
        Ok(children)
    }
}
