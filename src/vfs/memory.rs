//! In-memory VFS for fixtures and demos.

use super::VfsEntry;
use std::io;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum MemoryKind {
    File,
    Folder { children: Arc<Vec<MemoryEntry>> },
    /// A folder whose listing always fails.
    Unreadable,
}

/// An entry in an in-memory tree.
///
/// Paths are derived while listing: a child's path is `<parent path>/<name>`,
/// and a root's path is its name.
#[derive(Debug, Clone)]
pub struct MemoryEntry {
    name: String,
    path: String,
    kind: MemoryKind,
}

impl MemoryEntry {
    pub fn file(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            kind: MemoryKind::File,
        }
    }

    pub fn folder(name: impl Into<String>, children: Vec<MemoryEntry>) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            kind: MemoryKind::Folder {
                children: Arc::new(children),
            },
        }
    }

    /// A folder that reports an I/O error when its children are listed.
    pub fn failing_folder(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            kind: MemoryKind::Unreadable,
        }
    }

    fn under(&self, parent_path: &str) -> Self {
        Self {
            name: self.name.clone(),
            path: format!("{}/{}", parent_path, self.name),
            kind: self.kind.clone(),
        }
    }
}

impl VfsEntry for MemoryEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn is_folder(&self) -> bool {
        !matches!(self.kind, MemoryKind::File)
    }

    fn is_file(&self) -> bool {
        matches!(self.kind, MemoryKind::File)
    }

    fn children(&self) -> io::Result<Vec<Self>> {
        match &self.kind {
            MemoryKind::Folder { children } => {
                Ok(children.iter().map(|c| c.under(&self.path)).collect())
            }
            MemoryKind::Unreadable => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("cannot list {}", self.path),
            )),
            MemoryKind::File => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a folder", self.path),
            )),
        }
    }
}
