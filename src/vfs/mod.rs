//! Virtual File System
//!
//! The tree builder reads folders through [`VfsEntry`] so the backing store can
//! be a local disk, an archive or an in-memory fixture.

pub mod local;
pub mod memory;

pub use local::LocalEntry;
pub use memory::MemoryEntry;

use std::io;

/// One entry (folder, file or something else) in a virtual file system.
pub trait VfsEntry: Sized {
    /// Entry name without any parent path.
    fn name(&self) -> &str;

    /// Display path of the entry, used in progress messages and errors.
    fn path(&self) -> &str;

    fn is_folder(&self) -> bool;

    fn is_file(&self) -> bool;

    /// List the direct children of a folder.
    ///
    /// Order is whatever the backing store yields; callers must not assume it
    /// is sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the folder cannot be read.
    fn children(&self) -> io::Result<Vec<Self>>;
}
