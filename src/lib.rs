//! Asset Browser: category/asset trees from a virtual file system
//!
//! Walks a folder tree through the [`vfs::VfsEntry`] abstraction, turning
//! folders into categories and files with recognized extensions into assets.
//! Assets are deduplicated by base name within each folder and every folder's
//! children are sorted categories-first, case-insensitively.

pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod vfs;
