//! Tree Builder
//!
//! Walks a VFS depth-first, turning folders into categories and asset files
//! into assets. A folder's children are sorted once its listing is complete.

use super::callback::ScanCallback;
use super::extension::ExtensionMatcher;
use super::factory::NodeFactory;
use super::node::{CategoryNode, RootNode};
use crate::error::ScanError;
use crate::vfs::VfsEntry;
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Builds an asset tree from a VFS root folder.
///
/// The factory's extension list is read once, here in [`TreeBuilder::new`].
pub struct TreeBuilder<V, F> {
    root_directory: V,
    factory: F,
    extensions: ExtensionMatcher,
}

#[derive(Debug, Default, Clone, Copy)]
struct ScanCounters {
    folders: usize,
    assets: usize,
    skipped: usize,
    duplicates: usize,
    cancelled: bool,
}

impl<V: VfsEntry, F: NodeFactory> TreeBuilder<V, F> {
    pub fn new(root_directory: V, factory: F) -> Self {
        let extensions = ExtensionMatcher::new(factory.asset_extensions());
        Self {
            root_directory,
            factory,
            extensions,
        }
    }

    pub fn root_directory(&self) -> &V {
        &self.root_directory
    }

    pub fn extensions(&self) -> &ExtensionMatcher {
        &self.extensions
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn into_factory(self) -> F {
        self.factory
    }

    /// Scan into a fresh root without progress reporting.
    pub fn build(&mut self) -> Result<RootNode<F::Data>, ScanError>
    where
        F::Data: Default,
    {
        self.build_into(RootNode::default(), None)
    }

    /// Scan into a fresh root, reporting progress and honoring cancellation.
    pub fn build_with_callback(
        &mut self,
        callback: &mut dyn ScanCallback,
    ) -> Result<RootNode<F::Data>, ScanError>
    where
        F::Data: Default,
    {
        self.build_into(RootNode::default(), Some(callback))
    }

    /// Scan into a caller-supplied root.
    ///
    /// Children are appended to whatever `root` already holds. A cancelled
    /// scan returns the tree gathered so far; an enumeration failure returns
    /// only the error.
    pub fn build_into(
        &mut self,
        mut root: RootNode<F::Data>,
        callback: Option<&mut dyn ScanCallback>,
    ) -> Result<RootNode<F::Data>, ScanError> {
        let started = Instant::now();
        info!(root = self.root_directory.path(), "Scanning asset tree");

        let mut pass = ScanPass {
            factory: &mut self.factory,
            extensions: &self.extensions,
            callback,
            counters: ScanCounters::default(),
        };
        pass.browse(&self.root_directory, &mut root)?;

        let counters = pass.counters;
        if counters.cancelled {
            warn!(
                root = self.root_directory.path(),
                folders = counters.folders,
                "Asset scan cancelled, returning partial tree"
            );
        }
        info!(
            folders = counters.folders,
            assets = counters.assets,
            skipped = counters.skipped,
            duplicates = counters.duplicates,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Asset tree built"
        );
        Ok(root)
    }
}

/// State of one `build` call.
struct ScanPass<'a, 'cb, F: NodeFactory> {
    factory: &'a mut F,
    extensions: &'a ExtensionMatcher,
    callback: Option<&'cb mut (dyn ScanCallback + 'cb)>,
    counters: ScanCounters,
}

impl<F: NodeFactory> ScanPass<'_, '_, F> {
    fn browse<V: VfsEntry>(
        &mut self,
        folder: &V,
        node: &mut CategoryNode<F::Data>,
    ) -> Result<(), ScanError> {
        if let Some(callback) = self.callback.as_mut() {
            if callback.is_cancelled() {
                self.counters.cancelled = true;
                return Ok(());
            }
            callback.update(&format!("Reading folder: {}", folder.path()));
        }
        self.counters.folders += 1;

        let children = folder.children().map_err(|source| {
            warn!(path = folder.path(), error = %source, "Failed to read folder");
            ScanError::Enumeration {
                path: folder.path().to_string(),
                source,
            }
        })?;

        let mut seen: HashSet<String> = HashSet::new();
        for child in &children {
            if child.is_folder() {
                let mut category = self.factory.create_category_node(node, child.name());
                self.browse(child, &mut category)?;
                node.push(category);
            } else if child.is_file() {
                let Some(base_name) = self.extensions.base_name(child.name()) else {
                    debug!(path = child.path(), "Skipping file without asset extension");
                    self.counters.skipped += 1;
                    continue;
                };
                if !seen.insert(base_name.to_string()) {
                    debug!(path = child.path(), base_name, "Skipping duplicate asset");
                    self.counters.duplicates += 1;
                    continue;
                }
                let asset = self.factory.create_asset_node(node, base_name);
                node.push(asset);
                self.counters.assets += 1;
            }
        }

        node.sort_children();
        Ok(())
    }
}
