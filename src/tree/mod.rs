//! Asset tree: node model, factories and the builder that scans a VFS.

pub mod builder;
pub mod callback;
pub mod extension;
pub mod factory;
pub mod node;

pub use builder::TreeBuilder;
pub use callback::{CancelFlag, ScanCallback, ScanProgress};
pub use extension::ExtensionMatcher;
pub use factory::{NodeFactory, PlainNodeFactory};
pub use node::{compare_nodes, AssetNode, CategoryNode, Node, RootNode, TreeStats};
