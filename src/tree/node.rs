//! Asset tree node types and sibling ordering.

use crate::types::NodeKind;
use serde::Serialize;
use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

/// One logical asset: a file base name with its extension stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetNode<D = ()> {
    pub name: String,
    /// Caller state attached by the node factory.
    #[serde(skip)]
    pub data: D,
}

impl<D> AssetNode<D> {
    pub fn new(name: impl Into<String>, data: D) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// A folder in the asset tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode<D = ()> {
    pub name: String,
    pub children: Vec<Node<D>>,
    /// Caller state attached by the node factory.
    #[serde(skip)]
    pub data: D,
}

/// Asset tree node: either a category or an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node<D = ()> {
    Category(CategoryNode<D>),
    Asset(AssetNode<D>),
}

impl<D> Node<D> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Category(_) => NodeKind::Category,
            Node::Asset(_) => NodeKind::Asset,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Category(c) => &c.name,
            Node::Asset(a) => &a.name,
        }
    }

    pub fn is_category(&self) -> bool {
        self.kind() == NodeKind::Category
    }

    pub fn is_asset(&self) -> bool {
        self.kind() == NodeKind::Asset
    }

    pub fn as_category(&self) -> Option<&CategoryNode<D>> {
        match self {
            Node::Category(c) => Some(c),
            Node::Asset(_) => None,
        }
    }

    pub fn as_asset(&self) -> Option<&AssetNode<D>> {
        match self {
            Node::Asset(a) => Some(a),
            Node::Category(_) => None,
        }
    }
}

impl<D> From<CategoryNode<D>> for Node<D> {
    fn from(node: CategoryNode<D>) -> Self {
        Node::Category(node)
    }
}

impl<D> From<AssetNode<D>> for Node<D> {
    fn from(node: AssetNode<D>) -> Self {
        Node::Asset(node)
    }
}

/// Compare two strings ignoring case, char by char.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Sibling order: categories before assets, then case-insensitive by name.
pub fn compare_nodes<D>(a: &Node<D>, b: &Node<D>) -> Ordering {
    a.kind()
        .cmp(&b.kind())
        .then_with(|| compare_ignore_case(a.name(), b.name()))
}

/// Counts over a scanned tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub categories: usize,
    pub assets: usize,
    /// Nesting depth of the deepest category; zero when there are none.
    pub max_depth: usize,
}

impl<D> CategoryNode<D> {
    pub fn new(name: impl Into<String>, data: D) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            data,
        }
    }

    pub fn push(&mut self, node: impl Into<Node<D>>) {
        self.children.push(node.into());
    }

    /// Stable sort of the direct children by [`compare_nodes`].
    pub fn sort_children(&mut self) {
        self.children.sort_by(compare_nodes);
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Node<D>> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// Resolve a `/`-separated path of category names. An empty path is `self`.
    pub fn find_category(&self, path: &str) -> Option<&CategoryNode<D>> {
        let mut current = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .children
                .iter()
                .filter_map(Node::as_category)
                .find(|c| c.name == segment)?;
        }
        Some(current)
    }

    /// Resolve `<category path>/<asset name>` to an asset.
    pub fn find_asset(&self, path: &str) -> Option<&AssetNode<D>> {
        let path = path.trim_end_matches('/');
        let (parent, name) = match path.rsplit_once('/') {
            Some((parent, name)) => (parent, name),
            None => ("", path),
        };
        self.find_category(parent)?
            .children
            .iter()
            .filter_map(Node::as_asset)
            .find(|a| a.name == name)
    }

    /// Every asset below this category with the `/`-joined path of the
    /// category that holds it, in depth-first child order.
    pub fn assets(&self) -> Vec<(String, &AssetNode<D>)> {
        let mut out = Vec::new();
        collect_assets(self, "", &mut out);
        out
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        collect_stats(self, 0, &mut stats);
        stats
    }
}

fn collect_assets<'a, D>(
    node: &'a CategoryNode<D>,
    prefix: &str,
    out: &mut Vec<(String, &'a AssetNode<D>)>,
) {
    for child in &node.children {
        match child {
            Node::Asset(asset) => out.push((prefix.to_string(), asset)),
            Node::Category(category) => {
                let path = if prefix.is_empty() {
                    category.name.clone()
                } else {
                    format!("{}/{}", prefix, category.name)
                };
                collect_assets(category, &path, out);
            }
        }
    }
}

fn collect_stats<D>(node: &CategoryNode<D>, depth: usize, stats: &mut TreeStats) {
    for child in &node.children {
        match child {
            Node::Asset(_) => stats.assets += 1,
            Node::Category(category) => {
                stats.categories += 1;
                stats.max_depth = stats.max_depth.max(depth + 1);
                collect_stats(category, depth + 1, stats);
            }
        }
    }
}

/// Root of a scanned tree: an unnamed category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RootNode<D = ()> {
    category: CategoryNode<D>,
}

impl<D> RootNode<D> {
    pub fn new(data: D) -> Self {
        Self {
            category: CategoryNode::new("", data),
        }
    }

    pub fn into_category(self) -> CategoryNode<D> {
        self.category
    }
}

impl<D: Default> Default for RootNode<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D> Deref for RootNode<D> {
    type Target = CategoryNode<D>;

    fn deref(&self) -> &Self::Target {
        &self.category
    }
}

impl<D> DerefMut for RootNode<D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.category
    }
}
