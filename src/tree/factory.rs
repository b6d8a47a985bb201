//! Node factories.
//!
//! The builder never constructs category or asset nodes itself; it asks a
//! [`NodeFactory`], which lets callers attach their own state to every node.

use super::node::{AssetNode, CategoryNode};

/// Creates tree nodes and names the file extensions that count as assets.
pub trait NodeFactory {
    /// Caller state carried by every node.
    type Data;

    /// Recognized asset extensions in match priority order, or `None` to
    /// accept any extension. Read once when a builder is created.
    fn asset_extensions(&self) -> Option<Vec<String>>;

    fn create_category_node(
        &mut self,
        parent: &CategoryNode<Self::Data>,
        name: &str,
    ) -> CategoryNode<Self::Data>;

    fn create_asset_node(
        &mut self,
        parent: &CategoryNode<Self::Data>,
        base_name: &str,
    ) -> AssetNode<Self::Data>;
}

impl<F: NodeFactory + ?Sized> NodeFactory for &mut F {
    type Data = F::Data;

    fn asset_extensions(&self) -> Option<Vec<String>> {
        (**self).asset_extensions()
    }

    fn create_category_node(
        &mut self,
        parent: &CategoryNode<Self::Data>,
        name: &str,
    ) -> CategoryNode<Self::Data> {
        (**self).create_category_node(parent, name)
    }

    fn create_asset_node(
        &mut self,
        parent: &CategoryNode<Self::Data>,
        base_name: &str,
    ) -> AssetNode<Self::Data> {
        (**self).create_asset_node(parent, base_name)
    }
}

/// Factory producing nodes without caller state.
#[derive(Debug, Clone, Default)]
pub struct PlainNodeFactory {
    extensions: Option<Vec<String>>,
}

impl PlainNodeFactory {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: Some(extensions.into_iter().map(Into::into).collect()),
        }
    }

    /// Factory that treats every file with an extension as an asset.
    pub fn any_extension() -> Self {
        Self { extensions: None }
    }
}

impl NodeFactory for PlainNodeFactory {
    type Data = ();

    fn asset_extensions(&self) -> Option<Vec<String>> {
        self.extensions.clone()
    }

    fn create_category_node(&mut self, _parent: &CategoryNode, name: &str) -> CategoryNode {
        CategoryNode::new(name, ())
    }

    fn create_asset_node(&mut self, _parent: &CategoryNode, base_name: &str) -> AssetNode {
        AssetNode::new(base_name, ())
    }
}
