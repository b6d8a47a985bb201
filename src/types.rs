//! Core types shared across the asset tree.

use serde::{Deserialize, Serialize};

/// Kind of a tree node.
///
/// The derived ordering puts categories before assets, which is the order
/// siblings are sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Category,
    Asset,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Category => "category",
            NodeKind::Asset => "asset",
        }
    }
}
