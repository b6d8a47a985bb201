use asset_browser::tree::{
    compare_nodes, CategoryNode, ExtensionMatcher, Node, PlainNodeFactory, TreeBuilder,
};
use asset_browser::vfs::{MemoryEntry, VfsEntry};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

const EXTENSIONS: [&str; 2] = ["js", "html"];

fn arb_entry() -> impl Strategy<Value = MemoryEntry> {
    let leaf = (
        "[a-cA-C]{1,3}",
        prop::sample::select(vec!["js", "html", "txt", ""]),
    )
        .prop_map(|(base, ext)| {
            if ext.is_empty() {
                MemoryEntry::file(base)
            } else {
                MemoryEntry::file(format!("{}.{}", base, ext))
            }
        });
    leaf.prop_recursive(3, 48, 6, |inner| {
        ("[a-cA-C]{1,3}", prop::collection::vec(inner, 0..6))
            .prop_map(|(name, children)| MemoryEntry::folder(name, children))
    })
}

fn arb_root() -> impl Strategy<Value = MemoryEntry> {
    prop::collection::vec(arb_entry(), 0..8)
        .prop_map(|children| MemoryEntry::folder("root", children))
}

fn assert_sorted_and_unique(node: &CategoryNode) {
    for pair in node.children.windows(2) {
        assert_ne!(
            compare_nodes(&pair[0], &pair[1]),
            Ordering::Greater,
            "{} sorted after {}",
            pair[0].name(),
            pair[1].name()
        );
    }
    let mut assets = HashSet::new();
    for child in &node.children {
        match child {
            Node::Asset(asset) => assert!(assets.insert(asset.name.clone())),
            Node::Category(category) => assert_sorted_and_unique(category),
        }
    }
}

/// Folder count and distinct asset base names per folder, read straight from the VFS.
fn expected_counts(folder: &MemoryEntry, matcher: &ExtensionMatcher) -> (usize, usize) {
    let mut folders = 0;
    let mut assets = 0;
    let mut seen = HashSet::new();
    for child in folder.children().unwrap() {
        if child.is_folder() {
            let (f, a) = expected_counts(&child, matcher);
            folders += f + 1;
            assets += a;
        } else if let Some(base) = matcher.base_name(child.name()) {
            if seen.insert(base.to_string()) {
                assets += 1;
            }
        }
    }
    (folders, assets)
}

proptest! {
    #[test]
    fn prop_children_sorted_and_assets_unique(vfs in arb_root()) {
        let root = TreeBuilder::new(vfs, PlainNodeFactory::new(EXTENSIONS)).build().unwrap();
        assert_sorted_and_unique(&root);
    }

    #[test]
    fn prop_counts_match_vfs(vfs in arb_root()) {
        let matcher =
            ExtensionMatcher::new(Some(EXTENSIONS.iter().map(|e| e.to_string()).collect()));
        let (folders, assets) = expected_counts(&vfs, &matcher);
        let root = TreeBuilder::new(vfs, PlainNodeFactory::new(EXTENSIONS)).build().unwrap();
        let stats = root.stats();
        prop_assert_eq!(stats.categories, folders);
        prop_assert_eq!(stats.assets, assets);
    }

    #[test]
    fn prop_rebuild_is_identical(vfs in arb_root()) {
        let mut builder = TreeBuilder::new(vfs, PlainNodeFactory::any_extension());
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_no_extensions_matched_means_no_assets(vfs in arb_root()) {
        let root = TreeBuilder::new(vfs.clone(), PlainNodeFactory::new(["sample"]))
            .build()
            .unwrap();
        let (folders, _) = expected_counts(&vfs, &ExtensionMatcher::any());
        prop_assert_eq!(root.stats().assets, 0);
        prop_assert_eq!(root.stats().categories, folders);
    }
}
