use asset_browser::error::ScanError;
use asset_browser::tree::{Node, PlainNodeFactory, ScanProgress, TreeBuilder};
use asset_browser::vfs::{LocalEntry, MemoryEntry};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "sample").unwrap();
}

fn sample_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "js/Hello.js");
    write(temp.path(), "js/Hello.html");
    write(temp.path(), "js/Controls/Grid.js");
    write(temp.path(), "js/Controls/grid-notes.md");
    write(temp.path(), "Zeta/about.txt");
    write(temp.path(), "alpha.js");
    write(temp.path(), ".git/config.js");
    fs::create_dir_all(temp.path().join("empty")).unwrap();
    temp
}

#[test]
fn local_scan_builds_sorted_tree() {
    let temp = sample_dir();
    let entry = LocalEntry::open(temp.path()).unwrap();
    let root = TreeBuilder::new(entry, PlainNodeFactory::new(["js", "html"]))
        .build()
        .unwrap();

    let names: Vec<&str> = root.children.iter().map(Node::name).collect();
    assert_eq!(names, vec!["empty", "js", "Zeta", "alpha"]);

    let js = root.find_category("js").unwrap();
    let js_names: Vec<&str> = js.children.iter().map(Node::name).collect();
    assert_eq!(js_names, vec!["Controls", "Hello"]);

    let controls = root.find_category("js/Controls").unwrap();
    assert_eq!(controls.children.len(), 1);
    assert!(root.find_asset("js/Controls/Grid").is_some());
    assert!(root.find_category("Zeta").unwrap().children.is_empty());
    assert!(root.find_category(".git").is_none());
}

#[test]
fn local_scan_includes_hidden_when_asked() {
    let temp = sample_dir();
    let entry = LocalEntry::open(temp.path()).unwrap().include_hidden(true);
    let root = TreeBuilder::new(entry, PlainNodeFactory::new(["js"]))
        .build()
        .unwrap();
    assert!(root.find_asset(".git/config").is_some());
}

#[test]
fn local_scan_reports_each_folder() {
    let temp = sample_dir();
    let entry = LocalEntry::open(temp.path()).unwrap();
    let mut progress = ScanProgress::new();
    TreeBuilder::new(entry, PlainNodeFactory::new(["js"]))
        .build_with_callback(&mut progress)
        .unwrap();
    // root, js, js/Controls, Zeta, empty
    assert_eq!(progress.folders_read(), 5);
    assert!(progress.last_message().unwrap().starts_with("Reading folder: "));
}

#[test]
fn local_scan_matches_memory_scan() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "b/one.js");
    write(temp.path(), "a/two.js");
    write(temp.path(), "three.js");

    let local = TreeBuilder::new(
        LocalEntry::open(temp.path()).unwrap(),
        PlainNodeFactory::new(["js"]),
    )
    .build()
    .unwrap();

    let memory = TreeBuilder::new(
        MemoryEntry::folder(
            "root",
            vec![
                MemoryEntry::file("three.js"),
                MemoryEntry::folder("a", vec![MemoryEntry::file("two.js")]),
                MemoryEntry::folder("b", vec![MemoryEntry::file("one.js")]),
            ],
        ),
        PlainNodeFactory::new(["js"]),
    )
    .build()
    .unwrap();

    assert_eq!(local, memory);
}

#[cfg(unix)]
#[test]
fn local_scan_ignores_symlinks() {
    let temp = sample_dir();
    std::os::unix::fs::symlink(temp.path().join("js"), temp.path().join("linked")).unwrap();
    std::os::unix::fs::symlink(
        temp.path().join("alpha.js"),
        temp.path().join("linked-alpha.js"),
    )
    .unwrap();

    let entry = LocalEntry::open(temp.path()).unwrap();
    let root = TreeBuilder::new(entry, PlainNodeFactory::new(["js"]))
        .build()
        .unwrap();
    assert!(root.find_category("linked").is_none());
    assert!(root.find_asset("linked-alpha").is_none());
}

#[test]
fn memory_scan_failure_returns_no_tree() {
    let vfs = MemoryEntry::folder(
        "samples",
        vec![
            MemoryEntry::folder("ok", vec![MemoryEntry::file("a.js")]),
            MemoryEntry::folder(
                "nested",
                vec![MemoryEntry::folder("deep", vec![MemoryEntry::failing_folder("locked")])],
            ),
        ],
    );
    let result = TreeBuilder::new(vfs, PlainNodeFactory::new(["js"])).build();
    match result {
        Err(ScanError::Enumeration { path, .. }) => assert_eq!(path, "samples/nested/deep/locked"),
        Ok(_) => panic!("expected enumeration failure"),
    }
}
