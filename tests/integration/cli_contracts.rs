use asset_browser::error::ApiError;
use asset_browser::tooling::cli::{Cli, CliContext, Commands, ConfigCommands, ScanArgs};
use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "sample").unwrap();
}

fn sample_root() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "js/Hello.js");
    write(temp.path(), "js/Hello.html");
    write(temp.path(), "js/Controls/Grid.js");
    write(temp.path(), "css/theme.css");
    write(temp.path(), "README.txt");
    write(temp.path(), "notes.md");
    temp
}

fn tree_command(format: &str) -> Commands {
    Commands::Tree {
        scan: ScanArgs::default(),
        format: format.to_string(),
        color: false,
    }
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["asset-browser", "tree"],
        vec!["asset-browser", "--root", "samples", "tree", "--format", "json"],
        vec!["asset-browser", "tree", "--ext", "js", "--ext", "html"],
        vec!["asset-browser", "list", "--any-extension"],
        vec!["asset-browser", "stats", "--include-hidden", "--format", "json"],
        vec!["asset-browser", "stats", "--color"],
        vec!["asset-browser", "--log-level", "debug", "config", "show"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_ext_with_any_extension() {
    let parsed = Cli::try_parse_from(["asset-browser", "tree", "--ext", "js", "--any-extension"]);
    assert!(parsed.is_err());
}

#[test]
fn parse_repeated_ext_keeps_order() {
    let cli = Cli::try_parse_from(["asset-browser", "list", "--ext", "sample", "--ext", "snippet"])
        .unwrap();
    match cli.command {
        Commands::List { scan, .. } => assert_eq!(scan.extensions, vec!["sample", "snippet"]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn tree_text_output() {
    let temp = sample_root();
    let context = CliContext::new(temp.path().to_path_buf(), None).unwrap();
    let output = context.execute(&tree_command("text")).unwrap();
    let expected = "\
css/
└── theme
js/
├── Controls/
│   └── Grid
└── Hello
README
";
    assert_eq!(output, expected);
}

#[test]
fn tree_json_output() {
    let temp = sample_root();
    let context = CliContext::new(temp.path().to_path_buf(), None).unwrap();
    let output = context.execute(&tree_command("json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["children"][0]["kind"], "category");
    assert_eq!(json["children"][0]["name"], "css");
    assert_eq!(json["children"][2]["kind"], "asset");
    assert_eq!(json["children"][2]["name"], "README");
}

#[test]
fn list_and_stats_json_output() {
    let temp = sample_root();
    let context = CliContext::new(temp.path().to_path_buf(), None).unwrap();

    let list = context
        .execute(&Commands::List {
            scan: ScanArgs {
                extensions: vec!["js".to_string()],
                ..ScanArgs::default()
            },
            format: "json".to_string(),
        })
        .unwrap();
    let rows: serde_json::Value = serde_json::from_str(&list).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["category"], "js/Controls");
    assert_eq!(rows[0]["name"], "Grid");

    let stats = context
        .execute(&Commands::Stats {
            scan: ScanArgs {
                any_extension: true,
                ..ScanArgs::default()
            },
            format: "json".to_string(),
            color: false,
        })
        .unwrap();
    let stats: serde_json::Value = serde_json::from_str(&stats).unwrap();
    assert_eq!(stats["categories"], 3);
    assert_eq!(stats["assets"], 5);
    assert_eq!(stats["max_depth"], 2);
}

#[test]
fn stats_color_flag_styles_heading() {
    let temp = sample_root();
    let context = CliContext::new(temp.path().to_path_buf(), None).unwrap();
    let stats = |color| {
        context
            .execute(&Commands::Stats {
                scan: ScanArgs::default(),
                format: "text".to_string(),
                color,
            })
            .unwrap()
    };

    let plain = stats(false);
    assert!(plain.starts_with("Asset tree\n"));
    assert!(plain.contains("  Assets: 4\n"));

    let styled = stats(true);
    assert!(styled.starts_with('\u{1b}'));
    assert!(styled.contains("  Assets: 4\n"));
}

#[test]
fn root_config_file_changes_extensions() {
    let temp = sample_root();
    fs::write(
        temp.path().join(".asset-browser.toml"),
        "[scan]\nextensions = [\"md\"]\n",
    )
    .unwrap();
    let context = CliContext::new(temp.path().to_path_buf(), None).unwrap();
    let output = context.execute(&tree_command("text")).unwrap();
    assert_eq!(output, "css/\njs/\n└── Controls/\nnotes\n");

    let shown = context
        .execute(&Commands::Config {
            command: ConfigCommands::Show,
        })
        .unwrap();
    assert!(shown.contains("[scan]"));
    assert!(shown.contains("\"md\""));
}

#[test]
fn explicit_config_file_is_required() {
    let temp = sample_root();
    let result = CliContext::new(
        temp.path().to_path_buf(),
        Some(temp.path().join("missing.toml")),
    );
    assert!(matches!(result, Err(ApiError::Config(_))));
}

#[test]
fn missing_root_is_reported() {
    let temp = TempDir::new().unwrap();
    let result = CliContext::new(temp.path().join("nope"), None);
    assert!(matches!(result, Err(ApiError::PathNotFound(_))));
}

#[test]
fn invalid_format_is_rejected() {
    let temp = sample_root();
    let context = CliContext::new(temp.path().to_path_buf(), None).unwrap();
    let result = context.execute(&tree_command("yaml"));
    assert!(matches!(result, Err(ApiError::InvalidArgument(_))));
}

#[test]
fn file_root_is_rejected() {
    let temp = sample_root();
    let context = CliContext::new(temp.path().join("notes.md"), None).unwrap();
    let result = context.execute(&tree_command("text"));
    assert!(matches!(result, Err(ApiError::InvalidArgument(_))));
}
