//! Format scanned trees as text, tables, or JSON.

use crate::error::ApiError;
use crate::tree::{CategoryNode, Node, TreeStats};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// Render a tree with box-drawing connectors. Categories end with `/`.
pub fn format_tree_text<D>(root: &CategoryNode<D>, color: bool) -> String {
    let mut out = String::new();
    if root.children.is_empty() {
        out.push_str("(no categories or assets)\n");
        return out;
    }
    for child in &root.children {
        push_node_line(&mut out, child, "", color);
        if let Node::Category(category) = child {
            push_children(&mut out, category, "", color);
        }
    }
    out
}

fn push_children<D>(out: &mut String, node: &CategoryNode<D>, prefix: &str, color: bool) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let last = i + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        push_node_line(out, child, &format!("{}{}", prefix, connector), color);
        if let Node::Category(category) = child {
            let nested = format!("{}{}", prefix, if last { "    " } else { "│   " });
            push_children(out, category, &nested, color);
        }
    }
}

fn push_node_line<D>(out: &mut String, node: &Node<D>, prefix: &str, color: bool) {
    out.push_str(prefix);
    match node {
        Node::Category(category) => {
            let label = format!("{}/", category.name);
            if color {
                out.push_str(&format!("{}", label.blue().bold()));
            } else {
                out.push_str(&label);
            }
        }
        Node::Asset(asset) => out.push_str(&asset.name),
    }
    out.push('\n');
}

/// One asset with the category path that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRow {
    pub category: String,
    pub name: String,
}

pub fn asset_rows<D>(root: &CategoryNode<D>) -> Vec<AssetRow> {
    root.assets()
        .into_iter()
        .map(|(category, asset)| AssetRow {
            category,
            name: asset.name.clone(),
        })
        .collect()
}

/// Format assets as a two-column table.
pub fn format_asset_table(rows: &[AssetRow]) -> String {
    if rows.is_empty() {
        return "No assets found.\n".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Category", "Asset"]);
    for row in rows {
        let category = if row.category.is_empty() {
            "/".to_string()
        } else {
            row.category.clone()
        };
        table.add_row(vec![category, row.name.clone()]);
    }
    format!("{}\n", table)
}

/// Scan summary for the `stats` command.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub root: String,
    #[serde(flatten)]
    pub stats: TreeStats,
}

pub fn format_stats_text(report: &StatsReport, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Asset tree", color)
    ));
    out.push_str(&format!("  Root: {}\n", report.root));
    out.push_str(&format!("  Categories: {}\n", report.stats.categories));
    out.push_str(&format!("  Assets: {}\n", report.stats.assets));
    out.push_str(&format!("  Max depth: {}\n", report.stats.max_depth));
    out
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::Serialization(e.to_string()))
}
