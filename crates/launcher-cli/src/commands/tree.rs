//! Content tree listing.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use launcher_core::config::AppConfig;
use launcher_core::error::AppError;
use launcher_core::types::TreeNode;
use launcher_storage::{PathGuard, TreeBuilder};

use crate::output::{self, OutputFormat};

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Subtree to list, relative to the content root
    #[arg(default_value = "")]
    pub path: String,

    /// Stop descending below this depth
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// One printed line of the tree
#[derive(Debug, Serialize, Tabled)]
pub struct TreeRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Path")]
    pub path: String,
}

/// Execute the tree command
pub async fn execute(
    args: &TreeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let guard = PathGuard::new(config.paths.content_root())?;
    let target = guard.resolve(&args.path)?;

    let mut limits = config.tree;
    if args.max_depth.is_some() {
        limits.max_depth = args.max_depth;
    }
    let builder = TreeBuilder::new(guard.root()).with_limits(limits);

    let Some(tree) = builder.build(&target) else {
        output::print_warning(&format!("Nothing to list at {}", target.display()));
        return Ok(());
    };

    match format {
        OutputFormat::Json => output::print_item(&tree, format),
        OutputFormat::Table => {
            let mut rows = Vec::with_capacity(tree.count());
            flatten(&tree, 0, &mut rows);
            output::print_list(&rows, format);
        }
    }
    Ok(())
}

/// Depth-first rows with the name indented by depth.
fn flatten(node: &TreeNode, depth: usize, rows: &mut Vec<TreeRow>) {
    let suffix = if node.is_folder() { "/" } else { "" };
    rows.push(TreeRow {
        name: format!("{}{}{}", "  ".repeat(depth), node.name, suffix),
        kind: node.kind.to_string(),
        path: node.path.clone(),
    });
    for child in &node.children {
        flatten(child, depth + 1, rows);
    }
}
