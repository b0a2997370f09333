//! toolbar — resolves keyboard toolbar styles across a view tree.
//!
//! Run with:  `RUST_LOG=info toolbar [CONFIG] [--watch]`

use anyhow::Result;
use std::path::PathBuf;
use toolbar_config::{ConfigWatcher, ToolbarConfig};
use toolbar_renderer::{ToolbarLayout, ViewNode};
use toolbar_theme::{StyleEnv, ToolbarStyle};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("toolbar v{} starting", env!("CARGO_PKG_VERSION"));

    let mut path = None;
    let mut watch = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--watch" => watch = true,
            other => path = Some(PathBuf::from(other)),
        }
    }
    let path = path.unwrap_or_else(toolbar_config::default_path);

    report(&toolbar_config::load(&path)?);

    if watch {
        let (watcher, mut rx) = ConfigWatcher::spawn(&path);
        tracing::info!("Reloading on changes to {}", watcher.path().display());
        while let Some(config) = rx.recv().await {
            report(&config);
        }
    }

    Ok(())
}

/// The window layout the toolbars live in.
fn view_tree(config: &ToolbarConfig) -> ViewNode {
    let mut root = ViewNode::new("window")
        .child(ViewNode::new("editor").child(ViewNode::new("keyboard_toolbar")))
        .child(ViewNode::new("inspector").child(ViewNode::new("inspector_toolbar")));

    if let Some(style) = &config.style {
        root = root.toolbar_style(ToolbarStyle::from_config(style));
    }

    let matched = root.apply_scopes(&config.scopes);
    for name in config.scopes.keys().filter(|name| !matched.contains(name.as_str())) {
        tracing::warn!("Style scope '{name}' matched no view");
    }
    root
}

/// Print the resolved style and layout of every toolbar in the tree.
fn report(config: &ToolbarConfig) {
    view_tree(config).visit(&StyleEnv::new(), &mut |node, env, depth| {
        let style = env.resolve();
        let indent = "  ".repeat(depth);
        if !node.children().is_empty() {
            println!("{indent}{}", node.name());
            return;
        }

        let layout = ToolbarLayout::from_items(&style, &config.items);
        println!(
            "{indent}{}: height={} spacing={} shadow_radius={} shadow_alpha={:.2} width={} ({} overrides)",
            node.name(),
            layout.height,
            style.item_spacing,
            style.shadow_radius,
            style.shadow_color.a,
            layout.total_width,
            env.depth(),
        );
    });
}
