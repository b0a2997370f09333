pub mod schema;
pub mod watcher;

pub use schema::{ItemConfig, StyleConfig, ToolbarConfig};
pub use watcher::ConfigWatcher;

use std::path::{Path, PathBuf};
use toolbar_core::{Result, ToolbarError};

/// Load configuration from a TOML file.  Returns `ToolbarConfig::default()`
/// if the file doesn't exist so the toolbar always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<ToolbarConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ToolbarConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;

    parse(&raw)
}

/// Parse a TOML document into a [`ToolbarConfig`].
pub fn parse(raw: &str) -> Result<ToolbarConfig> {
    toml::from_str(raw).map_err(|e| ToolbarError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("toolbar").join("toolbar.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load("/nonexistent/toolbar/toolbar.toml").unwrap();
        assert!(cfg.style.is_none());
        assert!(cfg.scopes.is_empty());
        assert_eq!(cfg.items.len(), 5);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = parse("").unwrap();
        assert!(cfg.style.is_none());
        assert_eq!(cfg.items[0].kind, "undo");
    }

    #[test]
    fn parses_root_style_and_scopes() {
        let cfg = parse(
            r##"
            [style]
            toolbar_height = 44.0
            shadow_color = "#00000033"

            [scopes.editor]
            toolbar_height = 80.0

            [scopes.inspector]
            item_spacing = -4.0
            "##,
        )
        .unwrap();

        let root = cfg.style.unwrap();
        assert_eq!(root.toolbar_height, Some(44.0));
        assert_eq!(root.item_spacing, None);
        assert_eq!(root.shadow_color.as_deref(), Some("#00000033"));

        assert_eq!(cfg.scopes["editor"].toolbar_height, Some(80.0));
        // Negative values are accepted as-is.
        assert_eq!(cfg.scopes["inspector"].item_spacing, Some(-4.0));
    }

    #[test]
    fn parses_items_with_default_width() {
        let cfg = parse(
            r#"
            [[items]]
            kind = "bold"

            [[items]]
            kind = "link"
            width = 48.0
            "#,
        )
        .unwrap();

        assert_eq!(cfg.items, vec![
            ItemConfig::new("bold"),
            ItemConfig { kind: "link".into(), width: 48.0 },
        ]);
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, ToolbarError::Io { .. }));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = parse("[style\ntoolbar_height = 1").unwrap_err();
        assert!(matches!(err, ToolbarError::Config(_)));
    }

    #[test]
    fn default_path_ends_with_toolbar_toml() {
        assert!(default_path().ends_with("toolbar/toolbar.toml"));
    }
}
