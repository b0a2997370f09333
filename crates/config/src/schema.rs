use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration structure parsed from `toolbar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Style applied at the root of the view tree.  `None` = built-in default.
    pub style: Option<StyleConfig>,
    /// Subtree overrides (key = view node name, e.g. `"editor"`).
    pub scopes: HashMap<String, StyleConfig>,
    /// Items shown on the keyboard toolbar, left to right.
    pub items: Vec<ItemConfig>,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            style: None,
            scopes: HashMap::new(),
            items: ["undo", "redo", "bold", "italic", "underline"]
                .into_iter()
                .map(ItemConfig::new)
                .collect(),
        }
    }
}

/// A toolbar style block; unset fields fall back to the built-in default.
///
/// Values are not range-checked: zero or negative sizes are passed through.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    /// Toolbar height in logical pixels.
    pub toolbar_height: Option<f64>,
    /// Gap between adjacent toolbar items.
    pub item_spacing: Option<f64>,
    /// Shadow color (hex, e.g. `"#0000001a"`).
    pub shadow_color: Option<String>,
    /// Shadow blur radius.
    pub shadow_radius: Option<f64>,
}

/// Config block for a single toolbar item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemConfig {
    /// Item identifier, e.g. `"bold"`.
    pub kind: String,
    /// Item width in logical pixels.
    #[serde(default = "default_item_width")]
    pub width: f64,
}

impl ItemConfig {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            width: default_item_width(),
        }
    }
}

fn default_item_width() -> f64 {
    30.0
}
