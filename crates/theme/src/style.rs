use crate::colors::Color;
use iced::{Shadow, Vector};
use toolbar_config::StyleConfig;

/// Visual settings for a keyboard toolbar.
///
/// A plain value: copying it yields an independent snapshot.  No field is
/// range-checked, so zero or negative sizes reach the renderer unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarStyle {
    /// Height of the toolbar surface.
    pub toolbar_height: f64,
    /// Gap between adjacent toolbar items.
    pub item_spacing: f64,
    /// Color of the toolbar's drop shadow.
    pub shadow_color: Color,
    /// Blur radius of the toolbar's drop shadow.
    pub shadow_radius: f64,
}

impl ToolbarStyle {
    /// The style every toolbar uses when no ancestor overrides it.
    pub const STANDARD: Self = Self {
        toolbar_height: 50.0,
        item_spacing:   15.0,
        shadow_color:   Color::rgba(0.0, 0.0, 0.0, 0.1),
        shadow_radius:  3.0,
    };

    pub const fn new(
        toolbar_height: f64,
        item_spacing: f64,
        shadow_color: Color,
        shadow_radius: f64,
    ) -> Self {
        Self {
            toolbar_height,
            item_spacing,
            shadow_color,
            shadow_radius,
        }
    }

    /// Shared read-only access to [`ToolbarStyle::STANDARD`].
    pub fn standard() -> &'static Self {
        &Self::STANDARD
    }

    /// Build a style from a config block; unset fields keep their defaults.
    ///
    /// An unparsable shadow color falls back to the default shadow color.
    pub fn from_config(cfg: &StyleConfig) -> Self {
        let d = Self::STANDARD;
        let shadow_color = match cfg.shadow_color.as_deref() {
            None => d.shadow_color,
            Some(hex) => Color::from_hex(hex).unwrap_or_else(|| {
                tracing::warn!("Invalid shadow_color '{hex}'; using default.");
                d.shadow_color
            }),
        };

        Self {
            toolbar_height: cfg.toolbar_height.unwrap_or(d.toolbar_height),
            item_spacing:   cfg.item_spacing.unwrap_or(d.item_spacing),
            shadow_color,
            shadow_radius:  cfg.shadow_radius.unwrap_or(d.shadow_radius),
        }
    }

    #[must_use]
    pub fn with_toolbar_height(mut self, toolbar_height: f64) -> Self {
        self.toolbar_height = toolbar_height;
        self
    }

    #[must_use]
    pub fn with_item_spacing(mut self, item_spacing: f64) -> Self {
        self.item_spacing = item_spacing;
        self
    }

    #[must_use]
    pub fn with_shadow_color(mut self, shadow_color: Color) -> Self {
        self.shadow_color = shadow_color;
        self
    }

    #[must_use]
    pub fn with_shadow_radius(mut self, shadow_radius: f64) -> Self {
        self.shadow_radius = shadow_radius;
        self
    }

    /// The drop shadow as Iced draws it: centred under the toolbar, no offset.
    pub fn shadow(&self) -> Shadow {
        Shadow {
            color: self.shadow_color.to_iced(),
            offset: Vector::new(0.0, 0.0),
            blur_radius: self.shadow_radius as f32,
        }
    }
}

impl Default for ToolbarStyle {
    fn default() -> Self {
        Self::STANDARD
    }
}
