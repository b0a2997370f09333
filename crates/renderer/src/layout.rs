use iced::{widget::container, Background, Shadow};
use toolbar_config::ItemConfig;
use toolbar_theme::{Color, ToolbarStyle};

/// Horizontal placement of one toolbar item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemFrame {
    pub x:     f64,
    pub width: f64,
}

/// Metrics a toolbar needs to draw itself under a given style.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarLayout {
    pub height:      f64,
    pub items:       Vec<ItemFrame>,
    /// Distance from the first item's leading edge to the last item's trailing edge.
    pub total_width: f64,
    pub shadow:      Shadow,
}

impl ToolbarLayout {
    /// Lay items out left to right, `item_spacing` apart.
    ///
    /// Style values are used as given; negative spacing makes items overlap.
    pub fn compute(style: &ToolbarStyle, item_widths: impl IntoIterator<Item = f64>) -> Self {
        let mut items = Vec::new();
        let mut x = 0.0;
        for width in item_widths {
            if !items.is_empty() {
                x += style.item_spacing;
            }
            items.push(ItemFrame { x, width });
            x += width;
        }

        Self {
            height: style.toolbar_height,
            items,
            total_width: x,
            shadow: style.shadow(),
        }
    }

    pub fn from_items(style: &ToolbarStyle, items: &[ItemConfig]) -> Self {
        Self::compute(style, items.iter().map(|item| item.width))
    }
}

/// Container style for the toolbar surface: `background` fill plus the
/// style's drop shadow.
///
/// This is what an Iced toolbar view passes to `container(..).style(..)`;
/// the `toolbar` CLI only prints metrics and does not draw.
pub fn surface_style(style: &ToolbarStyle, background: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background.to_iced())),
        shadow: style.shadow(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout() {
        let layout = ToolbarLayout::compute(&ToolbarStyle::STANDARD, [30.0, 30.0, 40.0]);
        assert_eq!(layout.height, 50.0);
        assert_eq!(layout.items, vec![
            ItemFrame { x: 0.0, width: 30.0 },
            ItemFrame { x: 45.0, width: 30.0 },
            ItemFrame { x: 90.0, width: 40.0 },
        ]);
        assert_eq!(layout.total_width, 130.0);
        assert_eq!(layout.shadow.blur_radius, 3.0);
    }

    #[test]
    fn empty_toolbar_has_no_width() {
        let layout = ToolbarLayout::compute(&ToolbarStyle::STANDARD, Vec::<f64>::new());
        assert!(layout.items.is_empty());
        assert_eq!(layout.total_width, 0.0);
        assert_eq!(layout.height, 50.0);
    }

    #[test]
    fn negative_spacing_is_passed_through() {
        let style = ToolbarStyle::STANDARD.with_item_spacing(-10.0);
        let layout = ToolbarLayout::compute(&style, [20.0, 20.0]);
        assert_eq!(layout.items[1].x, 10.0);
        assert_eq!(layout.total_width, 30.0);
    }

    #[test]
    fn from_items_uses_configured_widths() {
        let items = [ItemConfig::new("bold"), ItemConfig { kind: "link".into(), width: 50.0 }];
        let layout = ToolbarLayout::from_items(&ToolbarStyle::STANDARD.with_item_spacing(0.0), &items);
        assert_eq!(layout.total_width, 80.0);
    }

    #[test]
    fn surface_carries_background_and_shadow() {
        let style = ToolbarStyle::STANDARD.with_shadow_radius(8.0);
        let surface = surface_style(&style, Color::WHITE);
        assert_eq!(surface.background, Some(Background::Color(iced::Color::WHITE)));
        assert_eq!(surface.shadow, style.shadow());
    }
}
