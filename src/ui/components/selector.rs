//! Horizontal selector row.
//!
//! One line of mutually exclusive options with a `▶` marker on the active
//! one. Used for both the project filter bar and the timeline tabs. Besides
//! the rendered line it reports each option's column span so the caller can
//! register click regions.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::app::ClickAction;
use crate::ui::theme::Palette;

/// One option in a selector row.
#[derive(Debug, Clone)]
pub struct SelectorItem {
    pub label: String,
    pub action: ClickAction,
}

impl SelectorItem {
    pub fn new(label: impl Into<String>, action: ClickAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Build the selector line plus `(x_offset, width, action)` spans for each
/// option, relative to the start of the line.
pub fn build_selector(
    items: &[SelectorItem],
    selected: usize,
    palette: &Palette,
) -> (Line<'static>, Vec<(u16, u16, ClickAction)>) {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut regions = Vec::new();
    let mut x: u16 = 0;

    for (idx, item) in items.iter().enumerate() {
        let is_selected = idx == selected;
        let marker = if is_selected { "▶ " } else { "  " };
        let cell = format!("{marker}{}", item.label);
        let cell_width = cell.width() as u16;

        let style = if is_selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };
        spans.push(Span::styled(cell, style));
        regions.push((x, cell_width, item.action));
        x += cell_width;

        if idx < items.len() - 1 {
            spans.push(Span::raw("   "));
            x += 3;
        }
    }

    (Line::from(spans), regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tabs::TimelineTab;
    use crate::state::theme::ThemeSetting;

    fn items() -> Vec<SelectorItem> {
        vec![
            SelectorItem::new("Experience", ClickAction::TabSelect(TimelineTab::Experience)),
            SelectorItem::new("Education", ClickAction::TabSelect(TimelineTab::Education)),
        ]
    }

    #[test]
    fn test_marker_on_selected_item() {
        let palette = Palette::for_theme(ThemeSetting::Dark);
        let (line, _) = build_selector(&items(), 1, &palette);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        let marker = text.find('▶').unwrap();
        let education = text.find("Education").unwrap();
        let experience = text.find("Experience").unwrap();
        assert!(marker > experience);
        assert!(marker < education);
    }

    #[test]
    fn test_regions_cover_labels_in_order() {
        let palette = Palette::for_theme(ThemeSetting::Dark);
        let (_, regions) = build_selector(&items(), 0, &palette);
        assert_eq!(regions.len(), 2);
        // First option starts at the line start; the second starts after
        // the first cell plus spacing.
        assert_eq!(regions[0].0, 0);
        assert_eq!(regions[1].0, regions[0].1 + 3);
        assert_eq!(
            regions[1].2,
            ClickAction::TabSelect(TimelineTab::Education)
        );
    }
}
