//! The projects section: filter bar plus staggered project cards.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::{App, ClickAction};
use crate::state::nav::SectionId;
use crate::ui::components::project_card::build_card;
use crate::ui::components::selector::{build_selector, SelectorItem};
use crate::ui::page::{heading, PageAction, SectionBlock};
use crate::ui::theme::Palette;

pub const REVEAL_ID: &str = "projects";

pub fn build(app: &App, width: usize, palette: &Palette) -> SectionBlock {
    let mut lines = heading("Projects", palette);
    let mut actions = Vec::new();

    let items: Vec<SelectorItem> = app
        .filter
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| SelectorItem::new(option.label(), ClickAction::FilterSelect(i)))
        .collect();
    let (selector_line, regions) = build_selector(&items, app.filter.selected_index(), palette);
    let selector_row = lines.len();
    lines.push(selector_line);
    for (x_offset, region_width, action) in regions {
        actions.push(PageAction {
            row: selector_row,
            x_offset,
            width: region_width,
            action,
        });
    }
    lines.push(Line::default());

    let body_start = lines.len();
    let revealed = app.reveal.is_revealed(REVEAL_ID);
    let visible = app.visible_projects();
    if visible.is_empty() {
        // Empty feed or an unmatched category.
        lines.push(Line::from(Span::styled(
            "Nothing to show here.",
            Style::default().fg(palette.dim),
        )));
    }
    for (index, project) in visible.iter().enumerate() {
        let shown = revealed && app.filter.card_shown(index, app.tick_count);
        lines.extend(build_card(project, width, palette, shown));
    }
    let body_height = (lines.len() - body_start).max(1);

    lines.push(Line::default());

    SectionBlock {
        id: SectionId::Projects,
        lines,
        targets: vec![(REVEAL_ID.to_string(), body_start, body_height)],
        actions,
    }
}
