//! Virtual page assembly.
//!
//! The portfolio is one tall column of sections. Section builders emit
//! plain [`Line`]s plus page-relative reveal targets and click regions;
//! this module stitches them together, records where each section landed
//! (the geometry the scroll logic consumes), and draws the visible window.

use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, ClickAction, PageLayout};
use crate::state::nav::{SectionBounds, SectionId};
use crate::state::reveal::RevealTarget;
use crate::ui::layout::LayoutContext;
use crate::ui::sections;
use crate::ui::theme::Palette;

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// A clickable region inside the page, positioned by page row and by
/// column offset within the content column.
#[derive(Debug, Clone)]
pub struct PageAction {
    pub row: usize,
    pub x_offset: u16,
    pub width: u16,
    pub action: ClickAction,
}

/// Output of one section builder. Rows in `targets` and `actions` are
/// relative to the section start.
#[derive(Debug, Clone)]
pub struct SectionBlock {
    pub id: SectionId,
    pub lines: Vec<Line<'static>>,
    /// (reveal id, relative top, height)
    pub targets: Vec<(String, usize, usize)>,
    pub actions: Vec<PageAction>,
}

/// The assembled page for one frame.
#[derive(Debug, Clone)]
pub struct BuiltPage {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<SectionBounds>,
    pub targets: Vec<RevealTarget>,
    pub actions: Vec<PageAction>,
}

/// Standard section heading: an edge-marked title plus a blank line.
pub fn heading(title: &str, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("▍ {title}"),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ]
}

/// Build the whole page at the current content width.
pub fn build(app: &App, ctx: &LayoutContext, palette: &Palette) -> BuiltPage {
    let width = ctx.content_width() as usize;
    let blocks = vec![
        sections::hero::build(app, width, palette),
        sections::about::build(app, width, palette),
        sections::projects::build(app, width, palette),
        sections::timeline::build(app, width, palette),
        sections::contact::build(app, width, palette),
    ];

    let mut page = BuiltPage {
        lines: Vec::new(),
        sections: Vec::new(),
        targets: Vec::new(),
        actions: Vec::new(),
    };

    for block in blocks {
        let top = page.lines.len();
        let height = block.lines.len();
        page.sections.push(SectionBounds {
            id: block.id,
            top,
            height,
        });
        for (id, rel_top, target_height) in block.targets {
            page.targets
                .push(RevealTarget::new(id, top + rel_top, target_height));
        }
        for mut action in block.actions {
            action.row += top;
            page.actions.push(action);
        }
        page.lines.extend(block.lines);
    }

    page.lines.extend(sections::footer::build(width, palette));
    page
}

/// The geometry snapshot stored on the [`App`] for the scroll logic.
pub fn layout_of(page: &BuiltPage) -> PageLayout {
    PageLayout {
        sections: page.sections.clone(),
        targets: page.targets.clone(),
        total_rows: page.lines.len(),
    }
}

/// Draw the window of the page at the current scroll offset and register
/// the click regions that landed inside it.
pub fn draw(frame: &mut Frame, area: Rect, app: &mut App, built: &BuiltPage, ctx: &LayoutContext) {
    let rows = area.height as usize;
    let start = app.scroll.min(built.lines.len());
    let end = (start + rows).min(built.lines.len());
    let visible: Vec<Line> = built.lines[start..end].to_vec();

    let content = Rect {
        x: area.x + ctx.content_x(),
        y: area.y,
        width: ctx.content_width(),
        height: area.height,
    };
    frame.render_widget(Paragraph::new(Text::from(visible)), content);

    for action in &built.actions {
        if action.row >= start && action.row < end {
            let region = Rect {
                x: content.x + action.x_offset,
                y: area.y + (action.row - start) as u16,
                width: action.width.min(content.width.saturating_sub(action.x_offset)),
                height: 1,
            };
            app.hits.register(region, action.action);
        }
    }
}
