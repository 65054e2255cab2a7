//! Project card rendering.
//!
//! Each card is a fixed block of lines whose height depends only on the
//! record and the width, never on its shown state, so the page geometry
//! stays stable while cards stagger in. A card that has not yet entered
//! (stagger pending) renders fully dimmed; the transition to shown is a
//! pure style change.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{category_label, ProjectRecord};
use crate::ui::helpers::wrap;
use crate::ui::theme::Palette;

const BODY_INDENT: &str = "   ";

/// Build the card block: title row, wrapped description, tags, links, and
/// a trailing blank separator.
pub fn build_card(
    project: &ProjectRecord,
    width: usize,
    palette: &Palette,
    shown: bool,
) -> Vec<Line<'static>> {
    let title_style = if shown {
        Style::default()
            .fg(palette.fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    let accent_style = if shown {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    let dim_style = Style::default().fg(palette.dim);

    let mut lines = Vec::new();

    let mut title_spans = vec![
        Span::styled(format!("{}  ", project.image), title_style),
        Span::styled(project.title.clone(), title_style),
        Span::styled(
            format!("  · {}", category_label(&project.category)),
            accent_style,
        ),
    ];
    if project.featured {
        title_spans.push(Span::styled(" ★", accent_style));
    }
    lines.push(Line::from(title_spans));

    let body_width = width.saturating_sub(BODY_INDENT.len());
    for row in wrap(&project.description, body_width) {
        lines.push(Line::from(Span::styled(
            format!("{BODY_INDENT}{row}"),
            dim_style,
        )));
    }

    if !project.tags.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{BODY_INDENT}{}", project.tags.join(" · ")),
            accent_style,
        )));
    }

    let mut links = format!("{BODY_INDENT}{}", project.github_url);
    if let Some(live) = &project.live_url {
        links.push_str("   ");
        links.push_str(live);
    }
    lines.push(Line::from(Span::styled(links, dim_style)));

    lines.push(Line::default());
    lines
}
