//! The contact section: intro, the four form fields, and the submit row.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::{App, ClickAction, Focus};
use crate::state::form::FieldKind;
use crate::state::nav::SectionId;
use crate::ui::components::input_field::{build_input_field, InputFieldConfig};
use crate::ui::helpers::{spinner_frame, wrap};
use crate::ui::page::{heading, PageAction, SectionBlock};
use crate::ui::theme::Palette;

pub const REVEAL_ID: &str = "contact";

const INTRO: &str = "Whether it's a project, a question, or just to say hi, \
                     my inbox is always open.";

const SUBMIT_LABEL: &str = "[ Send Message ]";
const SUCCESS_BANNER: &str = "✓ Message sent successfully! I'll get back to you soon.";

pub fn build(app: &App, width: usize, palette: &Palette) -> SectionBlock {
    let mut lines = heading("Contact", palette);
    let mut actions = Vec::new();

    let body_start = lines.len();
    let revealed = app.reveal.is_revealed(REVEAL_ID);
    let intro_style = if revealed {
        Style::default().fg(palette.dim)
    } else {
        Style::default().fg(palette.border)
    };
    for row in wrap(INTRO, width) {
        lines.push(Line::from(Span::styled(row, intro_style)));
    }
    lines.push(Line::default());

    for kind in FieldKind::ALL {
        let state = app.form.field(kind);
        let config = InputFieldConfig {
            label: kind.label(),
            value: &state.value,
            focused: app.focus == Focus::Field(kind),
            error: state.error,
            placeholder: kind.placeholder(),
        };
        let field_lines = build_input_field(&config, width, palette);
        // The value row sits right under the label row.
        actions.push(PageAction {
            row: lines.len() + 1,
            x_offset: 0,
            width: width as u16,
            action: ClickAction::FocusField(kind),
        });
        lines.extend(field_lines);
        lines.push(Line::default());
    }

    let submit_row = lines.len();
    if app.form.is_submitting() {
        // No click region while the send is in flight.
        lines.push(Line::from(Span::styled(
            format!("{} Sending...", spinner_frame(app.tick_count)),
            Style::default().fg(palette.dim),
        )));
    } else {
        let style = if app.focus == Focus::Submit {
            Style::default()
                .fg(palette.accent)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.accent)
        };
        lines.push(Line::from(Span::styled(SUBMIT_LABEL, style)));
        actions.push(PageAction {
            row: submit_row,
            x_offset: 0,
            width: SUBMIT_LABEL.chars().count() as u16,
            action: ClickAction::Submit,
        });
    }

    if app.form.success_visible() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            SUCCESS_BANNER,
            Style::default().fg(palette.success),
        )));
    }

    let body_height = lines.len() - body_start;
    lines.push(Line::default());
    lines.push(Line::default());

    SectionBlock {
        id: SectionId::Contact,
        lines,
        targets: vec![(REVEAL_ID.to_string(), body_start, body_height)],
        actions,
    }
}
