//! Contact form input field.
//!
//! Rendered as part of the page's line flow: a label line, a value line
//! with a leading edge bar and a caret when focused, and an inline error
//! line when the field failed validation.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::helpers::tail_fit;
use crate::ui::theme::Palette;

/// Configuration for one rendered input field.
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    pub error: Option<&'a str>,
    pub placeholder: &'a str,
}

/// Rows the field will occupy: label + value, plus an error line when set.
pub fn input_field_height(config: &InputFieldConfig) -> usize {
    if config.error.is_some() {
        3
    } else {
        2
    }
}

/// Build the field's lines. `width` is the full content width available;
/// long values are truncated from the front so the edited tail stays
/// visible.
pub fn build_input_field(
    config: &InputFieldConfig,
    width: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(3);

    let label_style = if config.focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    lines.push(Line::from(Span::styled(
        config.label.to_string(),
        label_style,
    )));

    let edge_style = if config.focused {
        Style::default().fg(palette.accent)
    } else if config.error.is_some() {
        Style::default().fg(palette.error)
    } else {
        Style::default().fg(palette.border)
    };
    let mut value_spans = vec![Span::styled("▎ ", edge_style)];

    // Edge bar (2) plus caret (1).
    let text_budget = width.saturating_sub(3);
    if config.value.is_empty() && !config.focused {
        value_spans.push(Span::styled(
            config.placeholder.to_string(),
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        value_spans.push(Span::styled(
            tail_fit(config.value, text_budget),
            Style::default().fg(palette.fg),
        ));
    }
    if config.focused {
        value_spans.push(Span::styled("▌", Style::default().fg(palette.accent)));
    }
    lines.push(Line::from(value_spans));

    if let Some(error) = config.error {
        lines.push(Line::from(Span::styled(
            format!("  ✗ {error}"),
            Style::default().fg(palette.error),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::theme::ThemeSetting;

    fn config<'a>() -> InputFieldConfig<'a> {
        InputFieldConfig {
            label: "Name",
            value: "",
            focused: false,
            error: None,
            placeholder: "Your name",
        }
    }

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_height_matches_built_lines() {
        let palette = Palette::for_theme(ThemeSetting::Dark);
        let mut config = config();
        assert_eq!(
            build_input_field(&config, 60, &palette).len(),
            input_field_height(&config)
        );
        config.error = Some("bad");
        assert_eq!(
            build_input_field(&config, 60, &palette).len(),
            input_field_height(&config)
        );
    }

    #[test]
    fn test_placeholder_shown_when_empty_and_unfocused() {
        let palette = Palette::for_theme(ThemeSetting::Dark);
        let lines = build_input_field(&config(), 60, &palette);
        assert!(text_of(&lines).contains("Your name"));
    }

    #[test]
    fn test_caret_shown_when_focused() {
        let palette = Palette::for_theme(ThemeSetting::Dark);
        let mut config = config();
        config.focused = true;
        config.value = "Ada";
        let text = text_of(&build_input_field(&config, 60, &palette));
        assert!(text.contains("Ada▌"));
        assert!(!text.contains("Your name"));
    }

    #[test]
    fn test_error_line_rendered() {
        let palette = Palette::for_theme(ThemeSetting::Dark);
        let mut config = config();
        config.error = Some("Please enter your full name (min 2 characters)");
        let text = text_of(&build_input_field(&config, 60, &palette));
        assert!(text.contains("min 2 characters"));
    }
}
