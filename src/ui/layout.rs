//! Layout and chrome for the admission screen

use super::components::{banner_height, BUTTON_HEIGHT, MIN_BANNER_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form column grows
const MAX_FORM_WIDTH: u16 = 60;

/// Height of a bordered single-line input
const FIELD_HEIGHT: u16 = 3;

/// Height of the title block
const HEADER_HEIGHT: u16 = 3;

/// Screen regions of the admission form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub header: Rect,
    pub fields: [Rect; 3],
    pub banner: Rect,
    pub button: Rect,
    pub hint: Rect,
    pub status_bar: Rect,
}

/// Split the screen into a centered form column and a status bar.
///
/// The banner grows to fit `banner` wrapped at the column width, up to the
/// space the rest of the form leaves free.
pub fn create_layout(area: Rect, banner: Option<&str>) -> FormLayout {
    let [body, status_bar] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let width = body.width.min(MAX_FORM_WIDTH);
    let column = Rect {
        x: body.x + (body.width - width) / 2,
        width,
        ..body
    };

    let fixed = HEADER_HEIGHT + 3 * FIELD_HEIGHT + BUTTON_HEIGHT + 1;
    let room = column.height.saturating_sub(fixed).max(MIN_BANNER_HEIGHT);
    let banner_rows = banner
        .map(|message| banner_height(message, width))
        .unwrap_or(MIN_BANNER_HEIGHT)
        .min(room);

    let [header, full_name, father_name, class_grade, banner, button, hint, _] =
        Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(banner_rows),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(column);

    FormLayout {
        header,
        fields: [full_name, father_name, class_grade],
        banner,
        button,
        hint,
        status_bar,
    }
}

/// Draw the title block above the form
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "School Management System",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Student Admission Form",
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the validation hint under the submit button
pub fn draw_hint(frame: &mut Frame, area: Rect, hint: &str) {
    let paragraph = Paragraph::new(Span::styled(hint, Style::default().fg(Color::Yellow)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (marker, color) = match app.backend_reachable {
        Some(true) => ("●", Color::Green),
        Some(false) => ("○", Color::Red),
        None => ("…", Color::Gray),
    };
    let spans = vec![
        Span::styled(
            format!(" Tab:next  Enter:next/submit  {SUBMIT_SHORTCUT}:submit  Esc:quit"),
            Style::default().fg(Color::White),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{marker} {}", app.base_url),
            Style::default().fg(color),
        ),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_fields_in_order() {
        let layout = create_layout(Rect::new(0, 0, 80, 30), None);
        assert!(layout.header.y < layout.fields[0].y);
        assert!(layout.fields[0].y < layout.fields[1].y);
        assert!(layout.fields[1].y < layout.fields[2].y);
        assert!(layout.fields[2].y < layout.banner.y);
        assert!(layout.banner.y < layout.button.y);
        assert_eq!(layout.button.height, BUTTON_HEIGHT);
        assert_eq!(layout.hint.y, layout.button.y + BUTTON_HEIGHT);
        assert_eq!(layout.hint.height, 1);
    }

    #[test]
    fn test_short_banner_keeps_minimum_height() {
        let layout = create_layout(Rect::new(0, 0, 80, 24), Some("Name already exists"));
        assert_eq!(layout.banner.height, MIN_BANNER_HEIGHT);

        let empty = create_layout(Rect::new(0, 0, 80, 24), None);
        assert_eq!(empty.banner.height, MIN_BANNER_HEIGHT);
    }

    #[test]
    fn test_long_banner_grows_and_pushes_button_down() {
        let short = create_layout(Rect::new(0, 0, 80, 24), Some("short"));
        let long = create_layout(Rect::new(0, 0, 80, 24), Some(&"word ".repeat(24)));
        assert_eq!(long.banner.height, 5);
        assert_eq!(long.button.y, short.button.y + 2);
        assert!(long.hint.y < long.status_bar.y);
    }

    #[test]
    fn test_banner_never_overflows_the_screen() {
        let layout = create_layout(Rect::new(0, 0, 80, 24), Some(&"word ".repeat(500)));
        let fixed = HEADER_HEIGHT + 3 * FIELD_HEIGHT + BUTTON_HEIGHT + 1;
        assert_eq!(layout.banner.height, 23 - fixed);
        assert_eq!(layout.hint.y + layout.hint.height, 23);
    }

    #[test]
    fn test_status_bar_is_last_row() {
        let layout = create_layout(Rect::new(0, 0, 80, 30), None);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.width, 80);
    }

    #[test]
    fn test_form_column_is_capped_and_centered() {
        let layout = create_layout(Rect::new(0, 0, 120, 30), None);
        let field = layout.fields[0];
        assert_eq!(field.width, MAX_FORM_WIDTH);
        assert_eq!(field.x, (120 - MAX_FORM_WIDTH) / 2);
    }

    #[test]
    fn test_narrow_terminal_uses_full_width() {
        let layout = create_layout(Rect::new(0, 0, 40, 30), None);
        assert_eq!(layout.fields[0].width, 40);
    }
}
