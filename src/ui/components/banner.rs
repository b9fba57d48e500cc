//! Feedback banner shown after a submission resolves

use crate::state::BannerKind;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a banner holding a single line of text
pub const MIN_BANNER_HEIGHT: u16 = 3;

/// Rows a bordered banner needs to show all of `message` at `width` columns
pub fn banner_height(message: &str, width: u16) -> u16 {
    let inner_width = usize::from(width.saturating_sub(2));
    let lines = wrap_text(message, inner_width).len();
    u16::try_from(lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .max(MIN_BANNER_HEIGHT)
}

/// Render a success or error banner
pub fn render_banner(frame: &mut Frame, area: Rect, kind: BannerKind, message: &str) {
    let color = match kind {
        BannerKind::Success => Color::Green,
        BannerKind::Error => Color::Red,
    };

    let lines: Vec<Line> = wrap_text(message, usize::from(area.width.saturating_sub(2)))
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(paragraph, area);
}

/// Wrap text at word boundaries; words wider than a line are split
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_width) {
                if current_width > 0 && current_width + 1 + piece.len() > max_width {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }
                if current_width > 0 {
                    current_line.push(' ');
                    current_width += 1;
                }
                current_line.extend(piece);
                current_width += piece.len();
            }
        }
        lines.push(current_line);
    }

    lines
}
