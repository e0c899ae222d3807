//! Loading and error panels

use super::super::utils::spinner_frame;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Spinner plus message, vertically centered.
pub fn render_loading(f: &mut Frame, area: Rect, message: &str, tick: usize) {
    let lines = vec![
        Line::from(Span::styled(
            spinner_frame(tick),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
    ];
    render_centered(f, area, lines, Color::Cyan);
}

/// Error message with the retry control.
pub fn render_error(f: &mut Frame, area: Rect, message: &str, retry_label: &str) {
    let lines = vec![
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("[ {} ]", retry_label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Ctrl+R / F5", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    render_centered(f, area, lines, Color::LightRed);
}

fn render_centered(f: &mut Frame, area: Rect, lines: Vec<Line>, border: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = lines.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(inner.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rows[1],
    );
}
