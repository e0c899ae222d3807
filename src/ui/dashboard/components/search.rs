//! Location input field

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const PLACEHOLDER: &str = "Enter a city name and press Enter";

pub fn render_search(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let line = if state.input.is_empty() {
        Line::from(vec![
            Span::styled("█", Style::default().fg(Color::Cyan)),
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                state.input.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title("LOCATION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(line).block(block), area);
}
