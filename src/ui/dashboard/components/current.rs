//! Current conditions card

use super::super::utils::condition_color;
use crate::dashboard::view::WeatherPanel;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the summary (left) and the detail list (right).
pub fn render_current(f: &mut Frame, area: ratatui::layout::Rect, panel: &WeatherPanel) {
    let accent = condition_color(&panel.condition);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let summary_lines = vec![
        Line::from(vec![
            Span::styled(
                panel.title.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(panel.pictogram),
        ]),
        Line::from(Span::styled(
            panel.temperature.as_str(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            panel.condition.as_str(),
            Style::default().fg(accent),
        )),
        Line::from(Span::styled(
            panel.feels_like.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let summary = Paragraph::new(summary_lines)
        .block(
            Block::default()
                .title("NOW")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(summary, chunks[0]);

    let detail_lines: Vec<Line> = panel
        .details
        .iter()
        .map(|detail| {
            Line::from(vec![
                Span::styled(format!("{}: ", detail.label), Style::default().fg(Color::Gray)),
                Span::styled(
                    detail.value.as_str(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let details = Paragraph::new(detail_lines)
        .block(
            Block::default()
                .title("DETAILS")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(details, chunks[1]);
}
