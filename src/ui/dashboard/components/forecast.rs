//! Forecast row
//!
//! One rounded card per forecast day, left to right in day order

use super::super::utils::condition_color;
use crate::dashboard::view::{FORECAST_TITLE, ForecastCard};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_forecast(f: &mut Frame, area: ratatui::layout::Rect, cards: &[ForecastCard]) {
    let outer = Block::default()
        .title(FORECAST_TITLE)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    if cards.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (card, column) in cards.iter().zip(columns.iter()) {
        render_card(f, *column, card);
    }
}

fn render_card(f: &mut Frame, area: ratatui::layout::Rect, card: &ForecastCard) {
    let lines = vec![
        Line::from(Span::styled(
            card.day.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(card.icon.as_str()),
        Line::from(Span::styled(
            card.condition.as_str(),
            Style::default().fg(condition_color(&card.condition)),
        )),
        Line::from(vec![
            Span::styled(
                card.high.as_str(),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(card.low.as_str(), Style::default().fg(Color::LightBlue)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(paragraph, area);
}
