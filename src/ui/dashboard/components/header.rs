//! Dashboard header component
//!
//! Renders the title and load-cycle gauge

use super::super::state::DashboardState;
use crate::dashboard::DashboardView;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and load-cycle progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(format!(
        "WEATHER DASHBOARD v{}",
        env!("CARGO_PKG_VERSION")
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let location = state.controller.location();
    let (progress_text, gauge_color, progress_percent) = match state.controller.view() {
        DashboardView::Loading => {
            // Loops every 20 ticks; the delay has no measurable progress.
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!("LOADING - {}", location),
                Color::LightBlue,
                progress,
            )
        }
        DashboardView::Display(_) => (format!("UPDATED - {}", location), Color::LightGreen, 100),
        DashboardView::Error(_) => (
            format!("UNAVAILABLE - {}", location),
            Color::LightRed,
            100,
        ),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent.min(100))
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
