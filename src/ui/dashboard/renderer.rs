//! Dashboard main renderer

use super::components::{current, footer, forecast, header, logs, search, status};
use super::state::DashboardState;
use crate::dashboard::Panel;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(22),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    search::render_search(f, main_chunks[1], state);
    render_display_region(f, main_chunks[2], state);
    logs::render_logs_panel(f, main_chunks[3], state);
    footer::render_footer(f, main_chunks[4]);
}

/// The display region is replaced wholesale by whichever panel is current.
fn render_display_region(f: &mut Frame, area: Rect, state: &DashboardState) {
    match state.controller.panel() {
        Panel::Loading { message } => status::render_loading(f, area, &message, state.tick),
        Panel::Error {
            message,
            retry_label,
        } => status::render_error(f, area, &message, &retry_label),
        Panel::Weather(panel) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(8), Constraint::Fill(1)])
                .split(area);
            current::render_current(f, chunks[0], &panel);
            forecast::render_forecast(f, chunks[1], &panel.forecast);
        }
    }
}
