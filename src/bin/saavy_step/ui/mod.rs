//! TUI for saavy-step
//!
//! Step grid, transport bar and an oscilloscope of the master output.

mod grid;
mod settings;
mod transport;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::App;

use grid::render_grid;
use settings::render_settings;
use transport::{render_transport, AudioStats};
use waveform::render_waveform;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: transport, grid, waveform, status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Transport bar
            Constraint::Length(6), // Step grid
            Constraint::Min(6),    // Waveform
            Constraint::Length(1), // Status / help bar
        ])
        .split(area);

    let stats = AudioStats::from_buffer(&app.scope);
    render_transport(frame, chunks[0], &app.session, app.sample_rate(), &stats);
    render_grid(frame, chunks[1], &app.session, app.cursor);
    render_waveform(frame, chunks[2], &app.scope, app.session.is_playing());
    render_status(frame, chunks[3], app);

    if let Some(settings) = &app.settings {
        render_settings(frame, area, settings, app.session.params());
    }
}

/// Audio problems take the status line; otherwise show the key help
fn render_status(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let line = match app.session.audio_error() {
        Some(err) => Line::from(Span::styled(
            format!(" {err} (press Space to retry)"),
            Style::default().fg(Color::Red),
        )),
        None if app.settings.is_some() => Line::from(Span::styled(
            " [↑↓] Field  [←→] Adjust  [PgUp/PgDn] Coarse  [Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(Span::styled(
            " [Space] Play/Pause  [Esc] Stop  [Ctrl+C] Clear  [Enter] Toggle  [+/-] Tempo  [M] Settings  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}
