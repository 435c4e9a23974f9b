//! Settings modal - sliders for the selected track

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Gauge},
    Frame,
};

use saavy_step::sequencing::VoiceParams;

use crate::settings::Settings;

const MODAL_WIDTH: u16 = 44;

/// Render the modal centred over `area`
pub fn render_settings(frame: &mut Frame, area: Rect, settings: &Settings, params: &VoiceParams) {
    let fields = settings.fields();
    let height = fields.len() as u16 * 3 + 2;
    let modal = centered(area, MODAL_WIDTH, height);

    let block = Block::default()
        .title(format!(" {} settings ", settings.track.name()))
        .borders(Borders::ALL);
    let inner = block.inner(modal);

    frame.render_widget(Clear, modal);
    frame.render_widget(block, modal);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(fields.iter().map(|_| Constraint::Length(3)))
        .split(inner);

    for (&field, &row) in fields.iter().zip(rows.iter()) {
        let selected = field == settings.selected();
        let color = if selected { Color::Cyan } else { Color::DarkGray };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(format!(" {} ", field.label(settings.track)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .gauge_style(Style::default().fg(color))
            .ratio(settings.position(field, params))
            .label(settings.display(field, params));

        frame.render_widget(gauge, row);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
