//! Step grid widget - one row per track, position marker underneath

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use saavy_step::{
    engine::{Scheduler, VoiceSink},
    Session, Track, STEPS,
};

use crate::app::Cursor;

const LABEL_WIDTH: usize = 8;
const CELL_WIDTH: usize = 3;

/// Render the step grid with the playing cells lit
pub fn render_grid<S: Scheduler, K: VoiceSink>(
    frame: &mut Frame,
    area: Rect,
    session: &Session<S, K>,
    cursor: Cursor,
) {
    let block = Block::default().title(" Steps ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || (inner.width as usize) < LABEL_WIDTH + STEPS * CELL_WIDTH {
        return;
    }

    let mut lines = Vec::with_capacity(Track::ALL.len() + 2);

    // Step numbers, beats brighter
    let mut header = vec![Span::raw(" ".repeat(LABEL_WIDTH))];
    for step in 0..STEPS {
        let color = if step % 4 == 0 { Color::White } else { Color::DarkGray };
        header.push(Span::styled(
            format!("{:<width$}", step + 1, width = CELL_WIDTH),
            Style::default().fg(color),
        ));
    }
    lines.push(Line::from(header));

    for track in Track::ALL {
        let mut spans = vec![Span::styled(
            format!("{:<width$}", track.name(), width = LABEL_WIDTH),
            Style::default().fg(Color::White),
        )];

        for step in 0..STEPS {
            spans.push(cell(session, cursor, track, step));
        }

        lines.push(Line::from(spans));
    }

    // Position indicator under the step that plays next
    let marker_at = LABEL_WIDTH + session.current_step() * CELL_WIDTH;
    lines.push(Line::from(Span::styled(
        format!("{}▲", " ".repeat(marker_at)),
        Style::default().fg(Color::Yellow),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn cell<S: Scheduler, K: VoiceSink>(
    session: &Session<S, K>,
    cursor: Cursor,
    track: Track,
    step: usize,
) -> Span<'static> {
    let active = session.step(track, step);
    let symbol = if active { "■  " } else { "·  " };

    let mut style = Style::default().fg(if active { Color::Cyan } else { Color::DarkGray });
    if session.is_lit(track, step) {
        style = style.fg(Color::Black).bg(Color::Yellow);
    }
    if cursor.track == track && cursor.step == step {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Span::styled(symbol, style)
}
