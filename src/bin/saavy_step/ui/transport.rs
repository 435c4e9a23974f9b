//! Transport bar widget - shows BPM, play state, position, and audio stats

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use saavy_step::{engine::{Scheduler, VoiceSink}, Session, STEPS};

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// Render the transport bar
pub fn render_transport<S: Scheduler, K: VoiceSink>(
    frame: &mut Frame,
    area: Rect,
    session: &Session<S, K>,
    sample_rate: Option<f32>,
    audio_stats: &AudioStats,
) {
    let block = Block::default()
        .title(" saavy-step ")
        .borders(Borders::ALL);

    let playing = session.is_playing();
    let play_symbol = if playing { "▶" } else { "⏸" };
    let play_state_str = if playing { "Playing" } else { "Paused" };

    let step = session.current_step();
    let beat = step / 4 + 1;

    let rate = match sample_rate {
        Some(rate) => format!("{:.1}kHz  ", rate / 1000.0),
        None => "no device  ".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" BPM: {}  ", session.tempo()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{} {}  ", play_symbol, play_state_str),
            Style::default().fg(if playing { Color::Green } else { Color::Yellow }),
        ),
        Span::styled(
            format!("Step {:>2}/{} | Beat {}  ", step + 1, STEPS, beat),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(rate, Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", audio_stats.peak, audio_stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
