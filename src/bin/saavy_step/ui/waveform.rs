//! Oscilloscope of the master output

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Quietest level the title reports; anything below reads as silence.
const FLOOR_DB: f32 = -60.0;

/// Spread the scope samples across a 0..1 time axis.
fn scope_points(samples: &[f32]) -> Vec<(f64, f64)> {
    let len = samples.len().max(1) as f64;
    samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64 / len, sample as f64))
        .collect()
}

fn peak_label(samples: &[f32]) -> String {
    let peak = samples.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
    let db = 20.0 * peak.max(f32::MIN_POSITIVE).log10();
    if db <= FLOOR_DB {
        " Output ".to_string()
    } else {
        format!(" Output  {db:.1} dBFS ")
    }
}

/// Draw the output trace; dimmed while the transport is stopped
pub fn render_waveform(frame: &mut Frame, area: Rect, samples: &[f32], playing: bool) {
    let block = Block::default()
        .title(peak_label(samples))
        .borders(Borders::ALL);

    let trace = if playing { Color::Cyan } else { Color::DarkGray };
    let data = scope_points(samples);
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(trace))
        .data(&data);

    let axis = Style::default().fg(Color::DarkGray);
    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(Axis::default().bounds([0.0, 1.0]).style(axis))
        .y_axis(Axis::default().bounds([-1.0, 1.0]).style(axis));

    frame.render_widget(chart, area);
}
