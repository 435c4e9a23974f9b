//! saavy-step - two-track step sequencer in the terminal
//!
//! Run with: cargo run --bin saavy-step

mod app;
mod audio;
mod input;
mod settings;
mod ui;

use app::App;
use saavy_step::{EngineConfig, SessionConfig, Track};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Four on the floor with a backbeat to start from
    let config = SessionConfig::new()
        .bpm(SessionConfig::DEFAULT_BPM)
        .step(Track::Bass, 0)
        .step(Track::Bass, 4)
        .step(Track::Bass, 8)
        .step(Track::Bass, 12)
        .step(Track::Snare, 4)
        .step(Track::Snare, 12);
    let engine = EngineConfig::default();

    println!("=== saavy-step ===");
    println!("BPM: {}", config.bpm);
    println!("Master gain: {}", engine.master_gain);
    println!();

    let mut app = App::new(config, engine);
    match app.sample_rate() {
        Some(rate) => println!("Sample rate: {} Hz", rate),
        None => eprintln!("No usable audio output; the grid will run silently"),
    }

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
