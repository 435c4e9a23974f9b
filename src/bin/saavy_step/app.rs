//! App - owns the session and runs the terminal event loop

use std::time::{Duration, Instant};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use rtrb::Consumer;

use saavy_step::{
    engine::{EngineConfig, IntervalScheduler},
    Session, SessionConfig, Track, STEPS,
};

use super::{
    audio::{StreamSink, SCOPE_LEN},
    input::{grid_action, settings_action, Action},
    settings::{nudge_tempo, Settings},
    ui,
};

/// Longest the loop sleeps between redraws (~60fps)
const FRAME: Duration = Duration::from_millis(16);

/// Grid cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub track: Track,
    pub step: usize,
}

impl Cursor {
    fn shift(&mut self, steps: isize, tracks: isize) {
        self.step = (self.step as isize + steps).rem_euclid(STEPS as isize) as usize;

        let count = Track::ALL.len() as isize;
        let row = (self.track.index() as isize + tracks).rem_euclid(count) as usize;
        self.track = Track::ALL[row];
    }
}

pub struct App {
    pub session: Session<IntervalScheduler, StreamSink>,
    pub cursor: Cursor,
    pub settings: Option<Settings>,
    /// Latest samples from the master output for the oscilloscope
    pub scope: Vec<f32>,
    scope_rx: Consumer<f32>,
    started: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(config: SessionConfig, engine: EngineConfig) -> Self {
        let (sink, scope_rx) = StreamSink::open(engine);

        Self {
            session: Session::new(config, IntervalScheduler::new(), sink),
            cursor: Cursor {
                track: Track::Bass,
                step: 0,
            },
            settings: None,
            scope: vec![0.0; SCOPE_LEN],
            scope_rx,
            started: Instant::now(),
            should_quit: false,
        }
    }

    pub fn sample_rate(&self) -> Option<f32> {
        self.session.sink().sample_rate()
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            let now = self.started.elapsed();
            self.session.advance_to(now);

            self.poll_scope();

            terminal
                .draw(|frame| ui::render(frame, self))
                .wrap_err("failed to draw frame")?;

            // Sleep until the next tick is due, a highlight runs out, or a frame passes
            let timeout = self
                .session
                .time_until_next(self.started.elapsed())
                .map_or(FRAME, |due| due.min(FRAME));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let action = match self.settings {
                            Some(_) => settings_action(key),
                            None => grid_action(key),
                        };
                        if let Some(action) = action {
                            // The key may have waited out most of a frame
                            self.session.advance_to(self.started.elapsed());
                            self.handle(action);
                        }
                    }
                }
            }
        }

        self.session.stop();
        Ok(())
    }

    /// Read as many samples as available, keeping the last SCOPE_LEN
    fn poll_scope(&mut self) {
        let before = self.scope.len();
        while let Ok(sample) = self.scope_rx.pop() {
            self.scope.push(sample);
        }

        if self.scope.len() > before && self.scope.len() > SCOPE_LEN {
            let excess = self.scope.len() - SCOPE_LEN;
            self.scope.drain(0..excess);
        }
    }

    fn handle(&mut self, action: Action) {
        match action {
            Action::Session(command) => self.session.apply(command),
            Action::Cursor(steps, tracks) => self.cursor.shift(steps, tracks),
            Action::ToggleCell => {
                self.session.toggle_step(self.cursor.track, self.cursor.step);
            }
            Action::Tempo(delta) => {
                let bpm = nudge_tempo(self.session.tempo(), delta);
                self.session.set_tempo(bpm);
            }
            Action::OpenSettings => self.settings = Some(Settings::new(self.cursor.track)),
            Action::CloseSettings => self.settings = None,
            Action::SelectField(delta) => {
                if let Some(settings) = &mut self.settings {
                    settings.select(delta);
                }
            }
            Action::AdjustField(notches) => {
                if let Some(settings) = &self.settings {
                    let command = settings.adjust(notches, self.session.params());
                    self.session.apply(command);
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }
}
