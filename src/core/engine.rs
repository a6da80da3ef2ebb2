use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use rand::rngs::StdRng;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::core::game::{GameStatus, GameView, PuzzleGame};

/// Why a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    BackToMenu,
    Quit,
}

/// Runs one game: owns its state for the length of the session, forwards keys
/// to the view and actions to the game, and drives timed transitions.
pub struct Engine<G: PuzzleGame, V: GameView<G>> {
    state: G::State,
    view: V,
    settings: G::Settings,
    rng: StdRng,
    tick_rate: Duration,
}

impl<G: PuzzleGame, V: GameView<G>> Engine<G, V> {
    pub fn new(settings: G::Settings, mut rng: StdRng, tick_rate: Duration) -> Self {
        let state = G::new_game(&settings, &mut rng);
        info!(game = G::NAME, "new round");
        Self {
            state,
            view: V::new(),
            settings,
            rng,
            tick_rate,
        }
    }

    pub fn state(&self) -> &G::State {
        &self.state
    }

    /// Throw the current round away and deal a fresh one
    pub fn new_round(&mut self) {
        self.state = G::new_game(&self.settings, &mut self.rng);
        info!(game = G::NAME, "new round");
    }

    /// Handle one key press. Returns `Some` when the session should end.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SessionExit> {
        match key.code {
            KeyCode::Esc => return Some(SessionExit::BackToMenu),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(SessionExit::Quit);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.new_round();
                return None;
            }
            _ => {}
        }

        if let Some(input) = self.view.handle_key(key, &self.state) {
            let before = G::status(&self.state);
            debug!(game = G::NAME, ?input, "action");
            let after = G::handle_input(&mut self.state, input);
            if before != after {
                info!(game = G::NAME, status = ?after, "round finished");
            }
        }
        None
    }

    /// Advance timed transitions by `dt_ms`
    pub fn tick(&mut self, dt_ms: u64) {
        let before = G::status(&self.state);
        G::on_tick(&mut self.state, dt_ms);
        let after = G::status(&self.state);
        if before != after && after != GameStatus::Playing {
            info!(game = G::NAME, status = ?after, "round finished");
        }
    }

    pub fn render(&self, frame: &mut ratatui::Frame) {
        self.view.render(frame, &self.state);
    }

    pub async fn run(mut self, terminal: &mut DefaultTerminal, events: &mut EventStream) -> Result<SessionExit> {
        let mut ticker = tokio::time::interval(self.tick_rate);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| self.render(f)).context("drawing game screen")?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(exit) = self.handle_key(key) {
                            return Ok(exit);
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e).context("reading terminal events"),
                    None => return Ok(SessionExit::Quit),
                },

                // Heartbeat: pending reveals count down here
                _ = ticker.tick() => {
                    let dt = last_tick.elapsed().as_millis() as u64;
                    last_tick = Instant::now();
                    self.tick(dt);
                }
            }
        }
    }
}
