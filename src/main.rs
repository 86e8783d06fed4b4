//! Terminal blockfall runner.
//!
//! Uses crossterm for input and the framebuffer renderer from `blockfall-term`.
//! Flow: title screen, play, game-over overlay, then restart or quit.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::config::Config;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::event_log::{EventLog, EventRecord};
use blockfall::input::{handle_key_event, handle_menu_key, should_quit, MenuCommand};
use blockfall::term::{FrameBuffer, GameView, Screen, TerminalRenderer, Viewport};
use blockfall::types::{GameEvent, FRAME_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env().apply_args(&args)?;

    // Open before entering raw mode so a bad path is reported on a normal terminal.
    let log = match config.event_log.as_deref() {
        Some(path) => Some(EventLog::open(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| Host::new(config, log).run(&mut term));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

struct Host {
    config: Config,
    log: Option<EventLog>,
    screen: Screen,
    session: Option<GameState>,
    /// Sessions started so far
    sessions: u32,
}

impl Host {
    fn new(config: Config, log: Option<EventLog>) -> Self {
        Self {
            config,
            log,
            screen: Screen::Title,
            session: None,
            sessions: 0,
        }
    }

    fn run(mut self, term: &mut TerminalRenderer) -> Result<()> {
        let view = GameView::default();
        let frame = Duration::from_millis(FRAME_MS as u64);
        let mut fb = FrameBuffer::new(0, 0);
        let mut snap = GameSnapshot::default();
        let mut last_frame = Instant::now();

        loop {
            match &self.session {
                Some(game) => game.snapshot_into(&mut snap),
                None => snap.clear(),
            }
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, self.screen, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;

            // Input with timeout until next frame.
            let timeout = frame.saturating_sub(last_frame.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if !self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
            }

            let elapsed = last_frame.elapsed();
            if elapsed >= frame {
                last_frame = Instant::now();
                if let Some(game) = self.session.as_mut() {
                    game.tick(elapsed_ms(elapsed));
                }
            }

            self.drain_events(term)?;
        }

        if let Some(log) = self.log.as_mut() {
            log.record(&EventRecord::quit(self.sessions));
        }
        Ok(())
    }

    /// Returns false when the player quits.
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        match self.screen {
            Screen::Playing => {
                if should_quit(key) {
                    return false;
                }
                if let (Some(game), Some(action)) = (self.session.as_mut(), handle_key_event(key)) {
                    game.apply_action(action);
                }
                true
            }
            Screen::Title | Screen::GameOver => match handle_menu_key(key) {
                Some(MenuCommand::Confirm) => {
                    self.start_session();
                    true
                }
                Some(MenuCommand::Quit) => false,
                None => true,
            },
        }
    }

    /// Replace any finished session with a fresh one.
    fn start_session(&mut self) {
        let seed = self.config.seed.wrapping_add(self.sessions);
        self.sessions += 1;
        self.session = Some(GameState::with_seed(seed));
        self.screen = Screen::Playing;
    }

    fn drain_events(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let Some(game) = self.session.as_mut() else {
            return Ok(());
        };
        for event in game.take_events() {
            if let Some(log) = self.log.as_mut() {
                log.record(&EventRecord::from_event(self.sessions, &event));
            }
            match event {
                GameEvent::SessionStarted => {}
                GameEvent::LinesCleared { .. } => {
                    if self.config.bell {
                        term.bell()?;
                    }
                }
                GameEvent::GameOver { .. } => {
                    self.screen = Screen::GameOver;
                    if self.config.bell {
                        term.bell()?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Whole milliseconds, saturating so a long stall cannot wrap around.
fn elapsed_ms(elapsed: Duration) -> u32 {
    u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_ms_truncates_sub_millisecond() {
        assert_eq!(elapsed_ms(Duration::from_micros(16_900)), 16);
    }

    #[test]
    fn elapsed_ms_saturates_on_long_stall() {
        let stall = Duration::from_millis(u64::from(u32::MAX) + 5);
        assert_eq!(elapsed_ms(stall), u32::MAX);
    }
}
