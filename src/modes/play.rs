use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval_at, sleep};

use crate::game::{Engine, GameConfig, GameSession, Heading, Intent};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// How long the game-over screen stays up before the program exits
const GAME_OVER_DELAY: Duration = Duration::from_secs(5);

/// The interactive play loop: one simulation tick per rendered frame,
/// paced by the session's current speed.
pub struct PlayMode {
    engine: Engine,
    session: GameSession,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    /// Latest turn request per player since the previous tick
    pending: Vec<Option<Heading>>,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        let num_players = config.num_players;
        let mut engine = Engine::new(config);
        let session = engine.new_session();

        Self {
            engine,
            session,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(num_players),
            pending: vec![None; num_players],
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut speed = self.session.speed;
        let mut tick_timer = interval_at(Instant::now() + tick_duration(speed), tick_duration(speed));

        // Show the starting board before anything moves
        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // One simulation tick, then one frame
                _ = tick_timer.tick() => {
                    let intents: Vec<Intent> = self
                        .pending
                        .iter_mut()
                        .map(|slot| slot.take().map(Intent::Turn).unwrap_or(Intent::Keep))
                        .collect();

                    let outcome = self.engine.tick(&mut self.session, &intents);
                    self.metrics.update();
                    self.draw(terminal)?;

                    if outcome.session_over {
                        sleep(GAME_OVER_DELAY).await;
                        break;
                    }

                    // Eating food speeds the game up; re-pace the ticks
                    if self.session.speed != speed {
                        speed = self.session.speed;
                        tick_timer =
                            interval_at(Instant::now() + tick_duration(speed), tick_duration(speed));
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn { player, heading } => {
                    if player < self.pending.len() {
                        self.pending[player] = Some(heading);
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.session, &self.metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Tick pacing for a speed given in ticks per second
fn tick_duration(speed: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(speed.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_mode_initialization() {
        let config = GameConfig::new(640, 480, 2, 1).unwrap();
        let mode = PlayMode::new(config);

        assert!(!mode.session.game_over);
        assert_eq!(mode.session.snakes.len(), 3);
        assert_eq!(mode.pending.len(), 2);
        assert_eq!(mode.session.speed, 1);
    }

    #[test]
    fn test_tick_duration_follows_speed() {
        assert_eq!(tick_duration(1), Duration::from_millis(1000));
        assert_eq!(tick_duration(4), Duration::from_millis(250));
        assert_eq!(tick_duration(30), Duration::from_millis(33));
        assert_eq!(tick_duration(0), Duration::from_millis(1000));
    }
}
