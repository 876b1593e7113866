use rand::rngs::ThreadRng;
use rand::Rng;

use super::ai;
use super::config::GameConfig;
use super::heading::Intent;
use super::session::GameSession;
use super::spawner;

/// What happened during one simulation tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// Whether any snake ate the food this tick
    pub food_eaten: bool,
    /// Indices of snakes destroyed this tick
    pub destroyed: Vec<usize>,
    /// Whether the session ended this tick (all player snakes dead)
    pub session_over: bool,
}

/// The engine that advances a session one tick at a time.
///
/// Owns the configuration and the random source used for placement, food
/// spawning and the AI tie-break shuffle, so a seeded engine replays a
/// session exactly.
pub struct Engine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl Engine<ThreadRng> {
    /// Create an engine with the thread-local random source
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine with an explicit random source
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Create a fresh session from this engine's configuration
    pub fn new_session(&mut self) -> GameSession {
        GameSession::new(&self.config, &mut self.rng)
    }

    /// Execute one tick of the simulation.
    ///
    /// `intents` carries one entry per human player. Per-tick sequence:
    /// merge player and computer intents into headings, then move every
    /// live snake in index order, checking each candidate head against
    /// the grid before committing it. A snake whose candidate cell is a
    /// wall or an occupied cell is destroyed on the spot. Because each
    /// committed head occupies its cell before the next snake moves,
    /// lower-indexed snakes win contested cells and the loser dies
    /// against the freshly occupied cell. Food respawns after all snakes
    /// have moved; the session ends once no player snake remains.
    pub fn tick(&mut self, session: &mut GameSession, intents: &[Intent]) -> TickOutcome {
        let mut outcome = TickOutcome {
            food_eaten: false,
            destroyed: Vec::new(),
            session_over: session.game_over,
        };
        if session.game_over {
            return outcome;
        }

        // Player turn requests, ignoring 180-degree reversals
        for (i, intent) in intents.iter().take(session.num_players).enumerate() {
            if let Intent::Turn(heading) = intent {
                let snake = &mut session.snakes[i];
                if snake.is_alive() && !snake.heading.is_opposite(*heading) {
                    snake.heading = *heading;
                }
            }
        }

        // Computer snakes steer themselves
        for i in session.num_players..session.snakes.len() {
            if let Some(head) = session.snakes[i].head() {
                session.snakes[i].heading = ai::next_heading(
                    &session.grid,
                    head,
                    session.snakes[i].heading,
                    session.food,
                    &mut self.rng,
                );
            }
        }

        for i in 0..session.snakes.len() {
            let head = match session.snakes[i].head() {
                Some(head) => head,
                None => continue,
            };

            let target = head.moved_in(session.snakes[i].heading);
            if !session.grid.is_unoccupied(target) {
                session.destroy_snake(i);
                outcome.destroyed.push(i);
                continue;
            }

            if session.advance_snake(i) {
                outcome.food_eaten = true;
                session.speed = (session.speed + 1).min(self.config.max_speed);
            }
            session.grid.occupy(target, i);
        }

        if outcome.food_eaten {
            // On a (degenerate) fully occupied grid the food simply stays
            // where it was.
            if let Some(food) = spawner::spawn(&session.grid, &mut self.rng) {
                session.food = food;
            }
        }

        if !session.players_alive() {
            session.game_over = true;
            outcome.session_over = true;
        }

        outcome
    }
}
