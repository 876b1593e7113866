use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Heading;

/// Result of interpreting one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A turn request for the given player slot
    Turn { player: usize, heading: Heading },
    Quit,
    None,
}

/// Maps key events to per-player turn intents.
///
/// Player one steers with the arrow keys. Player two steers with WASD,
/// which is only live in two-player sessions.
pub struct InputHandler {
    num_players: usize,
}

impl InputHandler {
    pub fn new(num_players: usize) -> Self {
        Self { num_players }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Player one - arrow keys
            KeyCode::Up => KeyAction::Turn {
                player: 0,
                heading: Heading::North,
            },
            KeyCode::Down => KeyAction::Turn {
                player: 0,
                heading: Heading::South,
            },
            KeyCode::Left => KeyAction::Turn {
                player: 0,
                heading: Heading::West,
            },
            KeyCode::Right => KeyAction::Turn {
                player: 0,
                heading: Heading::East,
            },

            // Player two - WASD, two-player sessions only
            KeyCode::Char('w') | KeyCode::Char('W') if self.num_players > 1 => KeyAction::Turn {
                player: 1,
                heading: Heading::North,
            },
            KeyCode::Char('s') | KeyCode::Char('S') if self.num_players > 1 => KeyAction::Turn {
                player: 1,
                heading: Heading::South,
            },
            KeyCode::Char('a') | KeyCode::Char('A') if self.num_players > 1 => KeyAction::Turn {
                player: 1,
                heading: Heading::West,
            },
            KeyCode::Char('d') | KeyCode::Char('D') if self.num_players > 1 => KeyAction::Turn {
                player: 1,
                heading: Heading::East,
            },

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}
