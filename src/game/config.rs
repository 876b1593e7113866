use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Side of one grid cell, in pixels
pub const BLOCK_SIZE: u32 = 20;
/// Number of segments a snake is born with
pub const INIT_SNAKE_SEGMENTS: usize = 3;
/// Pixel margin at both horizontal play-area edges kept free of snakes
/// at startup
pub const INIT_SNAKE_MARGIN: u32 = 100;
/// Speed the session starts at, in ticks per second
pub const INIT_SNAKE_SPEED: u32 = 1;
/// Speed ceiling, in ticks per second
pub const MAX_SNAKE_SPEED: u32 = 30;
/// Maximum number of computer-controlled snakes
pub const MAX_NUM_AI_SNAKES: usize = 3;

pub const DEFAULT_PLAYAREA_WIDTH: u32 = 640;
pub const DEFAULT_PLAYAREA_HEIGHT: u32 = 480;

/// Configuration for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Play area width in pixels, a multiple of BLOCK_SIZE
    pub playarea_width: u32,
    /// Play area height in pixels, a multiple of BLOCK_SIZE
    pub playarea_height: u32,
    /// Number of human players (1 or 2)
    pub num_players: usize,
    /// Number of computer-controlled snakes (0 to MAX_NUM_AI_SNAKES)
    pub num_ai_snakes: usize,
    /// Speed at session start, in ticks per second
    pub initial_speed: u32,
    /// Speed ceiling, in ticks per second
    pub max_speed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playarea_width: DEFAULT_PLAYAREA_WIDTH,
            playarea_height: DEFAULT_PLAYAREA_HEIGHT,
            num_players: 1,
            num_ai_snakes: 0,
            initial_speed: INIT_SNAKE_SPEED,
            max_speed: MAX_SNAKE_SPEED,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration. Dimension and count errors here
    /// are fatal startup errors for the binary.
    pub fn new(
        playarea_width: u32,
        playarea_height: u32,
        num_players: usize,
        num_ai_snakes: usize,
    ) -> Result<Self> {
        ensure!(
            playarea_width > 0 && playarea_height > 0,
            "play area width and height must be positive"
        );
        ensure!(
            playarea_width % BLOCK_SIZE == 0 && playarea_height % BLOCK_SIZE == 0,
            "play area width and height must be multiples of {BLOCK_SIZE}"
        );
        ensure!(
            (1..=2).contains(&num_players),
            "number of players must be 1 or 2"
        );
        ensure!(
            num_ai_snakes <= MAX_NUM_AI_SNAKES,
            "number of AI snakes must be 0 to {MAX_NUM_AI_SNAKES}"
        );

        let config = Self {
            playarea_width,
            playarea_height,
            num_players,
            num_ai_snakes,
            ..Default::default()
        };
        ensure!(
            config.section_grid_width() >= 1,
            "play area of width {playarea_width} is too narrow for {} snakes",
            config.num_snakes()
        );
        ensure!(
            config.grid_height() >= 2 * (INIT_SNAKE_SEGMENTS - 1),
            "play area of height {playarea_height} is too short for initial snakes"
        );
        Ok(config)
    }

    /// Grid width in cells
    pub fn grid_width(&self) -> usize {
        (self.playarea_width / BLOCK_SIZE) as usize
    }

    /// Grid height in cells
    pub fn grid_height(&self) -> usize {
        (self.playarea_height / BLOCK_SIZE) as usize
    }

    /// Total number of snakes in the session
    pub fn num_snakes(&self) -> usize {
        self.num_players + self.num_ai_snakes
    }

    /// Width in cells of one startup placement section. The play area
    /// minus both margins is split into one section per snake.
    pub fn section_grid_width(&self) -> usize {
        let usable = self.playarea_width.saturating_sub(2 * INIT_SNAKE_MARGIN);
        ((usable / self.num_snakes() as u32) / BLOCK_SIZE) as usize
    }

    /// Startup margin width in cells
    pub fn margin_cells(&self) -> usize {
        (INIT_SNAKE_MARGIN / BLOCK_SIZE) as usize
    }
}
