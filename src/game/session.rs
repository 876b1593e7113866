use rand::Rng;

use super::config::{GameConfig, INIT_SNAKE_SEGMENTS};
use super::grid::{Grid, Position};
use super::snake::{Snake, SnakeColor, SnakeRole};
use super::spawner;

const PLAYER_COLORS: [SnakeColor; 2] = [SnakeColor::White, SnakeColor::Grey];
const AI_COLORS: [SnakeColor; 3] = [SnakeColor::Gold, SnakeColor::Goldenrod, SnakeColor::Khaki];

/// Live state of one game session: the grid, every snake, the food and
/// the current speed.
///
/// Snakes are identified everywhere by their index in `snakes`. Human
/// players come first, computer snakes after them. The grid invariant is
/// that a cell holds `Some(i)` exactly when snake `i`'s body contains
/// that coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub grid: Grid,
    pub snakes: Vec<Snake>,
    /// The single food item currently on the board
    pub food: Position,
    /// Current speed in ticks per second
    pub speed: u32,
    pub num_players: usize,
    pub game_over: bool,
}

impl GameSession {
    /// Create a session with all snakes placed and the first food item
    /// spawned.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let mut grid = Grid::new(config.grid_width(), config.grid_height());
        let snakes = place_snakes(config, &mut grid, rng);

        // Placement occupies a handful of cells at most; validation keeps
        // the grid far larger than that.
        let food = spawner::spawn(&grid, rng).expect("grid has a free cell for the initial food");

        Self {
            grid,
            snakes,
            food,
            speed: config.initial_speed,
            num_players: config.num_players,
            game_over: false,
        }
    }

    /// Move snake `index` one cell along its current heading. The new
    /// head is pushed unconditionally; when it lands on the food the tail
    /// is kept (net growth of one segment) and true is returned,
    /// otherwise the tail cell is freed and popped.
    ///
    /// Safety of the move is the engine's concern and must be checked
    /// before calling; this only performs the geometry.
    pub fn advance_snake(&mut self, index: usize) -> bool {
        let new_head = match self.snakes[index].head() {
            Some(head) => head.moved_in(self.snakes[index].heading),
            None => return false,
        };

        let ate_food = new_head == self.food;

        let snake = &mut self.snakes[index];
        snake.body.push_front(new_head);
        if !ate_food {
            if let Some(tail) = snake.body.pop_back() {
                self.grid.clear(tail);
            }
        }

        ate_food
    }

    /// Permanently destroy a snake: free every cell it occupies and empty
    /// its segment list. A destroyed snake is never revived.
    pub fn destroy_snake(&mut self, index: usize) {
        while let Some(segment) = self.snakes[index].body.pop_back() {
            self.grid.clear(segment);
        }
    }

    /// True while at least one human player snake is alive
    pub fn players_alive(&self) -> bool {
        self.snakes[..self.num_players]
            .iter()
            .any(|snake| snake.is_alive())
    }

    /// Number of snakes still on the board
    pub fn live_snake_count(&self) -> usize {
        self.snakes.iter().filter(|snake| snake.is_alive()).count()
    }
}

/// Place all snakes for a new session.
///
/// The play-area width minus both margins is split into one section per
/// snake. The first player gets the rightmost section, the second player
/// the leftmost, and computer snakes fill the remaining sections left to
/// right, so nobody starts close to anybody else. Head cells are chosen
/// uniformly within each section; bodies extend vertically away from the
/// nearer horizontal edge so no newborn snake touches a boundary.
fn place_snakes<R: Rng>(config: &GameConfig, grid: &mut Grid, rng: &mut R) -> Vec<Snake> {
    let num_snakes = config.num_snakes();
    let margin = config.margin_cells() as i32;
    let section_width = config.section_grid_width();
    let grid_height = config.grid_height() as i32;

    let mut snakes = Vec::with_capacity(num_snakes);
    for i in 0..num_snakes {
        let column = rng.gen_range(0..section_width) as i32;
        let row = rng.gen_range(0..grid_height);
        let section = section_index(i, config, num_snakes) as i32;
        let head = Position::new(margin + section * section_width as i32 + column, row);
        let row_step = if row >= grid_height / 2 { -1 } else { 1 };

        let (color, role) = color_and_role(i, config);
        let snake = Snake::new(head, INIT_SNAKE_SEGMENTS, row_step, color, role);
        for segment in &snake.body {
            grid.occupy(*segment, i);
        }
        snakes.push(snake);
    }

    snakes
}

fn section_index(i: usize, config: &GameConfig, num_snakes: usize) -> usize {
    if i == 0 {
        // First player, rightmost section
        num_snakes - 1
    } else if i == 1 && config.num_players == 2 {
        // Second player, leftmost section
        0
    } else {
        // Computer snakes fill the rest left to right
        i - 1
    }
}

fn color_and_role(i: usize, config: &GameConfig) -> (SnakeColor, SnakeRole) {
    if i < config.num_players {
        (PLAYER_COLORS[i], SnakeRole::Player)
    } else {
        (AI_COLORS[i - config.num_players], SnakeRole::Ai)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn new_session(config: &GameConfig, seed: u64) -> GameSession {
        let mut rng = StdRng::seed_from_u64(seed);
        GameSession::new(config, &mut rng)
    }

    /// Every cell claimed in the grid belongs to exactly the snake whose
    /// index it holds, and every body segment is claimed.
    fn assert_grid_consistent(session: &GameSession) {
        for y in 0..session.grid.height() as i32 {
            for x in 0..session.grid.width() as i32 {
                let pos = Position::new(x, y);
                match session.grid.snake_at(pos) {
                    Some(index) => assert!(
                        session.snakes[index].body.contains(&pos),
                        "cell {pos:?} claims snake {index} but is not in its body"
                    ),
                    None => {
                        for (index, snake) in session.snakes.iter().enumerate() {
                            assert!(
                                !snake.body.contains(&pos),
                                "snake {index} holds unclaimed cell {pos:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_session_creation() {
        let config = GameConfig::new(640, 480, 2, 3).unwrap();
        for seed in 0..20 {
            let session = new_session(&config, seed);

            assert_eq!(session.snakes.len(), 5);
            assert_eq!(session.num_players, 2);
            assert_eq!(session.speed, 1);
            assert!(!session.game_over);
            for snake in &session.snakes {
                assert_eq!(snake.len(), INIT_SNAKE_SEGMENTS);
                for segment in &snake.body {
                    assert!(session.grid.in_bounds(*segment));
                }
            }
            assert_grid_consistent(&session);
            assert!(session.grid.is_unoccupied(session.food));
        }
    }

    #[test]
    fn test_initial_bodies_are_vertical() {
        let config = GameConfig::new(640, 480, 1, 3).unwrap();
        for seed in 0..20 {
            let session = new_session(&config, seed);
            for snake in &session.snakes {
                let column = snake.body[0].x;
                for i in 1..snake.body.len() {
                    assert_eq!(snake.body[i].x, column);
                    assert_eq!((snake.body[i].y - snake.body[i - 1].y).abs(), 1);
                }
            }
        }
    }

    #[test]
    fn test_placement_sections() {
        let config = GameConfig::new(640, 480, 2, 2).unwrap();
        let margin = config.margin_cells() as i32;
        let section_width = config.section_grid_width() as i32;

        for seed in 0..20 {
            let session = new_session(&config, seed);
            let head_x = |i: usize| session.snakes[i].head().unwrap().x;

            // Player one rightmost, player two leftmost, AI in between
            assert!(head_x(0) >= margin + 3 * section_width);
            assert!(head_x(1) >= margin && head_x(1) < margin + section_width);
            assert!(head_x(2) >= margin + section_width && head_x(2) < margin + 2 * section_width);
            assert!(head_x(3) >= margin + 2 * section_width && head_x(3) < margin + 3 * section_width);
        }
    }

    #[test]
    fn test_colors_and_roles() {
        let config = GameConfig::new(640, 480, 2, 3).unwrap();
        let session = new_session(&config, 7);

        assert_eq!(session.snakes[0].color, SnakeColor::White);
        assert_eq!(session.snakes[0].role, SnakeRole::Player);
        assert_eq!(session.snakes[1].color, SnakeColor::Grey);
        assert_eq!(session.snakes[1].role, SnakeRole::Player);
        assert_eq!(session.snakes[2].color, SnakeColor::Gold);
        assert_eq!(session.snakes[3].color, SnakeColor::Goldenrod);
        assert_eq!(session.snakes[4].color, SnakeColor::Khaki);
        assert_eq!(session.snakes[4].role, SnakeRole::Ai);
    }

    #[test]
    fn test_advance_without_food() {
        let config = GameConfig::new(640, 480, 1, 0).unwrap();
        let mut session = new_session(&config, 3);
        // Keep the food out of the way
        session.food = Position::new(0, 0);

        let head = session.snakes[0].head().unwrap();
        let tail = *session.snakes[0].body.back().unwrap();

        let ate = session.advance_snake(0);
        assert!(!ate);
        assert_eq!(session.snakes[0].len(), INIT_SNAKE_SEGMENTS);
        assert_eq!(session.snakes[0].head(), Some(head.moved_in(session.snakes[0].heading)));
        assert!(session.grid.is_unoccupied(tail));
    }

    #[test]
    fn test_advance_onto_food_grows() {
        let config = GameConfig::new(640, 480, 1, 0).unwrap();
        let mut session = new_session(&config, 3);

        let head = session.snakes[0].head().unwrap();
        session.food = head.moved_in(session.snakes[0].heading);
        let tail = *session.snakes[0].body.back().unwrap();

        let ate = session.advance_snake(0);
        assert!(ate);
        assert_eq!(session.snakes[0].len(), INIT_SNAKE_SEGMENTS + 1);
        // The tail stays both in the body and on the grid
        assert_eq!(*session.snakes[0].body.back().unwrap(), tail);
        assert!(!session.grid.is_unoccupied(tail));
    }

    #[test]
    fn test_destroy_snake_frees_cells() {
        let config = GameConfig::new(640, 480, 1, 0).unwrap();
        let mut session = new_session(&config, 3);
        let body: Vec<Position> = session.snakes[0].body.iter().copied().collect();

        session.destroy_snake(0);
        assert!(!session.snakes[0].is_alive());
        for segment in body {
            assert!(session.grid.is_unoccupied(segment));
        }
        assert!(!session.players_alive());
    }
}
