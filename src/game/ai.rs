use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::{Grid, Position};
use super::heading::Heading;

/// Compute the next heading for a computer snake.
///
/// Greedy one-step lookahead: the candidates are the current heading and
/// its two perpendiculars, with the perpendicular order shuffled per
/// decision so ties do not always break the same way. A candidate is
/// viable when the cell it leads to is in bounds and unoccupied; among
/// viable candidates the one closest to the food by Manhattan distance
/// wins, earlier candidates winning ties. With no viable candidate the
/// snake keeps its current heading and crawls into whatever kills it.
///
/// A 180-degree turn is never among the candidates, so computer snakes
/// cannot reverse.
pub fn next_heading<R: Rng>(
    grid: &Grid,
    head: Position,
    current: Heading,
    food: Position,
    rng: &mut R,
) -> Heading {
    let mut turns = current.perpendiculars();
    turns.shuffle(rng);
    let candidates = [current, turns[0], turns[1]];

    // Upper bound on any in-grid Manhattan distance, so the first viable
    // candidate always beats it.
    let mut best_distance = (grid.width() + grid.height()) as i32;
    let mut best = current;

    for candidate in candidates {
        let target = head.moved_in(candidate);
        let distance = target.manhattan_distance(food);
        if distance < best_distance && grid.is_unoccupied(target) {
            best = candidate;
            best_distance = distance;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_keeps_heading_toward_food() {
        let grid = Grid::new(10, 10);
        let head = Position::new(2, 5);
        let food = Position::new(8, 5);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(
                next_heading(&grid, head, Heading::East, food, &mut rng),
                Heading::East
            );
        }
    }

    #[test]
    fn test_turns_toward_food() {
        let grid = Grid::new(10, 10);
        let head = Position::new(5, 5);
        let food = Position::new(5, 1);

        // Food straight north of an eastbound snake
        assert_eq!(
            next_heading(&grid, head, Heading::East, food, &mut rng()),
            Heading::North
        );
    }

    #[test]
    fn test_never_reverses() {
        let grid = Grid::new(8, 8);
        let head = Position::new(5, 5);
        // Food directly behind the snake
        let food = Position::new(2, 5);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let heading = next_heading(&grid, head, Heading::East, food, &mut rng);
            assert_ne!(heading, Heading::West);
        }
    }

    #[test]
    fn test_avoids_occupied_cells() {
        let mut grid = Grid::new(10, 10);
        let head = Position::new(5, 5);
        let food = Position::new(8, 5);
        // Block the straight-ahead cell
        grid.occupy(Position::new(6, 5), 1);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let heading = next_heading(&grid, head, Heading::East, food, &mut rng);
            assert!(heading == Heading::North || heading == Heading::South);
        }
    }

    #[test]
    fn test_avoids_wall() {
        let grid = Grid::new(10, 10);
        // Eastbound at the east wall, food beyond it
        let head = Position::new(9, 5);
        let food = Position::new(9, 0);

        assert_eq!(
            next_heading(&grid, head, Heading::East, food, &mut rng()),
            Heading::North
        );
    }

    #[test]
    fn test_trapped_snake_keeps_heading() {
        let mut grid = Grid::new(10, 10);
        let head = Position::new(5, 5);
        let food = Position::new(0, 0);
        grid.occupy(Position::new(6, 5), 1);
        grid.occupy(Position::new(5, 4), 1);
        grid.occupy(Position::new(5, 6), 1);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            // Doomed, but it never proposes the reverse
            assert_eq!(
                next_heading(&grid, head, Heading::East, food, &mut rng),
                Heading::East
            );
        }
    }
}
