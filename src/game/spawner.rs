use rand::Rng;

use super::grid::{Grid, Position};

/// Random samples taken before giving up and scanning the whole grid.
/// Under normal play the grid is mostly empty, so the first sample
/// usually lands.
const MAX_RANDOM_ATTEMPTS: usize = 1000;

/// Pick an unoccupied cell for a new food item.
///
/// Samples uniformly random cells, then falls back to a row-major scan so
/// a nearly full grid cannot spin forever. Returns `None` only when every
/// cell is occupied.
pub fn spawn<R: Rng>(grid: &Grid, rng: &mut R) -> Option<Position> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let pos = Position::new(
            rng.gen_range(0..grid.width()) as i32,
            rng.gen_range(0..grid.height()) as i32,
        );
        if grid.is_unoccupied(pos) {
            return Some(pos);
        }
    }

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let pos = Position::new(x, y);
            if grid.is_unoccupied(pos) {
                return Some(pos);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_on_empty_grid() {
        let grid = Grid::new(8, 6);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            let pos = spawn(&grid, &mut rng).unwrap();
            assert!(grid.in_bounds(pos));
        }
    }

    #[test]
    fn test_spawn_avoids_occupied_cells() {
        let mut grid = Grid::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                grid.occupy(Position::new(x, y), 0);
            }
        }
        let free = Position::new(2, 3);
        grid.clear(free);

        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(spawn(&grid, &mut rng), Some(free));
    }

    #[test]
    fn test_spawn_on_full_grid() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                grid.occupy(Position::new(x, y), 0);
            }
        }

        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(spawn(&grid, &mut rng), None);
    }
}
