use log::debug;
use rand::Rng;

use crate::domain::Grid;

/// Randomize the grid: each cell is alive with `live_percentage` percent chance.
/// 0 leaves every cell dead, 100 makes every cell alive.
pub fn seed_random<R: Rng + ?Sized>(grid: &mut Grid, live_percentage: u8, rng: &mut R) {
    let (height, width) = grid.dimensions();

    for row in 0..height as isize {
        for col in 0..width as isize {
            if rng.random_range(0..100u8) < live_percentage {
                grid.set_alive(row, col);
            } else {
                grid.set_dead(row, col);
            }
        }
    }

    debug!(
        "seeded {}x{} grid at {}%: {} live cells",
        height,
        width,
        live_percentage,
        grid.population()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_percent_clears_grid() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set_alive(4, 4);
        seed_random(&mut grid, 0, &mut StdRng::seed_from_u64(1));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_hundred_percent_fills_grid() {
        let mut grid = Grid::new(7, 9).unwrap();
        seed_random(&mut grid, 100, &mut StdRng::seed_from_u64(1));
        assert_eq!(grid.population(), 63);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        seed_random(&mut a, 30, &mut StdRng::seed_from_u64(99));
        seed_random(&mut b, 30, &mut StdRng::seed_from_u64(99));

        let alive = |g: &Grid| g.iter_cells().map(|c| c.is_alive()).collect::<Vec<_>>();
        assert_eq!(alive(&a), alive(&b));
    }

    #[test]
    fn test_density_is_roughly_respected() {
        let mut grid = Grid::new(100, 100).unwrap();
        seed_random(&mut grid, 25, &mut StdRng::seed_from_u64(7));
        let population = grid.population();
        assert!((2000..3000).contains(&population), "population = {population}");
    }
}
