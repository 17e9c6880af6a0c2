//! Cyclic win rule and the von Neumann neighborhood on a torus.

use rand::Rng;
use rockpaper_data::Species;

/// `a` beats `b` iff `(a - b + 3) mod 3 == 1`.
///
/// Rock beats Scissors, Paper beats Rock, Scissors beats Paper. No species
/// beats itself.
#[inline]
#[must_use]
pub fn wins_over(a: Species, b: Species) -> bool {
    a.beats(b)
}

/// One of the four orthogonal neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[must_use]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Neighbor of `(x, y)` in this direction on an `size`×`size` torus.
    #[must_use]
    pub fn neighbor(self, x: usize, y: usize, size: usize) -> (usize, usize) {
        let (dx, dy) = self.offset();
        let n = size as i64;
        let nx = (x as i64 + dx).rem_euclid(n) as usize;
        let ny = (y as i64 + dy).rem_euclid(n) as usize;
        (nx, ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_no_species_beats_itself() {
        for s in Species::ALL {
            assert!(!wins_over(s, s));
        }
    }

    #[test]
    fn test_rule_is_antisymmetric() {
        for a in Species::ALL {
            for b in Species::ALL {
                if a != b {
                    assert_ne!(wins_over(a, b), wins_over(b, a), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_neighbor_wraps_at_edges() {
        assert_eq!(Direction::Up.neighbor(0, 0, 5), (0, 4));
        assert_eq!(Direction::Left.neighbor(0, 2, 5), (4, 2));
        assert_eq!(Direction::Right.neighbor(4, 2, 5), (0, 2));
        assert_eq!(Direction::Down.neighbor(3, 4, 5), (3, 0));
    }

    #[test]
    fn test_single_cell_torus_is_its_own_neighbor() {
        for d in Direction::ALL {
            assert_eq!(d.neighbor(0, 0, 1), (0, 0));
        }
    }

    #[test]
    fn test_random_direction_is_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let draws = 40_000;
        let mut hits = [0usize; 4];
        for _ in 0..draws {
            let d = Direction::random(&mut rng);
            let i = Direction::ALL.iter().position(|a| *a == d).unwrap();
            hits[i] += 1;
        }
        for (d, &n) in Direction::ALL.iter().zip(hits.iter()) {
            let share = n as f64 / draws as f64;
            assert!((0.23..0.27).contains(&share), "{d:?} drawn {share}");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_neighbor_is_one_step_on_torus(
            size in 1usize..40,
            x in 0usize..40,
            y in 0usize..40,
            d in 0usize..4
        ) {
            let (x, y) = (x % size, y % size);
            let dir = Direction::ALL[d];
            let (nx, ny) = dir.neighbor(x, y, size);
            prop_assert!(nx < size && ny < size);

            let (dx, dy) = dir.offset();
            let n = size as i64;
            prop_assert_eq!((x as i64 + dx).rem_euclid(n), nx as i64);
            prop_assert_eq!((y as i64 + dy).rem_euclid(n), ny as i64);
        }
    }
}
