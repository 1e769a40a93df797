/// Conway's B3/S23 transition.
///
/// A cell is alive in the next generation if it has exactly three live
/// neighbors, or if it is alive now and has exactly two.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (_, 3) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth() {
        assert!(next_state(false, 3));
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert!(!next_state(false, n), "dead cell with {} neighbors must stay dead", n);
        }
    }

    #[test]
    fn test_survival() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
    }

    #[test]
    fn test_death() {
        for n in [0, 1, 4, 5, 6, 7, 8] {
            assert!(!next_state(true, n), "live cell with {} neighbors must die", n);
        }
    }
}
