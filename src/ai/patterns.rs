//! Reusable move-selection patterns for data-authored enemies.
//!
//! Every pattern maps `(moveset length, turn, last move, rng)` to a move
//! index. None of them look at anything else, so a replay with the same
//! inputs and RNG state always picks the same move.

use crate::core::GameRng;

/// `moveset[turn % len]`.
#[must_use]
pub fn sequential(len: usize, turn: u32) -> usize {
    if len == 0 {
        return 0;
    }
    turn as usize % len
}

/// Uniform choice every turn.
pub fn random(len: usize, rng: &mut GameRng) -> usize {
    if len <= 1 {
        return 0;
    }
    rng.gen_range_usize(0..len)
}

/// Move 0 on turn 0, uniform choice afterwards.
pub fn first_then_random(len: usize, turn: u32, rng: &mut GameRng) -> usize {
    if turn == 0 {
        return 0;
    }
    random(len, rng)
}

/// Move 0 on turn 0. Afterwards move `i` has weight `len - i` and the
/// previous move is excluded. Falls back to move 0 when nothing is left.
pub fn weighted(len: usize, turn: u32, last_move: Option<usize>, rng: &mut GameRng) -> usize {
    if turn == 0 || len == 0 {
        return 0;
    }
    let weights: Vec<f64> = (0..len)
        .map(|i| if Some(i) == last_move { 0.0 } else { (len - i) as f64 })
        .collect();
    rng.choose_weighted(&weights).unwrap_or(0)
}

/// The first `split_turn` turns cycle through the first half of the
/// moveset, later turns cycle through the second half.
#[must_use]
pub fn phase_shift(len: usize, turn: u32, split_turn: u32) -> usize {
    if len == 0 {
        return 0;
    }
    let half = (len / 2).max(1);
    if turn < split_turn {
        return turn as usize % half;
    }
    let rest = len - half;
    if rest == 0 {
        return 0;
    }
    half + (turn - split_turn) as usize % rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_cycles() {
        let picks: Vec<usize> = (0..7).map(|t| sequential(3, t)).collect();
        assert_eq!(picks, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_first_then_random_opens_with_first_move() {
        let mut rng = GameRng::new(8);
        assert_eq!(first_then_random(4, 0, &mut rng), 0);
        for turn in 1..50 {
            assert!(first_then_random(4, turn, &mut rng) < 4);
        }
    }

    #[test]
    fn test_weighted_never_repeats() {
        let mut rng = GameRng::new(21);
        let mut last = Some(0);
        for turn in 1..200 {
            let pick = weighted(3, turn, last, &mut rng);
            assert_ne!(Some(pick), last);
            last = Some(pick);
        }
    }

    #[test]
    fn test_weighted_prefers_earlier_moves() {
        let mut rng = GameRng::new(4);
        let mut counts = [0u32; 4];
        for turn in 1..4000 {
            counts[weighted(4, turn, Some(3), &mut rng)] += 1;
        }
        assert_eq!(counts[3], 0);
        assert!(counts[0] > counts[1]);
        assert!(counts[1] > counts[2]);
    }

    #[test]
    fn test_weighted_single_move_falls_back() {
        let mut rng = GameRng::new(1);
        assert_eq!(weighted(1, 5, Some(0), &mut rng), 0);
    }

    #[test]
    fn test_phase_shift_halves() {
        let picks: Vec<usize> = (0..8).map(|t| phase_shift(4, t, 3)).collect();
        assert_eq!(picks, vec![0, 1, 0, 2, 3, 2, 3, 2]);
    }

    #[test]
    fn test_phase_shift_single_move() {
        assert_eq!(phase_shift(1, 0, 3), 0);
        assert_eq!(phase_shift(1, 10, 3), 0);
    }
}
