//! Per-session hunt/target state machine.
//!
//! In hunt mode guesses are popped from the hot end of a private copy of the
//! [`HuntOrder`]. The first hit on a ship switches to target mode and queues
//! that square's neighbours; the second hit fixes the ship's orientation,
//! prunes every off-line candidate and queues the next square along the
//! line. `SUNK` returns to hunt mode.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::Rng;

use crate::{
    common::{AgentError, Mode, Outcome},
    heatmap::HuntOrder,
    ship::Orientation,
    square::{Direction, Square},
};

/// Guessing opponent for a single game session. Not shared between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetingAgent {
    hunt_stack: Vec<Square>,
    target_queue: VecDeque<Square>,
    mode: Mode,
    first_hit: Option<Square>,
    last_hit: Option<Square>,
}

impl TargetingAgent {
    /// Fresh agent in hunt mode with its own copy of `order`.
    pub fn new(order: &HuntOrder) -> Self {
        Self {
            hunt_stack: order.squares().to_vec(),
            target_queue: VecDeque::new(),
            mode: Mode::Hunt,
            first_hit: None,
            last_hit: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Pending candidates, front first.
    pub fn target_queue(&self) -> &VecDeque<Square> {
        &self.target_queue
    }

    /// Remaining hunt squares, hottest last.
    pub fn hunt_stack(&self) -> &[Square] {
        &self.hunt_stack
    }

    pub fn hunt_remaining(&self) -> usize {
        self.hunt_stack.len()
    }

    pub fn first_hit(&self) -> Option<Square> {
        self.first_hit
    }

    pub fn last_hit(&self) -> Option<Square> {
        self.last_hit
    }

    /// Choose the next square to fire at.
    ///
    /// Candidates queued in target mode win; otherwise the hottest remaining
    /// hunt square. Once both are exhausted the guess is uniformly random
    /// and may repeat an earlier one; filtering repeats is the caller's job.
    pub fn next_guess<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Square {
        if let Some(square) = self.target_queue.pop_front() {
            log::trace!("target guess {}", square);
            return square;
        }
        if self.mode == Mode::Target {
            log::debug!(
                "candidates around {:?} exhausted without a sink; back to hunting",
                self.first_hit.map(Square::one_based)
            );
            self.reset();
        }
        if let Some(square) = self.hunt_stack.pop() {
            log::trace!("hunt guess {} ({} left)", square, self.hunt_stack.len());
            return square;
        }
        let square = Square::random(rng);
        log::warn!("hunt order exhausted; random guess {}", square);
        square
    }

    /// Fold the outcome of the agent's previous guess back into its state.
    ///
    /// On error nothing has been modified.
    pub fn observe(&mut self, square: Square, outcome: Outcome) -> Result<(), AgentError> {
        match outcome {
            Outcome::Miss => Ok(()),
            Outcome::Sunk => {
                log::debug!("ship sunk at {}; back to hunting", square);
                self.reset();
                Ok(())
            }
            Outcome::Hit => match self.first_hit {
                None => {
                    self.start_pursuit(square);
                    Ok(())
                }
                Some(first) => self.extend_pursuit(first, square),
            },
        }
    }

    /// [`observe`](Self::observe) with caller-boundary inputs: a 1-based
    /// square number and an exact `HIT`/`MISS`/`SUNK` token.
    pub fn observe_reported(&mut self, number: usize, token: &str) -> Result<(), AgentError> {
        let outcome: Outcome = token.parse()?;
        let square = Square::from_one_based(number)?;
        self.observe(square, outcome)
    }

    /// One turn at the caller boundary: fold in the previous guess and its
    /// outcome (absent on the first turn), then return the next 1-based guess.
    /// Reported numbers are range-checked before narrowing.
    pub fn take_turn<R: Rng + ?Sized>(
        &mut self,
        previous: Option<(usize, &str)>,
        rng: &mut R,
    ) -> Result<u8, AgentError> {
        if let Some((number, token)) = previous {
            self.observe_reported(number, token)?;
        }
        Ok(self.next_guess(rng).one_based())
    }

    fn reset(&mut self) {
        self.mode = Mode::Hunt;
        self.target_queue.clear();
        self.first_hit = None;
        self.last_hit = None;
    }

    fn start_pursuit(&mut self, square: Square) {
        log::debug!("first hit at {}; targeting", square);
        self.mode = Mode::Target;
        self.first_hit = Some(square);
        self.last_hit = Some(square);
        // Pushed in reverse so the front reads left, right, up, down.
        let neighbors: Vec<Square> = square.neighbors().collect();
        for &n in neighbors.iter().rev() {
            if !self.target_queue.contains(&n) {
                self.target_queue.push_front(n);
            }
        }
    }

    fn extend_pursuit(&mut self, first: Square, hit: Square) -> Result<(), AgentError> {
        if hit == first {
            return Err(AgentError::DuplicateHit);
        }
        let orientation = if hit.col() == first.col() {
            Orientation::Vertical
        } else if hit.row() == first.row() {
            Orientation::Horizontal
        } else {
            return Err(AgentError::OrientationConflict);
        };

        self.target_queue.retain(|&sq| {
            sq != hit
                && match orientation {
                    Orientation::Vertical => sq.col() == hit.col(),
                    Orientation::Horizontal => sq.row() == hit.row(),
                }
        });

        let away = match (orientation, hit > first) {
            (Orientation::Vertical, true) => Direction::Down,
            (Orientation::Vertical, false) => Direction::Up,
            (Orientation::Horizontal, true) => Direction::Right,
            (Orientation::Horizontal, false) => Direction::Left,
        };
        if let Some(next) = hit.step(away) {
            if !self.target_queue.contains(&next) {
                self.target_queue.push_front(next);
            }
        }
        log::trace!("{:?} line through {} and {}", orientation, first, hit);
        self.last_hit = Some(hit);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatmap::build_hunt_order;
    use rand::{rngs::SmallRng, SeedableRng};

    fn sq(index: usize) -> Square {
        Square::new(index).unwrap()
    }

    fn agent() -> TargetingAgent {
        TargetingAgent::new(&build_hunt_order(&crate::config::SHIP_SIZES))
    }

    #[test]
    fn vertical_lock_extrapolates_downwards() {
        let mut a = agent();
        a.observe(sq(44), Outcome::Hit).unwrap();
        a.observe(sq(54), Outcome::Hit).unwrap();
        let queue: Vec<usize> = a.target_queue().iter().map(|s| s.index()).collect();
        assert_eq!(queue, [64, 34]);
    }

    #[test]
    fn extrapolation_stops_at_edge() {
        let mut a = agent();
        a.observe(sq(8), Outcome::Hit).unwrap();
        a.observe(sq(9), Outcome::Hit).unwrap();
        // 10 is the next row, not the next column.
        assert!(a.target_queue().iter().all(|s| s.row() == 0));
        assert!(!a.target_queue().contains(&sq(10)));
    }

    #[test]
    fn empty_queue_in_target_mode_abandons_pursuit() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut a = agent();
        a.observe(sq(0), Outcome::Hit).unwrap();
        assert_eq!(a.next_guess(&mut rng), sq(1));
        assert_eq!(a.next_guess(&mut rng), sq(10));
        let before = a.hunt_remaining();
        a.next_guess(&mut rng);
        assert_eq!(a.mode(), Mode::Hunt);
        assert_eq!(a.first_hit(), None);
        assert_eq!(a.hunt_remaining(), before - 1);
    }
}
