use core::fmt;

use rand::Rng;

use crate::{
    agent::TargetingAgent,
    board::TargetBoard,
    common::{AgentError, BoardError, Outcome},
    config::CELL_COUNT,
    square::Square,
};

/// Times the agent is asked again when it proposes a square already shot.
pub const MAX_REDRAWS: usize = 2 * CELL_COUNT;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// One resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub square: Square,
    pub outcome: Outcome,
    /// Proposals discarded because they had already been shot.
    pub redraws: usize,
}

/// Summary of a finished (or abandoned) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameReport {
    pub turns: usize,
    pub hits: usize,
    pub won: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Agent(AgentError),
    Board(BoardError),
    /// Every square has been shot and ships are still afloat.
    BoardExhausted,
}

impl From<AgentError> for GameError {
    fn from(err: AgentError) -> Self {
        GameError::Agent(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Agent(e) => write!(f, "Agent error: {}", e),
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::BoardExhausted => write!(f, "Every square has been shot"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Drives one agent against one board, one Observe-then-NextGuess cycle
/// per turn, and keeps the session-wide duplicate filter the agent lacks.
pub struct Game {
    agent: TargetingAgent,
    board: TargetBoard,
    turns: usize,
    hits: usize,
}

impl Game {
    pub fn new(agent: TargetingAgent, board: TargetBoard) -> Self {
        Self {
            agent,
            board,
            turns: 0,
            hits: 0,
        }
    }

    pub fn agent(&self) -> &TargetingAgent {
        &self.agent
    }

    pub fn board(&self) -> &TargetBoard {
        &self.board
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Ask the agent for a guess, fire it and report the outcome back.
    pub fn turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Turn, GameError> {
        let (square, redraws) = self.fresh_guess(rng)?;
        let outcome = self.board.fire(square)?;
        self.agent.observe(square, outcome)?;
        self.turns += 1;
        if outcome != Outcome::Miss {
            self.hits += 1;
        }
        log::trace!("turn {}: {} -> {}", self.turns, square, outcome);
        Ok(Turn {
            square,
            outcome,
            redraws,
        })
    }

    /// Play until every ship is sunk or `max_turns` have been taken.
    pub fn play<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_turns: usize,
    ) -> Result<GameReport, GameError> {
        while self.status() == GameStatus::InProgress && self.turns < max_turns {
            self.turn(rng)?;
        }
        let report = self.report();
        log::debug!("game over after {} turns (won: {})", report.turns, report.won);
        Ok(report)
    }

    pub fn report(&self) -> GameReport {
        GameReport {
            turns: self.turns,
            hits: self.hits,
            won: self.status() == GameStatus::Won,
        }
    }

    fn fresh_guess<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(Square, usize), GameError> {
        for redraws in 0..MAX_REDRAWS {
            let square = self.agent.next_guess(rng);
            if !self.board.guessed(square) {
                return Ok((square, redraws));
            }
        }
        // The random fallback can keep landing on old shots near the end.
        Square::all()
            .find(|&sq| !self.board.guessed(sq))
            .map(|sq| (sq, MAX_REDRAWS))
            .ok_or(GameError::BoardExhausted)
    }
}
