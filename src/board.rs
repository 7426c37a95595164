//! Target board: the opponent's fleet as seen by whoever checks hits.
//!
//! The agent never reads this; it only receives the `Outcome` of each shot.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::Grid;
use crate::common::{BoardError, Outcome};
use crate::ship::{Placement, Ship};
use crate::square::Square;

pub struct TargetBoard {
    ships: Vec<Ship>,
    ship_map: Grid,
    shots: Grid,
}

impl TargetBoard {
    /// Place every ship, rejecting overlaps and an empty fleet.
    pub fn new(placements: &[Placement]) -> Result<Self, BoardError> {
        if placements.is_empty() {
            return Err(BoardError::MalformedLayout);
        }
        let mut ships = Vec::with_capacity(placements.len());
        let mut ship_map = Grid::new();
        for &placement in placements {
            let ship = Ship::new(placement)?;
            if !(ship_map & ship.mask()).is_empty() {
                return Err(BoardError::ShipOverlaps);
            }
            ship_map = ship_map | ship.mask();
            ships.push(ship);
        }
        Ok(Self {
            ships,
            ship_map,
            shots: Grid::new(),
        })
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> Grid {
        self.ship_map
    }

    /// Every square fired at so far.
    pub fn shots(&self) -> Grid {
        self.shots
    }

    pub fn guessed(&self, square: Square) -> bool {
        self.shots.contains(square)
    }

    /// Process a shot, marking it and reporting the outcome.
    pub fn fire(&mut self, square: Square) -> Result<Outcome, BoardError> {
        if self.shots.contains(square) {
            return Err(BoardError::AlreadyGuessed);
        }
        self.shots.insert(square)?;
        if !self.ship_map.contains(square) {
            return Ok(Outcome::Miss);
        }
        for ship in self.ships.iter_mut() {
            if ship.guess(square) {
                return Ok(if ship.is_sunk() {
                    Outcome::Sunk
                } else {
                    Outcome::Hit
                });
            }
        }
        Ok(Outcome::Miss)
    }
}

impl fmt::Debug for TargetBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "TargetBoard {{\n  ship_map: {:?},\n  shots: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.shots, self.ships
        )
    }
}
