// Static placement-count heatmap and the hunt order derived from it.
// Pure and deterministic; computed once per process.

use alloc::vec::Vec;

use crate::{
    config::{BOARD_SIZE, CELL_COUNT},
    ship::Orientation,
    square::Square,
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Per-square placement counts, indexed by 0-based square.
pub type Heat = [u32; CELL_COUNT];

/// Count, for every square, how many in-bounds placements of each ship
/// length cover it, summed over both orientations. Ships are placed
/// independently; overlap between ships is ignored.
pub fn heat_map(sizes: &[usize]) -> Heat {
    let mut heat = [0u32; CELL_COUNT];

    for &len in sizes {
        if len == 0 || len > GRID_SIZE {
            log::warn!("ship length {} fits nowhere on the board; skipped", len);
            continue;
        }

        for orient in Orientation::BOTH {
            let max_row = if matches!(orient, Orientation::Vertical) {
                GRID_SIZE - len + 1
            } else {
                GRID_SIZE
            };
            let max_col = if matches!(orient, Orientation::Horizontal) {
                GRID_SIZE - len + 1
            } else {
                GRID_SIZE
            };
            for r in 0..max_row {
                for c in 0..max_col {
                    for k in 0..len {
                        let rr = r + if matches!(orient, Orientation::Vertical) { k } else { 0 };
                        let cc = c + if matches!(orient, Orientation::Horizontal) { k } else { 0 };
                        heat[rr * GRID_SIZE + cc] += 1;
                    }
                }
            }
        }
    }

    heat
}

/// Hunt-mode search list: one checkerboard colour class ordered coldest
/// first, so the hottest square is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntOrder {
    squares: Vec<Square>,
    heat: Heat,
}

impl HuntOrder {
    /// Squares from coldest to hottest.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Heat of any square, including off-colour ones.
    pub fn heat(&self, square: Square) -> u32 {
        self.heat[square.index()]
    }

    /// The full heatmap the order was built from.
    pub fn heat_map(&self) -> &Heat {
        &self.heat
    }

    /// The square searched first.
    pub fn hottest(&self) -> Option<Square> {
        self.squares.last().copied()
    }
}

/// Build the hunt order for a fleet of ship lengths.
///
/// Only squares with `row % 2 == col % 2` are kept: every ship of length
/// two or more covers both colours, so one colour class finds them all.
/// The sort is stable and the input is in index order, so equal heat keeps
/// ascending index order.
pub fn build_hunt_order(sizes: &[usize]) -> HuntOrder {
    let heat = heat_map(sizes);
    let mut squares: Vec<Square> = Square::all().filter(|sq| sq.is_hunt_color()).collect();
    squares.sort_by_key(|sq| heat[sq.index()]);
    log::debug!(
        "hunt order built from {} ship(s); hottest square {:?}",
        sizes.len(),
        squares.last().map(|sq| sq.one_based())
    );
    HuntOrder { squares, heat }
}

/// Process-wide hunt order for the canonical fleet. Built on first call and
/// shared read-only afterwards; call it during startup so no session pays
/// for the build.
#[cfg(feature = "std")]
pub fn hunt_order() -> &'static HuntOrder {
    static HUNT_ORDER: std::sync::OnceLock<HuntOrder> = std::sync::OnceLock::new();
    HUNT_ORDER.get_or_init(|| {
        log::info!("generating initial heatmap");
        build_hunt_order(&crate::config::SHIP_SIZES)
    })
}
