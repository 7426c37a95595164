use alloc::vec::Vec;

pub const BOARD_SIZE: u8 = 10;
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
/// Squares in one checkerboard colour class.
pub const HUNT_ORDER_LEN: usize = CELL_COUNT / 2;
pub const NUM_SHIPS: usize = 5;
/// Lengths of the canonical fleet: carrier, battleship, cruiser,
/// submarine, destroyer.
pub const SHIP_SIZES: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Opponent layout as `[code, length, ...]` pairs. The code is the 1-based
/// origin square, negated for a vertical ship.
pub const DEFAULT_LAYOUT: [i32; NUM_SHIPS * 2] = [-60, 5, -62, 4, -35, 3, 27, 3, 24, 2];

/// Environment variable consulted by `init_logging`.
pub const LOG_ENV_VAR: &str = "HUNTSMAN_LOG";

/// Parse a comma-separated list such as a layout or a list of ship sizes.
/// Returns `None` if any entry fails to parse.
pub fn parse_int_list<T: core::str::FromStr>(input: &str) -> Option<Vec<T>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect()
}
