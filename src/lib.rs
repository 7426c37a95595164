#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod agent;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod heatmap;
#[cfg(feature = "std")]
mod logging;
mod ship;
mod square;
#[cfg(feature = "std")]
mod ui;

pub use agent::*;
pub use bitboard::{BitBoard, BitBoardError, Grid};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use heatmap::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
pub use ship::*;
pub use square::*;
#[cfg(feature = "std")]
pub use ui::*;

