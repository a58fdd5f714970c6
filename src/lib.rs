#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod fleet;
mod game;
mod heatmap;
mod knowledge;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
mod ship;
mod simulator;
mod targeting;
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::FleetState;
pub use game::*;
pub use heatmap::{Heatmap, HeatmapEngine};
pub use knowledge::{Belief, KnowledgeGrid};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env, DEFAULT_LEVEL, LOG_ENV};
pub use player::*;
pub use player_ai::*;
pub use ship::*;
pub use simulator::{OccupancyGrid, PlacementSimulator};
pub use targeting::{TargetingPolicy, UntriedPool};
