//! Core of a two-player grid naval-combat game: the board/vessel domain
//! model (placement validation, shot resolution, sinking detection) and the
//! computer opponent's targeting engine (heat-map construction, shot
//! selection, stochastic self-placement). Rendering, event wiring and turn
//! sequencing live outside this crate and drive it through [`Board`] and
//! [`TargetingEngine`].

mod board;
mod common;
mod config;
mod logging;
mod persist;
mod savegame;
mod targeting;
mod vessel;

pub use board::*;
pub use common::*;
pub use config::*;
pub use logging::init_logging;
pub use persist::*;
pub use savegame::*;
pub use targeting::*;
pub use vessel::*;
