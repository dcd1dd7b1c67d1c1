//! Editor for 8x8 2bpp tile graphics in the Game Boy's packed format.

pub mod codec;
pub mod common;
pub mod error;
pub mod line;
pub mod message;
pub mod persist;
pub mod repl;
pub mod state;
pub mod store;
pub mod tile;
pub mod undo;
pub mod update;
