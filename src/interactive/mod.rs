//! Interactive watch mode

mod app;
mod rendering;

pub use app::{App, GameState, TICK_RATE, run_tui};
