//! Interactive terminal game

pub mod app;
mod rendering;

pub use app::{App, run_tui};
