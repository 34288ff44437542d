// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod app;
pub mod cards;
pub mod config;
pub mod equity;
pub mod hand;
pub mod picker;
pub mod protocol;
pub mod range;
pub mod tui;
