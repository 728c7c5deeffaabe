//! Quizdeck Player crate.
//!
//! Client-side orchestration around the server functions: feature adapters
//! that always resolve to a tagged result, interaction hooks that invalidate
//! the query cache on success, and the shells that gate content on the
//! signed-in user's state.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod ui;

pub use ui::app;
