//! The interactive layer: a blocking, line-oriented console UI.
//!
//! - state.rs: the `App` struct owning both stores and their location
//! - console.rs: shared input, menu-selection, and styling primitives
//! - session.rs: one quiz session, from level choice to the results banner
//! - screens.rs: dictionary, add-word, statistics, and leaderboard views
//! - menu.rs: the top-level six-way dispatcher

pub mod console;
pub mod menu;
pub mod screens;
pub mod session;
pub mod state;

// Re-export for convenience
pub use menu::run;
pub use state::App;
