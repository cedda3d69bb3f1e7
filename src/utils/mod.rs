pub mod logging;
pub mod table;

pub use table::{print_leaderboard, render_leaderboard};
