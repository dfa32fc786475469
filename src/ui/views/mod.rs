pub mod game_over;
pub mod level_start;
pub mod quiz;
pub mod results;
pub mod welcome;
