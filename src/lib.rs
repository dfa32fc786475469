pub mod app;
pub mod data;
pub mod grading;
pub mod model;
pub mod speech;
pub mod ui;

pub use app::QuizApp;
