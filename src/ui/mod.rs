pub mod confetti;
pub mod layout;
pub mod views;

use eframe::{App, Frame, set_value};
use egui::Context;

use crate::QuizApp;
use crate::app::THEME_KEY;
use crate::model::Screen;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.handle_screenshot_events(ctx);
        self.poll_pending_advance(ctx);

        layout::top_panel(self, ctx);

        // An export requested from GameOver needs the Results region on the
        // frame first: render it, capture it, then drop back to the real
        // screen once the screenshot lands.
        let screen = if self.export_wants_results_render() {
            Screen::Results
        } else {
            self.session.screen
        };

        match screen {
            Screen::Idle => views::welcome::ui_welcome(self, ctx),
            Screen::Quiz => views::quiz::ui_quiz(self, ctx),
            Screen::Results => views::results::ui_results(self, ctx),
            Screen::GameOver => views::game_over::ui_game_over(self, ctx),
        }

        if self.session.show_level_start {
            views::level_start::ui_level_start(self, ctx);
        }

        self.confetti.paint(ctx);
        self.maybe_request_screenshot(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, THEME_KEY, &self.theme);
    }
}
