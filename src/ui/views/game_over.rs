use egui::{Button, Color32, Context, RichText, Vec2};

use crate::QuizApp;
use crate::ui::layout;

pub fn ui_game_over(app: &mut QuizApp, ctx: &Context) {
    let fill = layout::heat_background(app.session.heat_level(), app.theme);
    layout::centered_panel(ctx, fill, 280.0, 560.0, |ui| {
        ui.heading(
            RichText::new("انتهت المحاولات!")
                .size(30.0)
                .color(Color32::from_rgb(220, 38, 38)),
        );
        ui.add_space(10.0);
        ui.label(
            "لا تستسلم! كل خطأ هو فرصة للتعلم. \
             يمكنك المحاولة مجدداً أو تصدير نتيجتك الحالية.",
        );
        ui.add_space(16.0);

        let retry = Button::new("إعادة المحاولة").min_size(Vec2::new(220.0, 36.0));
        if ui.add_enabled(!app.is_exporting(), retry).clicked() {
            app.restart();
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
