use egui::{Button, Context, TextEdit, Vec2};

use crate::QuizApp;
use crate::app::session::TOTAL_LIVES;
use crate::ui::layout;

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    let fill = layout::heat_background(0.0, app.theme);
    layout::centered_panel(ctx, fill, 320.0, 560.0, |ui| {
        ui.heading("منصة مسك التعليمية");
        ui.add_space(10.0);
        ui.label(format!(
            "مرحباً بك! أدخل اسمك لبدء رحلتك في إتقان تصريف الأفعال. \
             لديك {TOTAL_LIVES} محاولات خاطئة فقط. حظاً موفقاً!"
        ));
        ui.add_space(16.0);

        let name_edit = TextEdit::singleline(&mut app.name_input)
            .hint_text("اكتب اسمك هنا")
            .desired_width(320.0);
        let response = ui.add(name_edit);

        ui.add_space(16.0);
        let can_start = !app.name_input.trim().is_empty();
        let start = ui.add_enabled(
            can_start,
            Button::new("ابدأ الاختبار").min_size(Vec2::new(320.0, 36.0)),
        );

        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if start.clicked() || (submitted && can_start) {
            app.start_quiz();
        }
    });
}
