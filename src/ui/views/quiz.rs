use egui::{Button, Color32, Context, ProgressBar, RichText, TextEdit, Vec2};

use crate::QuizApp;
use crate::ui::layout;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(verb) = app.session.current_verb().cloned() else {
        return;
    };
    let heat = app.session.heat_level();
    let fill = layout::heat_background(heat, app.theme);
    let total = app.session.total_questions().max(1);
    let shown = app.session.position + 1;
    let inputs_enabled = app.inputs_enabled();

    layout::centered_panel(ctx, fill, 460.0, 620.0, |ui| {
        // Progress
        ui.horizontal(|ui| {
            ui.label("التقدم");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{shown} / {total}"));
            });
        });
        ui.add(ProgressBar::new(shown as f32 / total as f32));
        ui.add_space(14.0);

        // The verb under drill
        ui.vertical_centered(|ui| {
            ui.label("صرف الفعل التالي:");
            ui.horizontal_wrapped(|ui| {
                ui.add_space((ui.available_width() / 2.0 - 90.0).max(0.0));
                ui.label(RichText::new(&verb.infinitive).size(38.0).strong());
                if ui
                    .button(RichText::new("🔊").size(20.0))
                    .on_hover_text("نطق الفعل")
                    .clicked()
                {
                    app.speak_current();
                }
            });
            ui.label(
                RichText::new(format!("({})", verb.arabic))
                    .size(20.0)
                    .color(Color32::from_rgb(217, 119, 6)),
            );
        });
        ui.add_space(12.0);

        // Answer fields
        ui.label(RichText::new("التصريف الثاني (Past Simple)").strong());
        ui.add_enabled(
            inputs_enabled,
            TextEdit::singleline(&mut app.past_simple_input).desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
        ui.label(RichText::new("التصريف الثالث (Past Participle)").strong());
        ui.add_enabled(
            inputs_enabled,
            TextEdit::singleline(&mut app.past_participle_input).desired_width(f32::INFINITY),
        );

        // Feedback banner during the scheduled pause
        if let Some(correct) = app.feedback() {
            ui.add_space(8.0);
            if correct {
                ui.colored_label(Color32::from_rgb(22, 163, 74), "✅ إجابة صحيحة! أحسنت!");
            } else {
                ui.colored_label(Color32::from_rgb(220, 38, 38), "❌ محاولة خاطئة.");
            }
        }

        ui.add_space(12.0);
        if app.session.revealed {
            // Correct forms shown after spending a hint; the only way
            // forward is the forced-incorrect advance.
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.strong("الإجابة الصحيحة هي:");
                ui.label(format!("Past Simple: {}", verb.past_simple));
                ui.label(format!("Past Participle: {}", verb.past_participle));
            });
            ui.add_space(8.0);
            if ui
                .add_sized([ui.available_width(), 36.0], Button::new("التالي"))
                .clicked()
            {
                app.next_after_reveal(ctx);
            }
        } else {
            ui.horizontal(|ui| {
                let hint_enabled = inputs_enabled && app.session.hints > 0;
                let hint_btn = Button::new(format!("💡 {}", app.session.hints))
                    .min_size(Vec2::new(64.0, 36.0));
                if ui
                    .add_enabled(hint_enabled, hint_btn)
                    .on_hover_text("استخدم تلميحاً لكشف الإجابة")
                    .clicked()
                {
                    app.reveal_answer();
                }

                let check_btn = Button::new(RichText::new("تحقق من الإجابة").color(Color32::WHITE))
                    .fill(layout::heat_button_fill(heat))
                    .min_size(Vec2::new(ui.available_width(), 36.0));
                if ui.add_enabled(inputs_enabled, check_btn).clicked() {
                    let now = ctx.input(|i| i.time);
                    app.submit_answer(now);
                }
            });
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
