use egui::{Align2, Color32, Context, CornerRadius, Id, LayerId, Order, RichText, Vec2};

use crate::QuizApp;

/// Level-up interstitial: a transient overlay, not a screen of its own.
/// Blocks progression until acknowledged, then normal quiz flow resumes at
/// the already-advanced position.
pub fn ui_level_start(app: &mut QuizApp, ctx: &Context) {
    // Dim the quiz behind the card.
    ctx.layer_painter(LayerId::new(Order::Middle, Id::new("level_start_dim")))
        .rect_filled(ctx.screen_rect(), CornerRadius::ZERO, Color32::from_black_alpha(110));

    egui::Window::new("level_start")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(
                    RichText::new(format!("المستوى {}", app.session.level))
                        .size(34.0)
                        .color(Color32::from_rgb(2, 132, 199)),
                );
                ui.add_space(8.0);
                ui.label("أحسنت! لقد وصلت إلى مستوى جديد. استمر في التقدم!");
                ui.add_space(12.0);
                if ui
                    .add_sized([160.0, 36.0], egui::Button::new("أكمل"))
                    .clicked()
                {
                    app.acknowledge_level_up();
                }
                ui.add_space(12.0);
            });
        });
}
