use egui::{Button, CentralPanel, Color32, Context, Frame, Margin, RichText, ScrollArea, Vec2};

use crate::QuizApp;
use crate::ui::layout;

const GREEN: Color32 = Color32::from_rgb(22, 163, 74);
const RED: Color32 = Color32::from_rgb(220, 38, 38);

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let fill = layout::heat_background(app.session.heat_level(), app.theme);

    CentralPanel::default()
        .frame(Frame::default().fill(fill).inner_margin(Margin::symmetric(24, 16)))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(760.0);
                    ui.set_max_width(w);

                    // The certificate card; its rect is what the export
                    // collaborator captures.
                    let card = Frame::group(ui.style())
                        .fill(ui.visuals().window_fill())
                        .inner_margin(Margin::symmetric(24, 20))
                        .show(ui, |ui| {
                            certificate_body(app, ui);
                        });
                    app.certificate_rect = Some(card.response.rect);

                    ui.add_space(16.0);
                    let restart = Button::new("إعادة الاختبار").min_size(Vec2::new(220.0, 36.0));
                    if ui.add_enabled(!app.is_exporting(), restart).clicked() {
                        app.restart();
                    }

                    if !app.message.is_empty() {
                        ui.add_space(8.0);
                        ui.label(&app.message);
                    }
                });
            });
        });
}

fn certificate_body(app: &QuizApp, ui: &mut egui::Ui) {
    let session = &app.session;
    let score = session.score();
    let total = session.total_questions();
    let percentage = session.percentage();
    let score_color = if percentage >= 50 { GREEN } else { RED };

    ui.vertical_centered(|ui| {
        ui.label("منصة مسك التعليمية");
        ui.heading(RichText::new("شهادة إنجاز").size(28.0));
        ui.label(RichText::new("Certificate of Achievement").weak());
        ui.add_space(8.0);
        ui.label("تُقدم هذه الشهادة بكل فخر إلى");
        ui.label(
            RichText::new(&session.student_name)
                .size(24.0)
                .strong()
                .color(Color32::from_rgb(217, 119, 6)),
        );
        ui.add_space(8.0);
        ui.label(format!(
            "مدة الاختبار: {}",
            format_duration(session.duration_seconds)
        ));
        ui.label(
            RichText::new(format!("النتيجة: {score} / {total} ({percentage}%)"))
                .size(20.0)
                .strong()
                .color(score_color),
        );
    });

    ui.add_space(16.0);
    ui.columns(2, |cols| {
        cols[0].vertical(|ui| {
            ui.colored_label(
                GREEN,
                RichText::new(format!("✅ الأفعال الصحيحة ({})", session.correct_list.len()))
                    .strong(),
            );
            ui.separator();
            if session.correct_list.is_empty() {
                ui.weak("لا توجد إجابات صحيحة.");
            }
            for verb in &session.correct_list {
                ui.label(format!(
                    "{} → {}, {}",
                    verb.infinitive, verb.past_simple, verb.past_participle
                ));
            }
        });

        cols[1].vertical(|ui| {
            ui.colored_label(
                RED,
                RichText::new(format!("❌ الأفعال الخاطئة ({})", session.incorrect_list.len()))
                    .strong(),
            );
            ui.separator();
            if session.incorrect_list.is_empty() {
                ui.weak("لا توجد أخطاء! عمل رائع!");
            }
            for record in &session.incorrect_list {
                ui.label(RichText::new(&record.verb.infinitive).strong());
                ui.label(
                    RichText::new(format!(
                        "إجابتك: {}, {}",
                        or_blank(&record.past_simple_input),
                        or_blank(&record.past_participle_input)
                    ))
                    .color(RED)
                    .strikethrough(),
                );
                ui.colored_label(
                    GREEN,
                    format!(
                        "الصحيح: {}, {}",
                        record.verb.past_simple, record.verb.past_participle
                    ),
                );
                ui.add_space(4.0);
            }
        });
    });
}

fn or_blank(input: &str) -> &str {
    if input.trim().is_empty() { "فارغ" } else { input }
}

/// "X دقيقة و Y ثانية", or the unknown-duration notice when the session
/// never finished cleanly.
pub fn format_duration(seconds: Option<u64>) -> String {
    match seconds {
        None => "غير محددة".to_owned(),
        Some(total) => format!("{} دقيقة و {} ثانية", total / 60, total % 60),
    }
}
