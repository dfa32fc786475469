use egui::{Align, Button, CentralPanel, Color32, Context, Frame, Layout, RichText, Ui};

use crate::QuizApp;
use crate::model::{Screen, Theme};

/// Header bar: platform title on one side; theme toggle plus the
/// screen-dependent counters or export control on the other.
pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("📖").size(22.0));
            ui.heading("منصة مسك التعليمية");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let theme_icon = match app.theme {
                    Theme::Light => "🌙",
                    Theme::Dark => "☀",
                };
                if ui.button(theme_icon).clicked() {
                    app.toggle_theme(ctx);
                }

                match app.session.screen {
                    Screen::Quiz => {
                        ui.label(format!("النقاط: {}", app.session.score()));
                        ui.label(format!("💡 {}", app.session.hints));
                        ui.label(format!("❤ {}", app.session.lives));
                    }
                    Screen::Results | Screen::GameOver => {
                        let label = if app.is_exporting() {
                            "⏳ جاري التصدير..."
                        } else {
                            "⬇ تصدير الشهادة"
                        };
                        if ui.add_enabled(!app.is_exporting(), Button::new(label)).clicked() {
                            app.request_export();
                        }
                    }
                    Screen::Idle => {}
                }
            });
        });
    });
}

/// Panel centered vertically, with a maximum content width and the heat
/// background fill behind it.
pub fn centered_panel(
    ctx: &Context,
    fill: Color32,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default()
        .frame(Frame::default().fill(fill))
        .show(ctx, |ui| {
            let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
            ui.add_space(extra);
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                ui.set_max_width(w);
                inner(ui);
            });
            ui.add_space(extra);
        });
}

/// Score-driven page background: hue slides from sky blue towards red as
/// the heat level rises, with theme-dependent lightness.
pub fn heat_background(level: f32, theme: Theme) -> Color32 {
    let level = level.clamp(0.0, 1.0);
    let hue = 200.0 - 200.0 * level;
    let saturation = (70.0 + 20.0 * level) / 100.0;
    let lightness = match theme {
        Theme::Dark => (20.0 - 15.0 * level) / 100.0,
        Theme::Light => (95.0 - 15.0 * level) / 100.0,
    };
    hsl_to_color(hue, saturation, lightness)
}

/// Accent for the check button, stepping sky → orange → red with the heat.
pub fn heat_button_fill(level: f32) -> Color32 {
    if level > 0.7 {
        Color32::from_rgb(239, 68, 68)
    } else if level > 0.3 {
        Color32::from_rgb(249, 115, 22)
    } else {
        Color32::from_rgb(2, 132, 199)
    }
}

fn hsl_to_color(hue_degrees: f32, saturation: f32, lightness: f32) -> Color32 {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hp = hue_degrees.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    Color32::from_rgb(
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_color(0.0, 1.0, 0.5), Color32::from_rgb(255, 0, 0));
        assert_eq!(hsl_to_color(120.0, 1.0, 0.5), Color32::from_rgb(0, 255, 0));
        assert_eq!(hsl_to_color(240.0, 1.0, 0.5), Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn heat_background_shifts_towards_red() {
        let cold = heat_background(0.0, Theme::Light);
        let hot = heat_background(1.0, Theme::Light);
        assert!(hot.r() > cold.r());
        assert!(hot.b() < cold.b());
    }
}
