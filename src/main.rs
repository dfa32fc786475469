use verbs_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "منصة مسك التعليمية - تصريف الأفعال",
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::new(cc)))),
    )
}
