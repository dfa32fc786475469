use eframe::egui;

use crate::data::read_verbs_embedded;
use crate::model::{Theme, Verb};
use crate::ui::confetti::Confetti;

pub mod actions;
pub mod export;
pub mod session;

pub use actions::PendingAdvance;
pub use export::ExportJob;
pub use session::{AnswerOutcome, Session};

/// The single persisted preference.
pub const THEME_KEY: &str = "theme";

/// The whole application: the read-only verb bank, the one mutable session
/// aggregate and the transient UI bits around it. Everything except `theme`
/// dies with the process.
pub struct QuizApp {
    pub verbs: Vec<Verb>,
    pub session: Session,
    pub theme: Theme,

    // Form state for the current screen.
    pub name_input: String,
    pub past_simple_input: String,
    pub past_participle_input: String,

    /// User-visible notices (hint bonus, export result, speech failures).
    pub message: String,

    /// The scheduled post-grading feedback pause, if one is running.
    pub pending_advance: Option<PendingAdvance>,
    /// The export in flight, if any. At most one at a time.
    pub export_job: Option<ExportJob>,
    /// Where the certificate was drawn this frame, for screenshot cropping.
    pub certificate_rect: Option<egui::Rect>,

    pub confetti: Confetti,
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme: Theme = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, THEME_KEY))
            .unwrap_or_default();
        cc.egui_ctx.set_visuals(theme.visuals());
        Self::with_theme(read_verbs_embedded(), theme)
    }

    pub fn with_theme(verbs: Vec<Verb>, theme: Theme) -> Self {
        Self {
            verbs,
            session: Session::idle(),
            theme,
            name_input: String::new(),
            past_simple_input: String::new(),
            past_participle_input: String::new(),
            message: String::new(),
            pending_advance: None,
            export_job: None,
            certificate_rect: None,
            confetti: Confetti::default(),
        }
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
    }
}
