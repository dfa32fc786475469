use serde::{Deserialize, Serialize};

/// One irregular verb from the embedded bank. `past_simple` and
/// `past_participle` may carry several accepted spellings separated by `/`
/// (e.g. "dreamed/dreamt").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    pub infinitive: String,
    pub past_simple: String,
    pub past_participle: String,
    pub arabic: String, // Arabic gloss shown under the infinitive
}

impl Verb {
    pub fn past_simple_variants(&self) -> impl Iterator<Item = &str> {
        self.past_simple.split('/')
    }

    pub fn past_participle_variants(&self) -> impl Iterator<Item = &str> {
        self.past_participle.split('/')
    }
}

/// What the learner had typed when a question was failed (or revealed).
/// Immutable once created; owned by `Session::incorrect_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub verb: Verb,
    pub past_simple_input: String,
    pub past_participle_input: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Idle,
    Quiz,
    Results,
    GameOver,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Idle
    }
}

/// Theme preference, the only value that survives across sessions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}
