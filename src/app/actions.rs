use rand::thread_rng;

use super::*;
use crate::grading::grade_answer;
use crate::model::{AnswerRecord, Screen};
use crate::speech;
use crate::ui::confetti::ConfettiParams;

/// Feedback pause between grading and advancing to the next question.
pub const FEEDBACK_DELAY_SECS: f64 = 1.0;

/// A graded answer waiting out the feedback pause. Applied when `due`
/// (egui frame time) passes; dropped wholesale on restart.
pub struct PendingAdvance {
    pub record: AnswerRecord,
    pub correct: bool,
    pub due: f64,
}

impl QuizApp {
    /// StartQuiz from the entry screen.
    pub fn start_quiz(&mut self) {
        self.session = Session::start(&self.name_input, &self.verbs, &mut thread_rng());
        self.past_simple_input.clear();
        self.past_participle_input.clear();
        self.message.clear();
        log::info!(
            "quiz started for {} with {} verbs",
            self.session.student_name,
            self.session.total_questions()
        );
    }

    /// Whether the quiz form currently accepts input: no feedback pause
    /// running, no revealed answer, no interstitial blocking.
    pub fn inputs_enabled(&self) -> bool {
        self.session.screen == Screen::Quiz
            && self.pending_advance.is_none()
            && !self.session.revealed
            && !self.session.show_level_start
    }

    /// The verdict being flashed during the feedback pause, if any.
    pub fn feedback(&self) -> Option<bool> {
        self.pending_advance.as_ref().map(|p| p.correct)
    }

    /// SubmitAnswer: grade immediately, then hold the result for the
    /// feedback pause before the session advances.
    pub fn submit_answer(&mut self, now: f64) {
        if !self.inputs_enabled() {
            return;
        }
        let Some(verb) = self.session.current_verb().cloned() else {
            return;
        };
        let grade = grade_answer(&verb, &self.past_simple_input, &self.past_participle_input);
        let record = AnswerRecord {
            verb,
            past_simple_input: self.past_simple_input.clone(),
            past_participle_input: self.past_participle_input.clone(),
        };
        self.pending_advance = Some(PendingAdvance {
            record,
            correct: grade.is_correct(),
            due: now + FEEDBACK_DELAY_SECS,
        });
    }

    /// Applies the held answer once its feedback pause has elapsed,
    /// otherwise schedules a repaint for the remaining wait.
    pub fn poll_pending_advance(&mut self, ctx: &egui::Context) {
        let due = match &self.pending_advance {
            Some(pending) => pending.due,
            None => return,
        };
        let now = ctx.input(|i| i.time);
        if now < due {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(due - now));
            return;
        }
        if let Some(pending) = self.pending_advance.take() {
            if let Some(outcome) = self.session.record_answer(pending.record, pending.correct) {
                self.apply_outcome(outcome, ctx);
            }
        }
    }

    /// RevealAnswer. Returns false (and changes nothing) when no hint is
    /// available.
    pub fn reveal_answer(&mut self) -> bool {
        if self.pending_advance.is_some() {
            return false;
        }
        self.session.reveal_answer()
    }

    /// The forced advance after a revealed answer: counts as incorrect,
    /// with no extra feedback pause (the forms are already on screen).
    pub fn next_after_reveal(&mut self, ctx: &egui::Context) {
        if !self.session.revealed {
            return;
        }
        let Some(verb) = self.session.current_verb().cloned() else {
            return;
        };
        let record = AnswerRecord {
            verb,
            past_simple_input: self.past_simple_input.clone(),
            past_participle_input: self.past_participle_input.clone(),
        };
        if let Some(outcome) = self.session.record_answer(record, false) {
            self.apply_outcome(outcome, ctx);
        }
    }

    pub fn acknowledge_level_up(&mut self) {
        self.session.acknowledge_level_up();
    }

    /// Restart from Results or GameOver: nothing carries over, and any
    /// scheduled advance or export is dropped.
    pub fn restart(&mut self) {
        self.session = Session::idle();
        self.pending_advance = None;
        self.export_job = None;
        self.certificate_rect = None;
        self.name_input.clear();
        self.past_simple_input.clear();
        self.past_participle_input.clear();
        self.message.clear();
    }

    /// Pronounce the current infinitive through the platform speech
    /// collaborator; missing support degrades to a visible notice.
    pub fn speak_current(&mut self) {
        let Some(verb) = self.session.current_verb() else {
            return;
        };
        if let Err(err) = speech::speak(&verb.infinitive, "en-US") {
            log::warn!("speech unavailable: {err}");
            self.message = "عذراً، جهازك لا يدعم نطق النص.".into();
        }
    }

    pub(super) fn apply_outcome(&mut self, outcome: AnswerOutcome, ctx: &egui::Context) {
        self.past_simple_input.clear();
        self.past_participle_input.clear();
        self.message.clear();

        if outcome.hint_awarded {
            self.message = "💡 حصلت على تلميح إضافي لسلسلة إجاباتك الصحيحة!".into();
        }

        match outcome.reached {
            Screen::Results => {
                log::info!(
                    "session finished: {}/{} correct in {:?}s",
                    self.session.score(),
                    self.session.total_questions(),
                    self.session.duration_seconds
                );
                if self.session.celebration_due() {
                    self.confetti.burst(
                        &ConfettiParams::default(),
                        ctx.screen_rect(),
                        &mut thread_rng(),
                    );
                }
            }
            Screen::GameOver => {
                log::info!(
                    "out of lives after {} questions, score {}",
                    self.session.position,
                    self.session.score()
                );
            }
            _ => {}
        }
    }
}
