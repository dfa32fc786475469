use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{AnswerRecord, Screen, Verb};

pub const TOTAL_LIVES: u32 = 6;
pub const STARTING_HINTS: u32 = 3;
/// Every Nth consecutive correct answer grants one bonus hint.
pub const HINT_STREAK: u32 = 5;
/// Score share that triggers the confetti celebration on Results.
pub const CELEBRATION_RATIO: f32 = 0.80;
pub const DEFAULT_STUDENT_NAME: &str = "طالب";

/// One quiz attempt, from StartQuiz until Results or GameOver. Created fresh
/// on every start, never persisted; all transitions go through the methods
/// below so the counters stay consistent.
pub struct Session {
    pub screen: Screen,
    pub student_name: String,
    /// Fixed-for-the-session uniform random permutation of the verb bank.
    pub verb_order: Vec<Verb>,
    /// 0-based index into `verb_order`, monotonically increasing.
    pub position: usize,
    pub correct_list: Vec<Verb>,
    pub incorrect_list: Vec<AnswerRecord>,
    pub lives: u32,
    pub hints: u32,
    pub consecutive_correct: u32,
    pub level: u32,
    /// Transient level-up interstitial; blocks progression until acknowledged.
    pub show_level_start: bool,
    /// The current question's answer was revealed with a hint; the next
    /// advance is forced down the incorrect path.
    pub revealed: bool,
    started_at: Option<Instant>,
    /// Frozen once, when the session reaches Results or GameOver.
    pub duration_seconds: Option<u64>,
}

/// What a single SubmitAnswer did to the session, so the caller can trigger
/// sounds, overlays and confetti without re-deriving it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub hint_awarded: bool,
    pub leveled_up: bool,
    pub reached: Screen,
}

impl Default for Session {
    fn default() -> Self {
        Session::idle()
    }
}

impl Session {
    /// Entry screen state: no permutation drawn yet, nothing counted.
    pub fn idle() -> Self {
        Self {
            screen: Screen::Idle,
            student_name: String::new(),
            verb_order: Vec::new(),
            position: 0,
            correct_list: Vec::new(),
            incorrect_list: Vec::new(),
            lives: TOTAL_LIVES,
            hints: STARTING_HINTS,
            consecutive_correct: 0,
            level: 1,
            show_level_start: false,
            revealed: false,
            started_at: None,
            duration_seconds: None,
        }
    }

    /// StartQuiz: reset every counter, draw a fresh Fisher–Yates permutation
    /// and record the start timestamp. A blank name falls back to the
    /// default student name.
    pub fn start(name: &str, verbs: &[Verb], rng: &mut impl Rng) -> Self {
        let trimmed = name.trim();
        let mut verb_order = verbs.to_vec();
        verb_order.shuffle(rng);

        Self {
            screen: Screen::Quiz,
            student_name: if trimmed.is_empty() {
                DEFAULT_STUDENT_NAME.to_owned()
            } else {
                trimmed.to_owned()
            },
            verb_order,
            started_at: Some(Instant::now()),
            ..Session::idle()
        }
    }

    pub fn total_questions(&self) -> usize {
        self.verb_order.len()
    }

    /// Level boundary interval: `ceil(total / 10)`.
    pub fn questions_per_level(&self) -> usize {
        self.total_questions().div_ceil(10).max(1)
    }

    pub fn current_verb(&self) -> Option<&Verb> {
        if self.screen == Screen::Quiz {
            self.verb_order.get(self.position)
        } else {
            None
        }
    }

    pub fn score(&self) -> usize {
        self.correct_list.len()
    }

    /// Score share in 0..=1, used for the heat background and the
    /// celebration decision.
    pub fn heat_level(&self) -> f32 {
        let total = self.total_questions();
        if total == 0 {
            0.0
        } else {
            self.score() as f32 / total as f32
        }
    }

    pub fn percentage(&self) -> u32 {
        (self.heat_level() * 100.0).round() as u32
    }

    /// Whether the one-shot celebratory effect should fire on Results.
    /// The engine only decides; rendering belongs to the confetti overlay.
    pub fn celebration_due(&self) -> bool {
        self.screen == Screen::Results && self.heat_level() >= CELEBRATION_RATIO
    }

    /// SubmitAnswer (also the forced-incorrect advance after a reveal).
    /// Returns `None` outside the Quiz screen; the session is untouched then.
    pub fn record_answer(&mut self, record: AnswerRecord, correct: bool) -> Option<AnswerOutcome> {
        if self.screen != Screen::Quiz {
            return None;
        }
        self.revealed = false;

        let mut hint_awarded = false;
        if correct {
            self.correct_list.push(record.verb);
            self.consecutive_correct += 1;
            if self.consecutive_correct % HINT_STREAK == 0 {
                self.hints += 1;
                hint_awarded = true;
            }
        } else {
            self.incorrect_list.push(record);
            self.consecutive_correct = 0;
            self.lives -= 1;
            if self.lives == 0 {
                // Lives exhausted: freeze the clock without advancing.
                self.finish(Screen::GameOver);
                return Some(AnswerOutcome {
                    correct,
                    hint_awarded: false,
                    leveled_up: false,
                    reached: Screen::GameOver,
                });
            }
        }

        let next = self.position + 1;
        let total = self.total_questions();
        self.position = next;

        if next < total {
            let mut leveled_up = false;
            // Never on the final question: there is nothing left to level into.
            if next % self.questions_per_level() == 0 {
                self.level += 1;
                self.show_level_start = true;
                leveled_up = true;
            }
            Some(AnswerOutcome {
                correct,
                hint_awarded,
                leveled_up,
                reached: Screen::Quiz,
            })
        } else {
            self.finish(Screen::Results);
            Some(AnswerOutcome {
                correct,
                hint_awarded,
                leveled_up: false,
                reached: Screen::Results,
            })
        }
    }

    /// RevealAnswer: consume one hint and show the correct forms for the
    /// current question. Fails (no-op) when no hints are left, the answer is
    /// already showing, or we are not in the quiz.
    pub fn reveal_answer(&mut self) -> bool {
        if self.screen != Screen::Quiz || self.revealed || self.hints == 0 {
            return false;
        }
        self.hints -= 1;
        self.revealed = true;
        true
    }

    pub fn acknowledge_level_up(&mut self) {
        self.show_level_start = false;
    }

    fn finish(&mut self, screen: Screen) {
        self.screen = screen;
        if self.duration_seconds.is_none() {
            self.duration_seconds = self
                .started_at
                .map(|t| t.elapsed().as_secs_f64().round() as u64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank(n: usize) -> Vec<Verb> {
        (0..n)
            .map(|i| Verb {
                infinitive: format!("verb{i}"),
                past_simple: format!("ps{i}"),
                past_participle: format!("pp{i}"),
                arabic: format!("g{i}"),
            })
            .collect()
    }

    fn started(n: usize) -> Session {
        let mut rng = StdRng::seed_from_u64(7);
        Session::start("سارة", &bank(n), &mut rng)
    }

    fn answer(session: &Session, correct: bool) -> AnswerRecord {
        let verb = session.current_verb().expect("quiz must be active").clone();
        if correct {
            AnswerRecord {
                past_simple_input: verb.past_simple.clone(),
                past_participle_input: verb.past_participle.clone(),
                verb,
            }
        } else {
            AnswerRecord {
                verb,
                past_simple_input: "wrong".into(),
                past_participle_input: "wrong".into(),
            }
        }
    }

    fn submit(session: &mut Session, correct: bool) -> AnswerOutcome {
        let record = answer(session, correct);
        session.record_answer(record, correct).expect("in quiz")
    }

    #[test]
    fn start_resets_counters_and_draws_a_permutation() {
        let verbs = bank(12);
        let mut rng = StdRng::seed_from_u64(1);
        let s = Session::start("  ", &verbs, &mut rng);

        assert_eq!(s.screen, Screen::Quiz);
        assert_eq!(s.student_name, DEFAULT_STUDENT_NAME);
        assert_eq!(s.lives, TOTAL_LIVES);
        assert_eq!(s.hints, STARTING_HINTS);
        assert_eq!(s.level, 1);
        assert_eq!(s.position, 0);
        assert_eq!(s.total_questions(), 12);

        // Same verbs, just reordered.
        let mut shuffled: Vec<_> = s.verb_order.iter().map(|v| &v.infinitive).collect();
        let mut original: Vec<_> = verbs.iter().map(|v| &v.infinitive).collect();
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn score_always_equals_correct_list_length() {
        let mut s = started(10);
        for correct in [true, false, true, true, false, true] {
            submit(&mut s, correct);
            assert_eq!(s.score(), s.correct_list.len());
        }
        assert_eq!(s.score(), 4);
        assert_eq!(s.incorrect_list.len(), 2);
        assert_eq!(s.lives, TOTAL_LIVES - 2);
    }

    #[test]
    fn six_straight_misses_end_the_session_exactly_on_the_sixth() {
        let mut s = started(20);
        for i in 0..5 {
            let out = submit(&mut s, false);
            assert_eq!(out.reached, Screen::Quiz);
            assert_eq!(s.lives, TOTAL_LIVES - 1 - i);
        }
        let out = submit(&mut s, false);
        assert_eq!(out.reached, Screen::GameOver);
        assert_eq!(s.screen, Screen::GameOver);
        assert_eq!(s.lives, 0);
        assert_eq!(s.incorrect_list.len(), 6);
        assert!(s.duration_seconds.is_some());

        // Terminal: further submissions are rejected and change nothing.
        let record = AnswerRecord {
            verb: s.verb_order[0].clone(),
            past_simple_input: String::new(),
            past_participle_input: String::new(),
        };
        assert!(s.record_answer(record, false).is_none());
        assert_eq!(s.incorrect_list.len(), 6);
        assert_eq!(s.lives, 0);
    }

    #[test]
    fn perfect_run_reaches_results_with_celebration() {
        let mut s = started(10);
        for _ in 0..10 {
            submit(&mut s, true);
        }
        assert_eq!(s.screen, Screen::Results);
        assert_eq!(s.score(), 10);
        assert!(s.incorrect_list.is_empty());
        assert_eq!(s.position, 10);
        assert!(s.celebration_due());
        assert!(s.duration_seconds.is_some());
    }

    #[test]
    fn no_celebration_below_eighty_percent() {
        let mut s = started(10);
        for i in 0..10 {
            submit(&mut s, i < 7);
        }
        assert_eq!(s.screen, Screen::Results);
        assert_eq!(s.percentage(), 70);
        assert!(!s.celebration_due());
    }

    #[test]
    fn level_up_fires_on_each_boundary_but_never_on_the_last_question() {
        // total 20 -> questions_per_level 2 -> boundaries after 2,4,...,18.
        let mut s = started(20);
        assert_eq!(s.questions_per_level(), 2);

        let mut level_ups = Vec::new();
        for _ in 0..20 {
            if s.show_level_start {
                s.acknowledge_level_up();
            }
            let out = submit(&mut s, true);
            if out.leveled_up {
                level_ups.push(s.position);
            }
        }
        assert_eq!(level_ups, vec![2, 4, 6, 8, 10, 12, 14, 16, 18]);
        assert_eq!(s.level, 10);
        assert_eq!(s.screen, Screen::Results);
        assert!(!s.show_level_start);
    }

    #[test]
    fn hint_streak_grants_once_per_crossing_and_again_after_a_reset() {
        let mut s = started(30);
        for _ in 0..4 {
            assert!(!submit(&mut s, true).hint_awarded);
        }
        let out = submit(&mut s, true);
        assert!(out.hint_awarded);
        assert_eq!(s.hints, STARTING_HINTS + 1);

        // A miss resets the streak; rebuilding to five grants another hint.
        submit(&mut s, false);
        assert_eq!(s.consecutive_correct, 0);
        for _ in 0..4 {
            assert!(!submit(&mut s, true).hint_awarded);
        }
        assert!(submit(&mut s, true).hint_awarded);
        assert_eq!(s.hints, STARTING_HINTS + 2);
    }

    #[test]
    fn reveal_consumes_a_hint_and_forces_the_incorrect_path() {
        let mut s = started(10);
        assert!(s.reveal_answer());
        assert_eq!(s.hints, STARTING_HINTS - 1);
        assert!(s.revealed);
        // Revealing twice on the same question is refused.
        assert!(!s.reveal_answer());
        assert_eq!(s.hints, STARTING_HINTS - 1);

        let out = submit(&mut s, false);
        assert!(!out.correct);
        assert_eq!(s.lives, TOTAL_LIVES - 1);
        assert_eq!(s.incorrect_list.len(), 1);
        assert!(!s.revealed, "reveal flag clears on advance");
    }

    #[test]
    fn reveal_with_no_hints_left_is_a_reported_no_op() {
        let mut s = started(10);
        s.hints = 0;
        let lives = s.lives;
        let position = s.position;
        assert!(!s.reveal_answer());
        assert_eq!(s.hints, 0);
        assert_eq!(s.lives, lives);
        assert_eq!(s.position, position);
        assert!(s.correct_list.is_empty());
        assert!(s.incorrect_list.is_empty());
    }

    #[test]
    fn questions_per_level_rounds_up() {
        assert_eq!(started(20).questions_per_level(), 2);
        assert_eq!(started(10).questions_per_level(), 1);
        assert_eq!(started(95).questions_per_level(), 10);
    }

    #[test]
    fn idle_session_has_no_current_verb() {
        let s = Session::idle();
        assert_eq!(s.screen, Screen::Idle);
        assert!(s.current_verb().is_none());
        assert_eq!(s.total_questions(), 0);
    }
}
