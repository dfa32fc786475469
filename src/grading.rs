//! Answer grading: pure functions, no state.
//!
//! Each input is trimmed and case-folded, then checked for membership in the
//! accepted-variant set of its field (the field split on `/`). An empty
//! trimmed input is simply not a member and grades incorrect.

use crate::model::Verb;

/// Per-field verdict for one submitted answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grade {
    pub past_simple_ok: bool,
    pub past_participle_ok: bool,
}

impl Grade {
    /// Overall correctness requires both fields correct.
    pub fn is_correct(&self) -> bool {
        self.past_simple_ok && self.past_participle_ok
    }
}

pub fn grade_answer(verb: &Verb, past_simple: &str, past_participle: &str) -> Grade {
    Grade {
        past_simple_ok: field_matches(&verb.past_simple, past_simple),
        past_participle_ok: field_matches(&verb.past_participle, past_participle),
    }
}

fn field_matches(accepted: &str, input: &str) -> bool {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }
    accepted
        .split('/')
        .any(|variant| variant.trim().to_lowercase() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dream() -> Verb {
        Verb {
            infinitive: "dream".into(),
            past_simple: "dreamed/dreamt".into(),
            past_participle: "dreamed/dreamt".into(),
            arabic: "يحلم".into(),
        }
    }

    #[test]
    fn accepts_any_variant_with_trim_and_case_fold() {
        let g = grade_answer(&dream(), " Dreamt ", "DREAMED");
        assert!(g.past_simple_ok);
        assert!(g.past_participle_ok);
        assert!(g.is_correct());
    }

    #[test]
    fn misspelling_is_incorrect() {
        let g = grade_answer(&dream(), "dreamd", "dreamt");
        assert!(!g.past_simple_ok);
        assert!(g.past_participle_ok);
        assert!(!g.is_correct());
    }

    #[test]
    fn empty_input_grades_incorrect_without_panicking() {
        let g = grade_answer(&dream(), "", "   ");
        assert!(!g.past_simple_ok);
        assert!(!g.past_participle_ok);
        assert!(!g.is_correct());
    }

    #[test]
    fn both_fields_must_be_correct() {
        let verb = Verb {
            infinitive: "go".into(),
            past_simple: "went".into(),
            past_participle: "gone".into(),
            arabic: "يذهب".into(),
        };
        assert!(!grade_answer(&verb, "went", "went").is_correct());
        assert!(!grade_answer(&verb, "gone", "gone").is_correct());
        assert!(grade_answer(&verb, "went", "gone").is_correct());
    }

    #[test]
    fn single_variant_field_does_not_match_the_delimiter() {
        let verb = Verb {
            infinitive: "be".into(),
            past_simple: "was/were".into(),
            past_participle: "been".into(),
            arabic: "يكون".into(),
        };
        assert!(grade_answer(&verb, "were", "been").is_correct());
        assert!(!grade_answer(&verb, "was/were", "been").is_correct());
    }
}
