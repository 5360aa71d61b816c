//! # Flashcard review
//!
//! Walks a fixed list of words one at a time. For each word the learner first
//! reveals the translation and then marks it as known or still learning. After
//! the last word the review is complete and [`Review::outcome`] grades it.
//!
//! ```text
//!   Presenting --reveal--> Revealed --mark--> Presenting (next word)
//!                                     \-mark-> Complete   (after last word)
//! ```
//!
//! Calls that do not fit the current phase (marking before revealing,
//! revealing twice, anything after completion) are ignored and return `false`.

use crate::models::VocabularyWord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Presenting,
    Revealed,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    GreatJob,
    KeepPracticing,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Perfect => "Perfect! You know all the words!",
            Verdict::GreatJob => "Great job! Keep practicing the words you missed.",
            Verdict::KeepPracticing => "Keep practicing! You'll get better with time.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub known: usize,
    pub total: usize,
    pub verdict: Verdict,
    /// Whether to show the celebratory effect.
    pub celebrate: bool,
}

impl ReviewOutcome {
    /// Grade `known` out of `total` against `mastery_percent`.
    pub fn grade(known: usize, total: usize, mastery_percent: u32) -> Self {
        let verdict = if known == total {
            Verdict::Perfect
        } else if known * 100 >= total * mastery_percent as usize {
            Verdict::GreatJob
        } else {
            Verdict::KeepPracticing
        };
        Self {
            known,
            total,
            verdict,
            celebrate: verdict != Verdict::KeepPracticing,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    words: Vec<VocabularyWord>,
    index: usize,
    phase: Phase,
    known: Vec<u64>,
    steps: usize,
}

impl Review {
    /// Start a review. There is nothing to review in an empty list.
    pub fn new(words: Vec<VocabularyWord>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            index: 0,
            phase: Phase::Presenting,
            known: Vec::new(),
            steps: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// The word on screen; `None` once complete.
    pub fn current(&self) -> Option<&VocabularyWord> {
        if self.is_complete() {
            return None;
        }
        self.words.get(self.index)
    }

    /// 1-based position of the current word.
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.words.len())
    }

    pub fn total(&self) -> usize {
        self.words.len()
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    /// Number of words marked so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn reveal(&mut self) -> bool {
        if self.phase != Phase::Presenting {
            return false;
        }
        self.phase = Phase::Revealed;
        true
    }

    /// Mark the current word and move on.
    pub fn mark(&mut self, known: bool) -> bool {
        if self.phase != Phase::Revealed {
            return false;
        }
        if known {
            self.known.push(self.words[self.index].id);
        }
        self.steps += 1;
        if self.index + 1 < self.words.len() {
            self.index += 1;
            self.phase = Phase::Presenting;
        } else {
            self.phase = Phase::Complete;
            tracing::info!("review complete: {}/{}", self.known.len(), self.words.len());
        }
        true
    }

    /// Start over from the first word with every mark cleared.
    pub fn reset(&mut self) {
        self.index = 0;
        self.phase = Phase::Presenting;
        self.known.clear();
        self.steps = 0;
    }

    /// The grade, once complete.
    pub fn outcome(&self, mastery_percent: u32) -> Option<ReviewOutcome> {
        if !self.is_complete() {
            return None;
        }
        Some(ReviewOutcome::grade(self.known.len(), self.words.len(), mastery_percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn review_of(n: usize) -> Review {
        Review::new(catalog::all_words().into_iter().take(n).collect()).unwrap()
    }

    fn run(review: &mut Review, marks: &[bool]) {
        for &known in marks {
            assert!(review.reveal());
            assert!(review.mark(known));
        }
    }

    #[test]
    fn test_empty_list_cannot_start() {
        assert!(Review::new(Vec::new()).is_none());
    }

    #[test]
    fn test_exactly_n_steps_before_completion() {
        let mut review = review_of(5);
        for step in 0..5 {
            assert!(!review.is_complete(), "completed early at step {step}");
            assert_eq!(review.position(), step + 1);
            review.reveal();
            review.mark(step % 2 == 0);
        }
        assert!(review.is_complete());
        assert_eq!(review.steps(), 5);
        assert!(review.current().is_none());
    }

    #[test]
    fn test_known_count_matches_choices() {
        let mut review = review_of(4);
        run(&mut review, &[true, false, true, true]);
        assert_eq!(review.known_count(), 3);
        assert_eq!(review.outcome(80).unwrap().known, 3);
    }

    #[test]
    fn test_mark_requires_reveal() {
        let mut review = review_of(2);
        assert!(!review.mark(true));
        assert_eq!(review.phase(), Phase::Presenting);
        assert!(review.reveal());
        assert!(!review.reveal());
        assert!(review.mark(true));
        assert_eq!(review.phase(), Phase::Presenting);
        assert_eq!(review.position(), 2);
    }

    #[test]
    fn test_threshold_messages() {
        assert_eq!(ReviewOutcome::grade(5, 5, 80).verdict, Verdict::Perfect);
        // 4 of 5 is exactly 80%: great job, not perfect
        assert_eq!(ReviewOutcome::grade(4, 5, 80).verdict, Verdict::GreatJob);
        assert_eq!(ReviewOutcome::grade(3, 5, 80).verdict, Verdict::KeepPracticing);
        assert_eq!(ReviewOutcome::grade(7, 10, 80).verdict, Verdict::KeepPracticing);
        assert_eq!(ReviewOutcome::grade(9, 10, 80).verdict, Verdict::GreatJob);
    }

    #[test]
    fn test_celebration_follows_verdict() {
        assert!(ReviewOutcome::grade(1, 1, 80).celebrate);
        assert!(ReviewOutcome::grade(4, 5, 80).celebrate);
        assert!(!ReviewOutcome::grade(0, 1, 80).celebrate);
    }

    #[test]
    fn test_outcome_only_when_complete() {
        let mut review = review_of(2);
        run(&mut review, &[true]);
        assert!(review.outcome(80).is_none());
        run(&mut review, &[true]);
        let outcome = review.outcome(80).unwrap();
        assert_eq!(outcome.verdict.message(), "Perfect! You know all the words!");
    }

    #[test]
    fn test_reset_clears_marks() {
        let mut review = review_of(3);
        run(&mut review, &[true, true, false]);
        assert!(review.is_complete());

        review.reset();
        assert_eq!(review.phase(), Phase::Presenting);
        assert_eq!(review.position(), 1);
        assert_eq!(review.known_count(), 0);
        assert_eq!(review.steps(), 0);
        assert_eq!(review.current().unwrap().id, 1);
    }

    #[test]
    fn test_nothing_happens_after_completion() {
        let mut review = review_of(1);
        run(&mut review, &[false]);
        assert!(!review.reveal());
        assert!(!review.mark(true));
        assert_eq!(review.known_count(), 0);
    }
}
