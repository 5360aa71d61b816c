//! Multiple-choice games offered on the play screen.
//!
//! Every question has one correct Swedish word and a handful of distinct
//! distractors drawn from the same pool, shown in random order.

use crate::models::VocabularyWord;
use crate::random::{shuffle, RandomSource};

/// Placeholder for the missing word in a sentence question.
pub const BLANK: &str = "____";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizKind {
    ImageToWord,
    ListenAndChoose,
    CompleteSentence,
}

impl QuizKind {
    pub const ALL: [QuizKind; 3] = [
        QuizKind::ImageToWord,
        QuizKind::ListenAndChoose,
        QuizKind::CompleteSentence,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            QuizKind::ImageToWord => "Image to Word",
            QuizKind::ListenAndChoose => "Listen & Choose",
            QuizKind::CompleteSentence => "Complete the Sentence",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuizKind::ImageToWord => "Match images with their Swedish words",
            QuizKind::ListenAndChoose => "Select the word you hear",
            QuizKind::CompleteSentence => "Fill in the missing word",
        }
    }

    /// Stable id used in routes.
    pub fn slug(&self) -> &'static str {
        match self {
            QuizKind::ImageToWord => "image-to-word",
            QuizKind::ListenAndChoose => "listen-and-choose",
            QuizKind::CompleteSentence => "complete-sentence",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }
}

/// What the learner is shown before choosing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    Picture {
        glyph: String,
        image_url: Option<String>,
    },
    /// The word is spoken, not shown.
    Audio { word: String },
    Sentence { text: String, english: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub prompt: Prompt,
    pub answer: VocabularyWord,
    pub options: Vec<String>,
    chosen: Option<String>,
}

impl Question {
    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    pub fn is_correct(&self) -> bool {
        self.chosen.as_deref() == Some(self.answer.word.as_str())
    }
}

/// Replace the first case-insensitive occurrence of `word` in `sentence`.
pub fn blank_out(sentence: &str, word: &str) -> Option<String> {
    let needle = word.to_lowercase();
    if needle.is_empty() {
        return None;
    }
    sentence.char_indices().find_map(|(i, _)| {
        let candidate = sentence.get(i..i + word.len())?;
        (candidate.to_lowercase() == needle)
            .then(|| format!("{}{BLANK}{}", &sentence[..i], &sentence[i + word.len()..]))
    })
}

fn prompt_for(kind: QuizKind, word: &VocabularyWord) -> Option<Prompt> {
    match kind {
        QuizKind::ImageToWord => Some(Prompt::Picture {
            glyph: word.glyph.clone(),
            image_url: word.image_url.clone(),
        }),
        QuizKind::ListenAndChoose => Some(Prompt::Audio {
            word: word.word.clone(),
        }),
        QuizKind::CompleteSentence => {
            let example = word.example.as_ref()?;
            Some(Prompt::Sentence {
                text: blank_out(&example.swedish, &word.word)?,
                english: example.english.clone(),
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Quiz {
    kind: QuizKind,
    questions: Vec<Question>,
    index: usize,
}

impl Quiz {
    /// Build up to `rounds` questions from `pool`, each offering up to
    /// `options` choices. `None` when no word in the pool suits `kind`.
    pub fn new<R: RandomSource>(
        kind: QuizKind,
        pool: &[VocabularyWord],
        rounds: usize,
        options: usize,
        rng: &mut R,
    ) -> Option<Self> {
        let mut candidates: Vec<(Prompt, &VocabularyWord)> = pool
            .iter()
            .filter_map(|w| prompt_for(kind, w).map(|p| (p, w)))
            .collect();
        if candidates.is_empty() || rounds == 0 {
            return None;
        }
        shuffle(rng, &mut candidates);
        candidates.truncate(rounds);

        let mut spellings: Vec<&str> = Vec::new();
        for w in pool {
            if !spellings.contains(&w.word.as_str()) {
                spellings.push(&w.word);
            }
        }

        let questions = candidates
            .into_iter()
            .map(|(prompt, word)| {
                let mut distractors: Vec<&str> = spellings
                    .iter()
                    .copied()
                    .filter(|s| *s != word.word)
                    .collect();
                shuffle(rng, &mut distractors);
                distractors.truncate(options.saturating_sub(1));

                let mut choices: Vec<String> = distractors.into_iter().map(String::from).collect();
                choices.push(word.word.clone());
                shuffle(rng, &mut choices);

                Question {
                    prompt,
                    answer: word.clone(),
                    options: choices,
                    chosen: None,
                }
            })
            .collect();

        tracing::debug!("new {} quiz", kind.title());
        Some(Self {
            kind,
            questions,
            index: 0,
        })
    }

    pub fn kind(&self) -> QuizKind {
        self.kind
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// 1-based number of the current question.
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.questions.len())
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Answer the current question. Only the first answer counts; later calls
    /// return `None`.
    pub fn answer(&mut self, choice: &str) -> Option<bool> {
        let question = self.questions.get_mut(self.index)?;
        if question.chosen.is_some() {
            return None;
        }
        question.chosen = Some(choice.to_string());
        Some(question.is_correct())
    }

    /// Move past an answered question. Returns `false` if the current one is
    /// still unanswered.
    pub fn next(&mut self) -> bool {
        match self.current() {
            Some(q) if q.chosen.is_some() => {
                self.index += 1;
                true
            }
            _ => false,
        }
    }

    pub fn score(&self) -> usize {
        self.questions.iter().filter(|q| q.is_correct()).count()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::random::ScriptedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_blank_out() {
        assert_eq!(
            blank_out("Jag dricker kaffe.", "kaffe").as_deref(),
            Some("Jag dricker ____.")
        );
        assert_eq!(blank_out("Katten sover.", "katt").as_deref(), Some("____en sover."));
        assert_eq!(blank_out("Kärlek är viktigt.", "kärlek").as_deref(), Some("____ är viktigt."));
        assert_eq!(blank_out("Jag kör bil.", "tåg"), None);
    }

    #[test]
    fn test_options_are_distinct_and_contain_answer() {
        let pool = catalog::all_words();
        let mut rng = StdRng::seed_from_u64(7);
        let quiz = Quiz::new(QuizKind::ImageToWord, &pool, 5, 4, &mut rng).unwrap();

        assert_eq!(quiz.total(), 5);
        for q in &quiz.questions {
            assert_eq!(q.options.len(), 4);
            let unique: HashSet<_> = q.options.iter().collect();
            assert_eq!(unique.len(), 4);
            assert!(q.options.contains(&q.answer.word));
        }
    }

    #[test]
    fn test_rounds_capped_by_pool() {
        let pool: Vec<_> = catalog::all_words().into_iter().take(2).collect();
        let mut rng = ScriptedRandom::new(vec![0]);
        let quiz = Quiz::new(QuizKind::ListenAndChoose, &pool, 5, 4, &mut rng).unwrap();
        assert_eq!(quiz.total(), 2);
        assert!(quiz.questions.iter().all(|q| q.options.len() == 2));
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = ScriptedRandom::new(vec![0]);
        assert!(Quiz::new(QuizKind::ImageToWord, &[], 5, 4, &mut rng).is_none());
    }

    #[test]
    fn test_sentence_questions_hide_the_answer() {
        let pool = catalog::all_words();
        let mut rng = StdRng::seed_from_u64(42);
        let quiz = Quiz::new(QuizKind::CompleteSentence, &pool, 10, 4, &mut rng).unwrap();
        for q in &quiz.questions {
            let Prompt::Sentence { text, .. } = &q.prompt else {
                panic!("expected a sentence prompt");
            };
            assert!(text.contains(BLANK));
            assert!(!text.to_lowercase().contains(&q.answer.word.to_lowercase()));
        }
    }

    #[test]
    fn test_answer_once_then_next() {
        let pool = catalog::all_words();
        let mut rng = StdRng::seed_from_u64(1);
        let mut quiz = Quiz::new(QuizKind::ImageToWord, &pool, 3, 4, &mut rng).unwrap();

        assert!(!quiz.next());
        let answer = quiz.current().unwrap().answer.word.clone();
        assert_eq!(quiz.answer(&answer), Some(true));
        assert_eq!(quiz.answer("fel"), None);
        assert!(quiz.next());

        assert_eq!(quiz.answer("fel"), Some(false));
        assert!(quiz.next());
        let answer = quiz.current().unwrap().answer.word.clone();
        quiz.answer(&answer);
        assert!(quiz.next());

        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), 2);
        assert!(quiz.current().is_none());
        assert_eq!(quiz.answer("hund"), None);
    }

    #[test]
    fn test_slugs() {
        for kind in QuizKind::ALL {
            assert_eq!(QuizKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(QuizKind::from_slug("memory"), None);
    }
}
