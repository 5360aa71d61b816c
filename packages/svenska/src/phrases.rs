//! Common phrases listed under the translator.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phrase {
    pub swedish: &'static str,
    pub english: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhraseCategory {
    pub name: &'static str,
    pub phrases: &'static [Phrase],
}

const fn p(swedish: &'static str, english: &'static str) -> Phrase {
    Phrase { swedish, english }
}

pub const PHRASE_CATEGORIES: &[PhraseCategory] = &[
    PhraseCategory {
        name: "Greetings",
        phrases: &[
            p("Hej", "Hello"),
            p("God morgon", "Good morning"),
            p("God kväll", "Good evening"),
            p("Hej då", "Goodbye"),
        ],
    },
    PhraseCategory {
        name: "Basics",
        phrases: &[
            p("Ja", "Yes"),
            p("Nej", "No"),
            p("Tack", "Thank you/Please"),
            p("Varsågod", "You're welcome"),
        ],
    },
    PhraseCategory {
        name: "Eating",
        phrases: &[
            p("Jag är hungrig", "I am hungry"),
            p("Kan jag få menyn?", "Can I get the menu?"),
            p("Vatten, tack", "Water, please"),
            p("Det var läckert", "That was delicious"),
        ],
    },
];

/// Which phrase categories are expanded. Greetings starts open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseBook {
    expanded: Vec<&'static str>,
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self {
            expanded: vec!["Greetings"],
        }
    }
}

impl PhraseBook {
    pub fn is_expanded(&self, category: &str) -> bool {
        self.expanded.iter().any(|c| *c == category)
    }

    pub fn toggle(&mut self, category: &str) {
        if self.is_expanded(category) {
            self.expanded.retain(|c| *c != category);
        } else if let Some(known) = PHRASE_CATEGORIES.iter().find(|c| c.name == category) {
            self.expanded.push(known.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings_start_expanded() {
        let book = PhraseBook::default();
        assert!(book.is_expanded("Greetings"));
        assert!(!book.is_expanded("Basics"));
    }

    #[test]
    fn test_toggle() {
        let mut book = PhraseBook::default();
        book.toggle("Eating");
        book.toggle("Greetings");
        assert!(book.is_expanded("Eating"));
        assert!(!book.is_expanded("Greetings"));

        // Unknown categories are ignored
        book.toggle("Weather");
        assert!(!book.is_expanded("Weather"));
    }

    #[test]
    fn test_every_category_has_four_phrases() {
        assert_eq!(PHRASE_CATEGORIES.len(), 3);
        assert!(PHRASE_CATEGORIES.iter().all(|c| c.phrases.len() == 4));
    }
}
