//! Built-in vocabulary browsed on the explore screen.

use crate::models::{Category, ExampleSentence, VocabularyWord};

struct Entry {
    id: u64,
    word: &'static str,
    translation: &'static str,
    example: (&'static str, &'static str),
    glyph: &'static str,
    category: Category,
}

const fn entry(
    id: u64,
    word: &'static str,
    translation: &'static str,
    example: (&'static str, &'static str),
    glyph: &'static str,
    category: Category,
) -> Entry {
    Entry {
        id,
        word,
        translation,
        example,
        glyph,
        category,
    }
}

#[rustfmt::skip]
const CATALOG: &[Entry] = &[
    entry(1, "äpple", "apple", ("Jag äter ett äpple.", "I eat an apple."), "🍎", Category::Food),
    entry(2, "kaffe", "coffee", ("Jag dricker kaffe.", "I drink coffee."), "☕", Category::Food),
    entry(3, "bröd", "bread", ("Brödet är färskt.", "The bread is fresh."), "🍞", Category::Food),
    entry(4, "ost", "cheese", ("Jag gillar ost.", "I like cheese."), "🧀", Category::Food),
    entry(5, "hund", "dog", ("Min hund är snäll.", "My dog is kind."), "🐕", Category::Animals),
    entry(6, "katt", "cat", ("Katten sover.", "The cat is sleeping."), "🐈", Category::Animals),
    entry(7, "häst", "horse", ("Hästen springer fort.", "The horse runs fast."), "🐎", Category::Animals),
    entry(8, "bil", "car", ("Jag kör bil.", "I drive a car."), "🚗", Category::Transport),
    entry(9, "tåg", "train", ("Tåget är sent.", "The train is late."), "🚆", Category::Transport),
    entry(10, "cykel", "bicycle", ("Jag cyklar till jobbet på min cykel.", "I ride my bicycle to work."), "🚲", Category::Transport),
    entry(11, "träd", "tree", ("Trädet är högt.", "The tree is tall."), "🌳", Category::Nature),
    entry(12, "blomma", "flower", ("Blomman är vacker.", "The flower is beautiful."), "🌸", Category::Nature),
    entry(13, "sjö", "lake", ("Vi badar i sjön.", "We swim in the lake."), "🏞️", Category::Nature),
    entry(14, "bok", "book", ("Jag läser en bok.", "I read a book."), "📖", Category::Objects),
    entry(15, "nyckel", "key", ("Var är min nyckel?", "Where is my key?"), "🔑", Category::Objects),
    entry(16, "stol", "chair", ("Stolen är bekväm.", "The chair is comfortable."), "🪑", Category::Objects),
    entry(17, "tröja", "sweater", ("Min tröja är varm.", "My sweater is warm."), "🧶", Category::Clothing),
    entry(18, "skor", "shoes", ("Mina skor är nya.", "My shoes are new."), "👟", Category::Clothing),
    entry(19, "mössa", "hat", ("Ta på dig mössan!", "Put on your hat!"), "🧢", Category::Clothing),
    entry(20, "hus", "house", ("Mitt hus är stort.", "My house is big."), "🏠", Category::Places),
    entry(21, "skola", "school", ("Barnen går till skolan.", "The children go to school."), "🏫", Category::Places),
    entry(22, "restaurang", "restaurant", ("Vi äter på en restaurang.", "We eat at a restaurant."), "🍽️", Category::Places),
    entry(23, "musik", "music", ("Jag lyssnar på musik.", "I listen to music."), "🎵", Category::Entertainment),
    entry(24, "film", "movie", ("Vi ser en film ikväll.", "We are watching a movie tonight."), "🎬", Category::Entertainment),
    entry(25, "spel", "game", ("Spelet är roligt.", "The game is fun."), "🎲", Category::Entertainment),
    entry(26, "vän", "friend", ("Hon är min bästa vän.", "She is my best friend."), "🤝", Category::People),
    entry(27, "familj", "family", ("Min familj bor i Stockholm.", "My family lives in Stockholm."), "👪", Category::People),
    entry(28, "kärlek", "love", ("Kärlek är viktigt.", "Love is important."), "❤️", Category::People),
];

impl Entry {
    fn to_word(&self) -> VocabularyWord {
        VocabularyWord {
            id: self.id,
            word: self.word.to_string(),
            translation: self.translation.to_string(),
            example: Some(ExampleSentence::new(self.example.0, self.example.1)),
            glyph: self.glyph.to_string(),
            image_url: None,
            category: Some(self.category),
        }
    }
}

/// Every catalog word, in table order.
pub fn all_words() -> Vec<VocabularyWord> {
    CATALOG.iter().map(Entry::to_word).collect()
}

/// Catalog words whose category equals `category`, in table order.
pub fn words_in(category: Category) -> Vec<VocabularyWord> {
    CATALOG
        .iter()
        .filter(|e| e.category == category)
        .map(Entry::to_word)
        .collect()
}

pub fn find(id: u64) -> Option<VocabularyWord> {
    CATALOG.iter().find(|e| e.id == id).map(Entry::to_word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_filter_matches_exactly_the_category() {
        let all = all_words();
        for category in Category::ALL {
            let filtered = words_in(category);
            let expected: Vec<_> = all
                .iter()
                .filter(|w| w.category == Some(category))
                .cloned()
                .collect();
            assert_eq!(filtered, expected, "category {}", category.id());
            assert!(filtered.iter().all(|w| w.category == Some(category)));
        }
    }

    #[test]
    fn test_every_category_has_words() {
        for category in Category::ALL {
            assert!(!words_in(category).is_empty(), "{} is empty", category.id());
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<u64> = all_words().iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), all_words().len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find(5).map(|w| w.word), Some("hund".to_string()));
        assert!(find(9999).is_none());
    }
}
