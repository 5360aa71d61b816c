//! The learner's saved vocabulary: an insertion-ordered set keyed by word id.

use crate::models::VocabularyWord;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedVocabulary {
    words: Vec<VocabularyWord>,
}

impl SavedVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `word` unless a word with the same id is already saved.
    ///
    /// Returns whether the set changed.
    pub fn add(&mut self, word: VocabularyWord) -> bool {
        if self.contains(word.id) {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Remove the word with `id`. Returns whether the set changed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w.id != id);
        self.words.len() != before
    }

    pub fn contains(&self, id: u64) -> bool {
        self.words.iter().any(|w| w.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&VocabularyWord> {
        self.words.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VocabularyWord> {
        self.words.iter()
    }

    pub fn words(&self) -> &[VocabularyWord] {
        &self.words
    }

    /// The first `n` words plus how many were left out.
    pub fn preview(&self, n: usize) -> (&[VocabularyWord], usize) {
        let shown = n.min(self.words.len());
        (&self.words[..shown], self.words.len() - shown)
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// JSON array of the stored form of every word.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let stored: Vec<VocabularyWord> = self.words.iter().map(|w| w.for_storage()).collect();
        serde_json::to_string(&stored)
    }

    /// Parse a stored set. Anything that is not a JSON array of words is `None`.
    ///
    /// Duplicate ids in a hand-edited entry keep their first occurrence.
    pub fn from_json(s: &str) -> Option<Self> {
        let words: Vec<VocabularyWord> = serde_json::from_str(s).ok()?;
        let mut set = Self::new();
        for word in words {
            set.add(word);
        }
        Some(set)
    }
}

impl FromIterator<VocabularyWord> for SavedVocabulary {
    fn from_iter<I: IntoIterator<Item = VocabularyWord>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.add(word);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_add_is_idempotent_by_id() {
        let mut saved = SavedVocabulary::new();
        let hund = catalog::find(5).unwrap();

        assert!(saved.add(hund.clone()));
        assert!(!saved.add(hund.clone()));
        assert_eq!(saved.len(), 1);

        // Same id, different content: still a no-op
        let mut renamed = hund;
        renamed.word = "vovve".into();
        assert!(!saved.add(renamed));
        assert_eq!(saved.get(5).unwrap().word, "hund");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut saved: SavedVocabulary = catalog::all_words().into_iter().take(3).collect();
        assert!(!saved.remove(9999));
        assert_eq!(saved.len(), 3);

        assert!(saved.remove(2));
        assert_eq!(saved.len(), 2);
        assert!(!saved.contains(2));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut saved = SavedVocabulary::new();
        for id in [9, 2, 14] {
            saved.add(catalog::find(id).unwrap());
        }
        let ids: Vec<u64> = saved.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![9, 2, 14]);
    }

    #[test]
    fn test_preview() {
        let saved: SavedVocabulary = catalog::all_words().into_iter().take(6).collect();
        let (shown, rest) = saved.preview(4);
        assert_eq!(shown.len(), 4);
        assert_eq!(rest, 2);

        let empty = SavedVocabulary::new();
        let (shown, rest) = empty.preview(4);
        assert!(shown.is_empty());
        assert_eq!(rest, 0);
    }

    #[test]
    fn test_json_round_trip() {
        let saved: SavedVocabulary = catalog::all_words().into_iter().take(5).collect();
        let json = saved.to_json().unwrap();
        assert_eq!(SavedVocabulary::from_json(&json), Some(saved));
    }

    #[test]
    fn test_malformed_json_is_absent() {
        assert!(SavedVocabulary::from_json("not json").is_none());
        assert!(SavedVocabulary::from_json(r#"{"id":1}"#).is_none());
        assert!(SavedVocabulary::from_json(r#"[{"id":"x"}]"#).is_none());
    }

    #[test]
    fn test_duplicate_ids_in_storage_keep_first() {
        let json = r#"[
            {"id":1,"word":"hej","translation":"hello","glyph":"👋"},
            {"id":1,"word":"tack","translation":"thanks","glyph":"🙏"}
        ]"#;
        let saved = SavedVocabulary::from_json(json).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.get(1).unwrap().word, "hej");
    }
}
