use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// One vocabulary entry as served by `GET /api/word`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: String,
    pub word_en: String,
    /// Display term in the requested language, `word_en` when untranslated.
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<HashMap<String, String>>,
    pub category: String,
    pub difficulty: f64,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

impl WordRecord {
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.word_en.trim().is_empty()
    }

    pub fn display_term(&self, lang: Language) -> &str {
        self.terms
            .as_ref()
            .and_then(|terms| terms.get(&lang.code()))
            .map(String::as_str)
            .filter(|t| !t.trim().is_empty())
            .or_else(|| Some(self.term.as_str()).filter(|t| !t.trim().is_empty()))
            .unwrap_or(self.word_en.as_str())
    }
}

/// Picks the term shown for `word_en`, silently keeping the canonical form
/// when no usable translation exists.
pub fn localized_term(word_en: &str, translation: Option<&str>) -> String {
    translation
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(word_en)
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{
        language::Language,
        word::{localized_term, WordRecord},
    };

    #[test]
    fn display_term_should_prefer_the_terms_dictionary() {
        let mut word = record("cat", "Katze");
        word.terms = Some(HashMap::from([
            ("de".to_string(), "Katze".to_string()),
            ("krd".to_string(), "pisîk".to_string()),
        ]));

        assert_eq!(word.display_term(Language::Krd), "pisîk");
        assert_eq!(word.display_term(Language::De), "Katze");
    }

    #[test]
    fn display_term_should_fall_back_to_term_then_canonical() {
        let word = record("cat", "Katze");
        assert_eq!(word.display_term(Language::Krd), "Katze");

        let untranslated = record("cat", "  ");
        assert_eq!(untranslated.display_term(Language::De), "cat");
    }

    #[test]
    fn localized_term_should_never_be_empty() {
        assert_eq!(localized_term("bread", Some("Brot")), "Brot");
        assert_eq!(localized_term("bread", Some("")), "bread");
        assert_eq!(localized_term("bread", None), "bread");
    }

    #[test]
    fn record_should_deserialize_from_api_json() {
        let json = r#"{
            "id": "42",
            "word_en": "apple",
            "term": "Apfel",
            "lang": "de",
            "category": "food",
            "difficulty": 1,
            "imageUrl": null
        }"#;
        let word: WordRecord = serde_json::from_str(json).unwrap();

        assert_eq!(word.term, "Apfel");
        assert_eq!(word.lang, Some(Language::De));
        assert_eq!(word.image_url, None);
        assert!(word.is_valid());
    }

    // Infra ----------------------------------------------------------------

    fn record(word_en: &str, term: &str) -> WordRecord {
        WordRecord {
            id: "1".to_string(),
            word_en: word_en.to_string(),
            term: term.to_string(),
            lang: None,
            terms: None,
            category: "animals".to_string(),
            difficulty: 1.0,
            image_url: None,
        }
    }
}
