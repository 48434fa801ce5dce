use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    Default,
    Display,
    EnumIter,
    EnumString,
    EnumMessage,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[strum(message = "English")]
    En,
    #[strum(message = "Deutsch")]
    De,
    #[default]
    #[strum(message = "Kurmancî")]
    Krd,
}

impl Language {
    /// Language of `word_en`, the form every word record carries.
    pub const CANONICAL: Language = Language::En;

    pub fn is_canonical(&self) -> bool {
        *self == Language::CANONICAL
    }

    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn label(&self) -> &'static str {
        self.get_message().unwrap_or("?")
    }

    pub fn options() -> String {
        Language::iter()
            .map(|l| format!("{} ({})", l.label(), l))
            .join(", ")
    }
}

#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    Display,
    EnumIter,
    EnumString,
    EnumMessage,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[strum(message = "Food")]
    Food,
    #[strum(message = "Places")]
    Places,
    #[strum(message = "Objects")]
    Objects,
    #[strum(message = "Animals")]
    Animals,
    #[strum(message = "Body")]
    Body,
    #[strum(message = "Colors")]
    Colors,
    #[strum(message = "Professions")]
    Professions,
    #[strum(message = "Time")]
    Time,
}

impl Category {
    pub fn slug(&self) -> String {
        self.to_string()
    }

    pub fn label(&self) -> &'static str {
        self.get_message().unwrap_or("?")
    }

    /// An absent or blank slug means "any category".
    pub fn from_slug(slug: Option<&str>) -> Result<Option<Category>, strum::ParseError> {
        match slug.map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::language::{Category, Language};

    #[test]
    fn default_language_should_be_kurmanji() {
        assert_eq!(Language::default(), Language::Krd);
        assert_eq!(Language::default().code(), "krd");
    }

    #[test]
    fn language_should_parse_codes_case_insensitively() {
        assert_eq!(Language::from_str("KRD"), Ok(Language::Krd));
        assert_eq!(Language::from_str("de"), Ok(Language::De));
        assert!(Language::from_str("fr").is_err());
    }

    #[test]
    fn language_code_should_be_lowercase() {
        assert_eq!(Language::Krd.code(), "krd");
        assert!(Language::En.is_canonical());
        assert!(!Language::De.is_canonical());
    }

    #[test]
    fn blank_category_slug_should_mean_any() {
        assert_eq!(Category::from_slug(None), Ok(None));
        assert_eq!(Category::from_slug(Some("  ")), Ok(None));
        assert_eq!(Category::from_slug(Some("food")), Ok(Some(Category::Food)));
        assert!(Category::from_slug(Some("weather")).is_err());
    }

    #[test]
    fn serde_should_use_slugs() {
        let json = serde_json::to_string(&Category::Professions).unwrap();
        assert_eq!(json, "\"professions\"");
        let lang: Language = serde_json::from_str("\"krd\"").unwrap();
        assert_eq!(lang, Language::Krd);
    }
}
