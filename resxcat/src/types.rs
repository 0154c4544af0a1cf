//! Core types for resxcat.
//! Parsers decode into these; the catalog exporter serializes these.

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::{error::Error, traits::Parser};

/// A flat `name → value` translation mapping for one locale.
///
/// Ordered so that serialization is deterministic across runs.
pub type Translations = BTreeMap<String, String>;

impl Parser for Vec<LocaleResource> {
    /// Parse from any reader.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Json)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer(&mut writer, self).map_err(Error::Json)
    }
}

/// The extracted translations of a single locale.
///
/// Corresponds to one `SharedResource.<locale>.resx` source document and one
/// `<locale>.json` output artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleResource {
    /// The locale code (e.g. "en", "hi", "gu").
    pub locale: String,

    /// Flat mapping from entry name to text value.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(default)]
    pub translations: Translations,
}

impl LocaleResource {
    pub fn new(locale: impl Into<String>, translations: Translations) -> Self {
        LocaleResource {
            locale: locale.into(),
            translations,
        }
    }

    /// Looks up one entry's value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.translations.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    pub fn parse_locale_identifier(&self) -> Option<LanguageIdentifier> {
        self.locale.parse().ok()
    }

    /// Check if this resource belongs to a specific locale.
    ///
    /// Matching is by base language, so "en-US" matches "en".
    pub fn matches_locale(&self, locale: &str) -> bool {
        match (
            self.parse_locale_identifier(),
            locale.parse::<LanguageIdentifier>(),
        ) {
            (Some(own), Ok(target)) => own.language == target.language,
            _ => false,
        }
    }
}

impl Display for LocaleResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LocaleResource {{ locale: {}, entries: {} }}",
            self.locale,
            self.translations.len()
        )
    }
}

/// The per-run collection of locale resources produced by the catalog builder.
///
/// Ordered by the configured locale list; constructed fresh on each run and
/// not mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    /// Ordered list of all locale resources in this catalog.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub resources: Vec<LocaleResource>,
}

impl Catalog {
    /// Creates a new, empty `Catalog`.
    pub fn new() -> Self {
        Catalog {
            resources: Vec::new(),
        }
    }

    /// Returns an iterator over all locale resources.
    pub fn iter(&self) -> std::slice::Iter<'_, LocaleResource> {
        self.resources.iter()
    }

    /// Finds a resource by its locale code, if present.
    pub fn get_by_locale(&self, locale: &str) -> Option<&LocaleResource> {
        self.resources.iter().find(|res| res.locale == locale)
    }

    /// Finds a mutable resource by its locale code, if present.
    pub fn get_mut_by_locale(&mut self, locale: &str) -> Option<&mut LocaleResource> {
        self.resources.iter_mut().find(|res| res.locale == locale)
    }

    /// Adds a new locale resource to the collection.
    pub fn add_resource(&mut self, resource: LocaleResource) {
        self.resources.push(resource);
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_translations() -> Translations {
        let mut map = Translations::new();
        map.insert("Greeting".to_string(), "Hello".to_string());
        map.insert("Farewell".to_string(), "Goodbye".to_string());
        map
    }

    #[test]
    fn test_catalog_add_and_get_by_locale() {
        let mut catalog = Catalog::new();
        catalog.add_resource(LocaleResource::new("en", sample_translations()));

        assert_eq!(catalog.len(), 1);
        let resource = catalog.get_by_locale("en").unwrap();
        assert_eq!(resource.get("Greeting"), Some("Hello"));
        assert!(catalog.get_by_locale("hi").is_none());
    }

    #[test]
    fn test_locale_resource_parse_locale_identifier() {
        let resource = LocaleResource::new("en-US", Translations::new());
        let lang_id = resource.parse_locale_identifier().unwrap();
        assert_eq!(lang_id.language.as_str(), "en");
        assert_eq!(lang_id.region.unwrap().as_str(), "US");
    }

    #[test]
    fn test_locale_resource_matches_locale() {
        let resource = LocaleResource::new("en-US", Translations::new());
        assert!(resource.matches_locale("en"));
        assert!(resource.matches_locale("en-US"));
        assert!(!resource.matches_locale("fr"));
    }

    #[test]
    fn test_locale_resource_display() {
        let resource = LocaleResource::new("gu", sample_translations());
        let display = format!("{}", resource);
        assert!(display.contains("locale: gu"));
        assert!(display.contains("entries: 2"));
    }

    #[test]
    fn test_locale_resource_parser_trait() {
        let resources = vec![LocaleResource::new("en", sample_translations())];

        let mut writer = Vec::new();
        resources.to_writer(&mut writer).unwrap();

        let reader = std::io::Cursor::new(writer);
        let parsed = Vec::<LocaleResource>::from_reader(reader).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].locale, "en");
        assert_eq!(parsed[0].get("Farewell"), Some("Goodbye"));
    }
}
