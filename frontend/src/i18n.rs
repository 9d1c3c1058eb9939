use chrono::{Datelike, NaiveDate};
use log::debug;
use web_sys::window;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    De,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// Matches on the primary subtag of a BCP-47 tag, so `de-AT` is German.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::De => "DE",
        }
    }

    /// Stored choice first, then the browser language, then English.
    pub fn detect() -> Self {
        let stored = window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(config::LOCALE_STORAGE_KEY).ok())
            .flatten();
        let browser = window().and_then(|w| w.navigator().language());
        let locale = resolve(stored.as_deref(), browser.as_deref());
        debug!("locale {:?} (stored {:?}, browser {:?})", locale, stored, browser);
        locale
    }

    pub fn persist(self) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(config::LOCALE_STORAGE_KEY, self.code());
            }
            if let Some(root) = window.document().and_then(|d| d.document_element()) {
                let _ = root.set_attribute("lang", self.code());
            }
        }
    }
}

fn resolve(stored: Option<&str>, browser: Option<&str>) -> Locale {
    stored
        .and_then(Locale::from_tag)
        .or_else(|| browser.and_then(Locale::from_tag))
        .unwrap_or(Locale::En)
}

/// The locale chosen in the app shell.
#[hook]
pub fn use_locale() -> Locale {
    use_context::<Locale>().unwrap_or(Locale::En)
}

/// A short string in every supported locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub de: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, de: &'static str) -> Self {
        Self { en, de }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::De => self.de,
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];

pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let month = date.month0() as usize;
    match locale {
        Locale::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
        Locale::De => format!("{}. {} {}", date.day(), MONTHS_DE[month], date.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_on_primary_subtag() {
        assert_eq!(Locale::from_tag("de-AT"), Some(Locale::De));
        assert_eq!(Locale::from_tag("EN_gb"), Some(Locale::En));
        assert_eq!(Locale::from_tag("de"), Some(Locale::De));
        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn stored_choice_beats_browser_language() {
        assert_eq!(resolve(Some("de"), Some("en-US")), Locale::De);
        assert_eq!(resolve(Some("xx"), Some("de-CH")), Locale::De);
        assert_eq!(resolve(None, Some("it")), Locale::En);
        assert_eq!(resolve(None, None), Locale::En);
    }

    #[test]
    fn codes_round_trip_through_tags() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.code()), Some(locale));
            assert_eq!(Locale::from_tag(locale.label()), Some(locale));
        }
    }

    #[test]
    fn dates_follow_locale_conventions() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_date(date, Locale::En), "March 1, 2025");
        assert_eq!(format_date(date, Locale::De), "1. März 2025");
    }
}
