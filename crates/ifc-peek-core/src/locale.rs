// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UI translations and language detection
//!
//! Locale tables are flat key/string JSON maps embedded at build time. The
//! active table is built once at startup and handed to the UI explicitly.

use crate::error::LocaleError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

const EN: &str = include_str!("../locales/en.json");
const JA: &str = include_str!("../locales/ja.json");

/// Query string parameter carrying a language override
pub const QUERY_KEY: &str = "lng";
/// Cookie carrying a language choice
pub const COOKIE_NAME: &str = "i18next";
/// Local storage key the resolved language is cached under
pub const STORAGE_KEY: &str = "i18nextLng";

/// Supported UI languages
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ja,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ja];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// Match a BCP 47 tag (`ja`, `ja-JP`, `en_US`) against the supported set
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == primary)
    }

    fn table(&self) -> &'static str {
        match self {
            Language::En => EN,
            Language::Ja => JA,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Where a language preference can come from
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetectionSource {
    QueryString,
    Cookie,
    Navigator,
    LocalStorage,
    HtmlTag,
}

impl DetectionSource {
    /// Default lookup order
    pub const DEFAULT_ORDER: [DetectionSource; 5] = [
        DetectionSource::QueryString,
        DetectionSource::Cookie,
        DetectionSource::Navigator,
        DetectionSource::LocalStorage,
        DetectionSource::HtmlTag,
    ];
}

/// Language preferences gathered from the browser
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageHints {
    pub query_string: Option<String>,
    pub cookie: Option<String>,
    /// `navigator.languages`, most preferred first
    pub navigator: Vec<String>,
    pub local_storage: Option<String>,
    pub html_tag: Option<String>,
}

impl LanguageHints {
    fn candidates(&self, source: DetectionSource) -> Vec<&str> {
        match source {
            DetectionSource::QueryString => self.query_string.as_deref().into_iter().collect(),
            DetectionSource::Cookie => self.cookie.as_deref().into_iter().collect(),
            DetectionSource::Navigator => self.navigator.iter().map(String::as_str).collect(),
            DetectionSource::LocalStorage => self.local_storage.as_deref().into_iter().collect(),
            DetectionSource::HtmlTag => self.html_tag.as_deref().into_iter().collect(),
        }
    }
}

/// First supported language in `order`, or `fallback`
pub fn detect_language(
    hints: &LanguageHints,
    order: &[DetectionSource],
    fallback: Language,
) -> Language {
    for &source in order {
        for candidate in hints.candidates(source) {
            if let Some(language) = Language::from_tag(candidate) {
                log::debug!("Language {} from {:?}", language, source);
                return language;
            }
        }
    }
    log::debug!("No supported language hint, using {}", fallback);
    fallback
}

/// Percent-decoded value of a cookie in a `document.cookie` string
///
/// A value that does not decode to UTF-8 is returned as written.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() != name {
            return None;
        }
        let value = value.trim();
        Some(
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string()),
        )
    })
}

type Table = FxHashMap<String, String>;

fn parse_table(language: Language) -> Result<Table, LocaleError> {
    serde_json::from_str(language.table()).map_err(|source| LocaleError {
        language: language.code(),
        source,
    })
}

/// Translation lookup for one language with a fallback language
#[derive(Clone, Debug, PartialEq)]
pub struct Translations {
    language: Language,
    strings: Table,
    fallback: Table,
}

impl Translations {
    /// Load the embedded tables for `language` and `fallback`
    pub fn load(language: Language, fallback: Language) -> Result<Self, LocaleError> {
        Ok(Self {
            language,
            strings: parse_table(language)?,
            fallback: if fallback == language {
                Table::default()
            } else {
                parse_table(fallback)?
            },
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translated text for `key`
    ///
    /// Falls back to the fallback language, then to the key itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 11] = [
        "title",
        "openFile",
        "clip",
        "about",
        "rightClick",
        "createAPlane",
        "doubleClick",
        "pickAnItem",
        "loadSucceeded",
        "loadFailed",
        "close",
    ];

    #[test]
    fn test_embedded_tables_have_every_key() {
        for language in Language::ALL {
            let table = parse_table(language).unwrap();
            for key in KEYS {
                assert!(table.contains_key(key), "{} is missing {}", language, key);
            }
        }
    }

    #[test]
    fn test_lookup_and_fallback() {
        let en = Translations::load(Language::En, Language::Ja).unwrap();
        assert_eq!(en.t("openFile"), "Open File");
        assert_eq!(en.t("noSuchKey"), "noSuchKey");

        let ja = Translations::load(Language::Ja, Language::Ja).unwrap();
        assert_eq!(ja.language(), Language::Ja);
        assert_ne!(ja.t("openFile"), "openFile");
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("ja-JP"), Some(Language::Ja));
        assert_eq!(Language::from_tag("EN_us"), Some(Language::En));
        assert_eq!(Language::from_tag("de"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn test_detection_precedence() {
        let order = DetectionSource::DEFAULT_ORDER;
        let mut hints = LanguageHints {
            query_string: None,
            cookie: Some("en".into()),
            navigator: vec!["fr-FR".into(), "ja".into()],
            local_storage: Some("en".into()),
            html_tag: Some("en".into()),
        };
        assert_eq!(detect_language(&hints, &order, Language::Ja), Language::En);

        hints.query_string = Some("ja".into());
        assert_eq!(detect_language(&hints, &order, Language::En), Language::Ja);

        hints.query_string = Some("xx".into());
        hints.cookie = None;
        // first supported navigator entry wins over local storage
        assert_eq!(detect_language(&hints, &order, Language::En), Language::Ja);
    }

    #[test]
    fn test_detection_fallback() {
        let hints = LanguageHints {
            navigator: vec!["de-DE".into()],
            ..Default::default()
        };
        assert_eq!(
            detect_language(&hints, &DetectionSource::DEFAULT_ORDER, Language::Ja),
            Language::Ja
        );
        assert_eq!(detect_language(&hints, &[], Language::En), Language::En);
    }

    #[test]
    fn test_cookie_value() {
        let cookies = "theme=dark; i18next=en ; other=1";
        assert_eq!(cookie_value(cookies, COOKIE_NAME), Some("en".to_string()));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("", COOKIE_NAME), None);
    }

    #[test]
    fn test_encoded_cookie_resolves() {
        let cookies = "i18next=en%2DUS";
        assert_eq!(cookie_value(cookies, COOKIE_NAME).as_deref(), Some("en-US"));

        let hints = LanguageHints {
            cookie: cookie_value(cookies, COOKIE_NAME),
            navigator: vec!["ja".into()],
            ..Default::default()
        };
        assert_eq!(
            detect_language(&hints, &DetectionSource::DEFAULT_ORDER, Language::Ja),
            Language::En
        );

        // invalid UTF-8 after decoding keeps the raw text
        assert_eq!(cookie_value("i18next=%FF", COOKIE_NAME).as_deref(), Some("%FF"));
    }
}
