//! Supported languages and request negotiation

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Languages the reminder catalog is translated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn langid(&self) -> LanguageIdentifier {
        // Codes are static and well-formed
        self.code().parse().unwrap_or_default()
    }

    fn from_langid(id: &LanguageIdentifier) -> Option<Self> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.langid().language == id.language)
    }

    /// Picks the best supported language for a request
    ///
    /// Accepts a single tag (`fr`, `fr-CA`) or an `Accept-Language` style
    /// list. Region variants resolve to their base language; anything
    /// unsupported or malformed falls back to English.
    pub fn negotiate(requested: &str) -> Self {
        let requested = fluent_langneg::accepted_languages::parse(requested);
        if requested.is_empty() {
            return Language::default();
        }

        let available: Vec<LanguageIdentifier> =
            Language::ALL.iter().map(Language::langid).collect();
        let default = Language::default().langid();

        negotiate_languages(
            &requested,
            &available,
            Some(&default),
            NegotiationStrategy::Filtering,
        )
        .first()
        .and_then(|id| Language::from_langid(id))
        .unwrap_or_default()
    }
}
