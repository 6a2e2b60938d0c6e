//! Moonlore API Routes
//!
//! - /api/ai/* - recommendation, team analysis, lore chat
//! - /api/limbus/* - sinners, identities, E.G.O., Mirror Dungeon guide
//! - /api/lobcorp/* - abnormalities, sephirahs
//! - /api/ruina/* - lore characters, factions, events
//! - /api/auth/* - proxy over the external auth provider

pub mod ai;
pub mod auth;
pub mod limbus;
pub mod lobcorp;
pub mod ruina;
pub mod swagger;

use moonlore::Locale;
use serde::Deserialize;

/// `?locale=` query on bilingual catalog reads. Unknown values fall back to
/// English rather than erroring, like the site's locale routing did.
#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

impl LocaleQuery {
    pub fn resolve(&self) -> Locale {
        self.locale
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_query_defaults_to_english() {
        assert_eq!(LocaleQuery { locale: None }.resolve(), Locale::En);
        assert_eq!(
            LocaleQuery {
                locale: Some("zh".to_string())
            }
            .resolve(),
            Locale::Zh
        );
        assert_eq!(
            LocaleQuery {
                locale: Some("klingon".to_string())
            }
            .resolve(),
            Locale::En
        );
    }
}
