use serde::{Deserialize, Serialize};

/// Supported UI languages. A closed enum: unknown stored tags are rejected at
/// decode time and the preference falls open to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Tr,
}

impl Language {
    /// All supported languages in picker order.
    pub const ALL: [Language; 2] = [Language::En, Language::Tr];

    /// The language every missing translation falls back to.
    pub const FALLBACK: Language = Language::En;

    /// Short tag used as the raw persisted value ("en" / "tr").
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    /// Parse a persisted tag. Unknown tags return `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Language::En),
            "tr" => Some(Language::Tr),
            _ => None,
        }
    }

    /// Name of the language in that language, for pickers.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Türkçe",
        }
    }

    /// Flag emoji shown next to the language in pickers.
    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::Tr => "🇹🇷",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
