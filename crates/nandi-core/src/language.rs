//! Languages offered by the assistant and the registration form.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    Hindi,
    #[default]
    English,
    Bengali,
    Tamil,
    Telugu,
    Kannada,
    Marathi,
    Gujarati,
}

impl Language {
    /// Languages selectable in the chat demo, in menu order.
    pub const CHAT: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Tamil,
        Language::Telugu,
        Language::Kannada,
    ];

    /// Whether the chat assistant can be switched to this language.
    pub fn is_chat_language(&self) -> bool {
        Self::CHAT.contains(self)
    }

    /// Stored form value, e.g. `"hindi"`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Hindi => "hindi",
            Self::English => "english",
            Self::Bengali => "bengali",
            Self::Tamil => "tamil",
            Self::Telugu => "telugu",
            Self::Kannada => "kannada",
            Self::Marathi => "marathi",
            Self::Gujarati => "gujarati",
        }
    }

    /// Two-letter badge code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hindi => "HI",
            Self::English => "EN",
            Self::Bengali => "BN",
            Self::Tamil => "TA",
            Self::Telugu => "TE",
            Self::Kannada => "KN",
            Self::Marathi => "MR",
            Self::Gujarati => "GU",
        }
    }

    /// Name in the language's own script.
    pub fn native_label(&self) -> &'static str {
        match self {
            Self::Hindi => "हिंदी",
            Self::English => "English",
            Self::Bengali => "বাংলা",
            Self::Tamil => "தமிழ்",
            Self::Telugu => "తెలుగు",
            Self::Kannada => "ಕನ್ನಡ",
            Self::Marathi => "मराठी",
            Self::Gujarati => "ગુજરાતી",
        }
    }
}
