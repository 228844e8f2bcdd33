use serde::{Deserialize, Serialize};

/// Natural language the model should answer in. Serialized as its ISO 639-1 code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    #[default]
    En,
    Es,
    De,
    Ar,
}

impl Language {
    /// English name of the language, as embedded in prompts.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Fr => "French",
            Language::En => "English",
            Language::Es => "Spanish",
            Language::De => "German",
            Language::Ar => "Arabic",
        }
    }
}
