//! Cover letter tone.
//!
//! The three known registers are named variants. Anything else a caller sends
//! is kept verbatim in `Other` and embedded as-is in the prompt; rejecting
//! unknown tones is left to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    Formal,
    #[default]
    Professional,
    Dynamic,
    Other(String),
}

impl Tone {
    pub fn as_str(&self) -> &str {
        match self {
            Tone::Formal => "formal",
            Tone::Professional => "professional",
            Tone::Dynamic => "dynamic",
            Tone::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Tone::Other(_))
    }
}

impl From<String> for Tone {
    fn from(raw: String) -> Self {
        // French spellings are what older clients send. Known tones always
        // render in canonical English.
        match raw.trim().to_lowercase().as_str() {
            "formal" | "formel" => Tone::Formal,
            "professional" | "professionnel" => Tone::Professional,
            "dynamic" | "dynamique" => Tone::Dynamic,
            _ => Tone::Other(raw),
        }
    }
}

impl From<&str> for Tone {
    fn from(raw: &str) -> Self {
        Tone::from(raw.to_string())
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.as_str().to_string()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tones() {
        assert_eq!(Tone::from("formal"), Tone::Formal);
        assert_eq!(Tone::from("Professional"), Tone::Professional);
        assert_eq!(Tone::from("dynamic"), Tone::Dynamic);
    }

    #[test]
    fn test_french_aliases() {
        assert_eq!(Tone::from("formel"), Tone::Formal);
        assert_eq!(Tone::from("professionnel"), Tone::Professional);
        assert_eq!(Tone::from("dynamique"), Tone::Dynamic);
    }

    #[test]
    fn test_known_tones_render_canonical_english() {
        assert_eq!(Tone::from("Formal").as_str(), "formal");
        assert_eq!(Tone::from("formel").as_str(), "formal");
        assert_eq!(Tone::from(" Dynamique").to_string(), "dynamic");
    }

    #[test]
    fn test_unknown_tone_kept_verbatim() {
        let tone = Tone::from("Sarcastic ");
        assert!(!tone.is_known());
        assert_eq!(tone.as_str(), "Sarcastic ");
    }

    #[test]
    fn test_serde_round_trip_through_string() {
        let tone: Tone = serde_json::from_str(r#""dynamique""#).unwrap();
        assert_eq!(tone, Tone::Dynamic);
        assert_eq!(serde_json::to_string(&tone).unwrap(), r#""dynamic""#);

        let tone: Tone = serde_json::from_str(r#""pirate""#).unwrap();
        assert_eq!(tone, Tone::Other("pirate".to_string()));
    }
}
