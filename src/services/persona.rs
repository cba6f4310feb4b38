use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Reply lexicon loaded once at startup and injected through `AppState`,
/// so wording stays externally configurable and tests can override it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Persona {
    #[serde(default)]
    pub lexicon: HashMap<String, Vec<String>>,
}

impl Persona {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read persona file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse persona file {}", path.display()))
    }

    /// First configured phrasing for a tag, or the caller's fallback text.
    pub fn say<'a>(&'a self, tag: &str, fallback: &'a str) -> &'a str {
        self.lexicon
            .get(tag)
            .and_then(|choices| choices.first())
            .map(String::as_str)
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_say_uses_configured_phrase() {
        let persona: Persona =
            serde_json::from_str(r#"{"lexicon":{"queued":["Locked in","On deck"]}}"#).unwrap();
        assert_eq!(persona.say("queued", "Queued"), "Locked in");
    }

    #[test]
    fn test_say_falls_back_when_tag_missing_or_empty() {
        let persona: Persona = serde_json::from_str(r#"{"lexicon":{"queued":[]}}"#).unwrap();
        assert_eq!(persona.say("queued", "Queued"), "Queued");
        assert_eq!(persona.say("metrics", "Metrics"), "Metrics");
    }

    #[test]
    fn test_default_persona_is_empty() {
        let persona = Persona::default();
        assert_eq!(persona.say("anything", "fallback"), "fallback");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persona.json");
        std::fs::write(&path, r#"{"lexicon":{"metrics":["Numbers are in"]}}"#).unwrap();
        let persona = Persona::from_file(&path).unwrap();
        assert_eq!(persona.say("metrics", "Metrics"), "Numbers are in");
    }
}
