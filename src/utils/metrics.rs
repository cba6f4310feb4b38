use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Scheduler attempt counters, persisted as JSON after every cycle.
/// Loading a missing file yields zeroed counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttemptCounters {
    #[serde(default)]
    pub attempts: Attempts,
    #[serde(default)]
    pub last_attempt: LastAttempt,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempts {
    pub total: u64,
    pub ok: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LastAttempt {
    pub took_ms: Option<u64>,
}

impl AttemptCounters {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read metrics file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse metrics file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write metrics file {}", path.display()))
    }

    pub fn observe_attempt(&mut self, ok: bool, took_ms: u64) {
        self.attempts.total += 1;
        if ok {
            self.attempts.ok += 1;
        } else {
            self.attempts.failed += 1;
        }
        self.last_attempt.took_ms = Some(took_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_zeroed_counters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.json");
        let counters = AttemptCounters::load(&path).unwrap();
        assert_eq!(counters.attempts, Attempts::default());
        assert!(counters.last_attempt.took_ms.is_none());
    }

    #[test]
    fn test_observe_and_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.json");

        let mut counters = AttemptCounters::default();
        counters.observe_attempt(true, 120);
        counters.observe_attempt(false, 80);
        counters.observe_attempt(true, 95);
        counters.save(&path).unwrap();

        let reloaded = AttemptCounters::load(&path).unwrap();
        assert_eq!(reloaded.attempts.total, 3);
        assert_eq!(reloaded.attempts.ok, 2);
        assert_eq!(reloaded.attempts.failed, 1);
        assert_eq!(reloaded.last_attempt.took_ms, Some(95));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/state/metrics.json");
        AttemptCounters::default().save(&path).unwrap();
        assert!(path.exists());
    }
}
