//! Agent configuration: the primitive repertoire, the experiments rooted in
//! it, and the anticipation baseline policy. Loaded from TOML, with named
//! presets matching the reference environments.

use crate::anticipation::SeedPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A primitive interaction to intern at agent construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimitiveSpec {
    pub label: String,
    pub valence: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub seed_policy: SeedPolicy,
    /// The primitive repertoire, with the valences fixed at creation.
    pub primitives: Vec<PrimitiveSpec>,
    /// Labels of the primitives to register experiments for. These form
    /// the initial selection universe.
    pub experiments: Vec<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::scripted()
    }
}

impl AgentConfig {
    /// Load from a TOML file, falling back to defaults for missing fields.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read config file: {}", path.as_ref().display()))?;
        toml::from_str(&content).context("failed to parse TOML config")
    }

    /// Try to load from path; if the file is missing or invalid, use the
    /// scripted preset.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("config file not found or invalid ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Repertoire for the scripted two-choice sequence source: each
    /// experiment has a cheap bad outcome and a rewarding good one.
    pub fn scripted() -> Self {
        Self {
            seed_policy: SeedPolicy::default(),
            primitives: vec![
                PrimitiveSpec { label: "e1r1".into(), valence: -1 },
                PrimitiveSpec { label: "e1r2".into(), valence: 3 },
                PrimitiveSpec { label: "e2r1".into(), valence: -1 },
                PrimitiveSpec { label: "e2r2".into(), valence: 3 },
            ],
            experiments: vec!["e1r2".into(), "e2r2".into()],
        }
    }

    /// Repertoire for the maze: moving forward feels good, bumping hurts,
    /// turning and touching carry small costs.
    pub fn maze() -> Self {
        Self {
            seed_policy: SeedPolicy::default(),
            primitives: vec![
                PrimitiveSpec { label: "^t".into(), valence: -3 },
                PrimitiveSpec { label: "vt".into(), valence: -3 },
                PrimitiveSpec { label: "/t".into(), valence: -1 },
                PrimitiveSpec { label: "/f".into(), valence: -1 },
                PrimitiveSpec { label: "\\t".into(), valence: -1 },
                PrimitiveSpec { label: "\\f".into(), valence: -1 },
                PrimitiveSpec { label: "-t".into(), valence: -1 },
                PrimitiveSpec { label: "-f".into(), valence: -1 },
                PrimitiveSpec { label: "|t".into(), valence: 5 },
                PrimitiveSpec { label: "|f".into(), valence: -10 },
            ],
            experiments: vec![
                "^t".into(),
                "vt".into(),
                "/t".into(),
                "\\t".into(),
                "|t".into(),
                "-t".into(),
            ],
        }
    }

    /// Repertoire for the pulse source: two experiments whose echoed
    /// outcomes confirm them.
    pub fn pulse() -> Self {
        Self {
            seed_policy: SeedPolicy::default(),
            primitives: vec![
                PrimitiveSpec { label: "e1r1".into(), valence: 1 },
                PrimitiveSpec { label: "e1r2".into(), valence: -1 },
                PrimitiveSpec { label: "e2r1".into(), valence: -1 },
                PrimitiveSpec { label: "e2r2".into(), valence: 1 },
            ],
            experiments: vec!["e1r1".into(), "e2r2".into()],
        }
    }
}
