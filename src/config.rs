// src/config.rs
//! Discovery tuning knobs: scoring constants, extraction limits, and the
//! candidate blacklist, loaded from `config/discovery.toml`.
//!
//! Resolution order mirrors the rest of the service config:
//! 1) `$DISCOVERY_CONFIG_PATH`
//! 2) `config/discovery.toml`
//! 3) built-in defaults
//!
//! A thread-safe [`ConfigHandle`] wraps the loaded config; in dev/local
//! environments an optional polling watcher hot-reloads it on file change
//! (enable with `DISCOVERY_HOT_RELOAD=1`).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::info;

pub const DEFAULT_DISCOVERY_CONFIG_PATH: &str = "config/discovery.toml";
pub const ENV_DISCOVERY_CONFIG_PATH: &str = "DISCOVERY_CONFIG_PATH";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub scoring: ScoringConfig,
    pub extraction: ExtractionConfig,
    pub discovery: DiscoverySection,
}

/// Additive confidence heuristic constants. The defaults are the
/// feature-complete configuration; the leaner historical tuning
/// (base 0.5, +0.1 per keyword, no URL bonuses, cap 0.99) stays reachable
/// by editing the TOML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub base_confidence: f32,
    /// Added once per positive keyword found in the context.
    pub keyword_increment: f32,
    /// URL contains `case-stud` or `testimonial`.
    pub url_story_bonus: f32,
    /// URL contains `customer` or `client`.
    pub url_audience_bonus: f32,
    /// Name carries a legal-entity suffix (Inc, LLC, ...).
    pub suffix_bonus: f32,
    pub confidence_cap: f32,
    pub positive_keywords: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_confidence: 0.6,
            keyword_increment: 0.05,
            url_story_bonus: 0.2,
            url_audience_bonus: 0.15,
            suffix_bonus: 0.1,
            confidence_cap: 0.98,
            positive_keywords: [
                "customer", "client", "partner", "success", "achieved", "improved",
                "increased", "reduced", "roi", "results",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Context window carried with each candidate, in chars. 250 is the
    /// current default; 200 is the legacy window some callers still use.
    pub context_chars: usize,
    pub min_name_chars: usize,
    pub max_name_chars: usize,
    /// Generic UI/navigation vocabulary that disqualifies a candidate.
    pub blacklist: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            context_chars: 250,
            min_name_chars: 3,
            max_name_chars: 60,
            blacklist: [
                "company", "customer", "client", "testimonial", "review", "read more",
                "learn more", "contact", "about", "privacy", "terms", "cookie",
                "policy", "login", "sign", "get started",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiscoverySection {
    /// Result cap applied after dedup + ranking. Callers may override per run.
    pub max_results: usize,
}

impl Default for DiscoverySection {
    fn default() -> Self {
        Self { max_results: 50 }
    }
}

impl DiscoveryConfig {
    /// Parse from a TOML string and harden obviously broken values.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let mut cfg: DiscoveryConfig =
            toml::from_str(toml_str).context("parsing discovery config TOML")?;
        cfg.harden();
        Ok(cfg)
    }

    /// Load using the env var + fallback resolution described in the module docs.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_DISCOVERY_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            let content = fs::read_to_string(&pb)
                .with_context(|| format!("reading discovery config at {}", pb.display()))?;
            return Self::from_toml_str(&content);
        }
        let default_p = PathBuf::from(DEFAULT_DISCOVERY_CONFIG_PATH);
        if default_p.exists() {
            let content = fs::read_to_string(&default_p)
                .with_context(|| format!("reading discovery config at {}", default_p.display()))?;
            return Self::from_toml_str(&content);
        }
        Ok(Self::default())
    }

    /// Keep the scoring bounds sane even if the TOML is odd. The output
    /// guarantee `base <= confidence <= cap` depends on these.
    fn harden(&mut self) {
        let s = &mut self.scoring;
        if !s.base_confidence.is_finite() {
            s.base_confidence = ScoringConfig::default().base_confidence;
        }
        if !s.confidence_cap.is_finite() {
            s.confidence_cap = ScoringConfig::default().confidence_cap;
        }
        s.base_confidence = s.base_confidence.clamp(0.0, 1.0);
        s.confidence_cap = s.confidence_cap.clamp(s.base_confidence, 1.0);
        if self.extraction.min_name_chars > self.extraction.max_name_chars {
            self.extraction = ExtractionConfig {
                blacklist: std::mem::take(&mut self.extraction.blacklist),
                ..ExtractionConfig::default()
            };
        }
        if self.discovery.max_results == 0 {
            self.discovery.max_results = DiscoverySection::default().max_results;
        }
    }
}

/* ----------------------------
Thread-safe handle + hot reload
---------------------------- */

/// Shared handle the engine and API read through. Hot reload swaps the inner
/// config atomically; readers always see a consistent snapshot.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<DiscoveryConfig>>,
}

impl ConfigHandle {
    pub fn new(cfg: DiscoveryConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cfg)),
        }
    }

    /// Load via the default resolution and wrap in a handle.
    pub fn load_default() -> Result<Self> {
        Ok(Self::new(DiscoveryConfig::load_default()?))
    }

    /// Snapshot of the current config.
    pub fn current(&self) -> DiscoveryConfig {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(_) => DiscoveryConfig::default(),
        }
    }
}

/// Dev gating: debug builds, or `APP_ENV` in {local, development, dev}.
pub(crate) fn dev_env() -> bool {
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("APP_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

fn hot_reload_enabled() -> bool {
    let want = std::env::var("DISCOVERY_HOT_RELOAD")
        .ok()
        .map(|v| v == "1")
        .unwrap_or(false);
    want && dev_env()
}

/// Resolve the config path the same way `load_default` does (for the watcher).
pub fn resolved_config_path() -> PathBuf {
    std::env::var(ENV_DISCOVERY_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DISCOVERY_CONFIG_PATH))
}

/// Start a polling watcher on `path` that reloads into `handle`.
/// Polls mtime every 2s. Uses only std, no external deps.
pub fn start_hot_reload_thread(handle: ConfigHandle, path: PathBuf) {
    if !hot_reload_enabled() {
        return;
    }

    thread::spawn(move || {
        let poll = Duration::from_secs(2);
        let mut last_mtime: Option<SystemTime> = None;

        loop {
            match fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(mtime) => {
                    let changed = match last_mtime {
                        None => {
                            last_mtime = Some(mtime);
                            false
                        }
                        Some(prev) => mtime > prev,
                    };
                    if changed {
                        if let Ok(content) = fs::read_to_string(&path) {
                            if let Ok(new_cfg) = DiscoveryConfig::from_toml_str(&content) {
                                if let Ok(mut guard) = handle.inner.write() {
                                    *guard = new_cfg;
                                    info!(path = %path.display(), "discovery config reloaded");
                                }
                            }
                        }
                        last_mtime = Some(mtime);
                    }
                }
                Err(_) => {
                    // File missing or unreadable; keep trying.
                }
            }
            thread::sleep(poll);
        }
    });
}
