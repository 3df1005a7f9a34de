use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::knowledge::SYMPTOMS_FILE;
use crate::models::enums::Locale;
use crate::narrative::GenerationOptions;

/// Application-level constants
pub const APP_NAME: &str = "OncoScreen";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "medgemma";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,oncoscreen_lib=debug"
}

/// Application data directory, `~/OncoScreen/`. `None` when no home directory is known.
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_NAME))
}

/// Where `export-knowledge` writes and consultations look for edited tables:
/// `~/OncoScreen/knowledge/`.
pub fn default_knowledge_dir() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join("knowledge"))
}

/// Engine settings read from `ONCOSCREEN_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub ollama_url: String,
    pub model: String,
    pub generation: GenerationOptions,
    pub locale: Locale,
    /// JSON knowledge base override; the built-in tables are used when unset.
    pub knowledge_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            generation: GenerationOptions::default(),
            locale: Locale::English,
            knowledge_dir: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Invalid values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let timeout_secs = parsed(&get, "ONCOSCREEN_TIMEOUT_SECS", defaults.generation.timeout.as_secs());
        let locale = match get("ONCOSCREEN_LOCALE") {
            Some(raw) => Locale::parse_lenient(&raw).unwrap_or_else(|| {
                tracing::warn!(key = "ONCOSCREEN_LOCALE", value = %raw, "Invalid config value, using default");
                defaults.locale
            }),
            None => defaults.locale,
        };

        Self {
            ollama_url: get("ONCOSCREEN_OLLAMA_URL").unwrap_or(defaults.ollama_url),
            model: get("ONCOSCREEN_MODEL").unwrap_or(defaults.model),
            generation: GenerationOptions {
                temperature: parsed(&get, "ONCOSCREEN_TEMPERATURE", defaults.generation.temperature),
                max_tokens: parsed(&get, "ONCOSCREEN_MAX_TOKENS", defaults.generation.max_tokens),
                timeout: Duration::from_secs(timeout_secs),
            },
            locale,
            knowledge_dir: get("ONCOSCREEN_KNOWLEDGE_DIR").map(PathBuf::from),
        }
    }
}

impl EngineConfig {
    /// Knowledge tables to load: the configured directory, else the default
    /// directory when it holds exported tables. `None` means built-in tables.
    pub fn knowledge_source(&self) -> Option<PathBuf> {
        resolve_knowledge_dir(self.knowledge_dir.clone(), default_knowledge_dir())
    }
}

fn resolve_knowledge_dir(configured: Option<PathBuf>, fallback: Option<PathBuf>) -> Option<PathBuf> {
    configured.or_else(|| fallback.filter(|dir| dir.join(SYMPTOMS_FILE).is_file()))
}

fn parsed<T: FromStr>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Invalid config value, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> EngineConfig {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        EngineConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn app_data_dir_under_home() {
        if let (Some(dir), Some(home)) = (app_data_dir(), dirs::home_dir()) {
            assert!(dir.starts_with(home));
            assert!(dir.ends_with("OncoScreen"));
        }
    }

    #[test]
    fn default_knowledge_dir_is_inside_app_dir() {
        if let (Some(kb), Some(app)) = (default_knowledge_dir(), app_data_dir()) {
            assert_eq!(kb, app.join("knowledge"));
        }
    }

    #[test]
    fn configured_knowledge_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        let configured = Some(PathBuf::from("/srv/kb"));
        assert_eq!(
            resolve_knowledge_dir(configured.clone(), Some(dir.path().to_path_buf())),
            configured
        );
    }

    #[test]
    fn default_knowledge_dir_needs_exported_tables() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = Some(dir.path().to_path_buf());
        assert_eq!(resolve_knowledge_dir(None, fallback.clone()), None);

        std::fs::write(dir.path().join(SYMPTOMS_FILE), "[]").unwrap();
        assert_eq!(resolve_knowledge_dir(None, fallback.clone()), fallback);
        assert_eq!(resolve_knowledge_dir(None, None), None);
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let c = config(&[]);
        assert_eq!(c, EngineConfig::default());
        assert_eq!(c.generation.timeout, Duration::from_secs(30));
        assert_eq!(c.model, "medgemma");
    }

    #[test]
    fn values_are_read() {
        let c = config(&[
            ("ONCOSCREEN_OLLAMA_URL", "http://gpu-box:11434"),
            ("ONCOSCREEN_MODEL", "llama3"),
            ("ONCOSCREEN_TIMEOUT_SECS", "5"),
            ("ONCOSCREEN_TEMPERATURE", "0.2"),
            ("ONCOSCREEN_MAX_TOKENS", "400"),
            ("ONCOSCREEN_LOCALE", "bn"),
            ("ONCOSCREEN_KNOWLEDGE_DIR", "/srv/kb"),
        ]);
        assert_eq!(c.ollama_url, "http://gpu-box:11434");
        assert_eq!(c.model, "llama3");
        assert_eq!(c.generation.timeout, Duration::from_secs(5));
        assert_eq!(c.generation.max_tokens, 400);
        assert!((c.generation.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(c.locale, Locale::Bengali);
        assert_eq!(c.knowledge_dir, Some(PathBuf::from("/srv/kb")));
    }

    #[test]
    fn invalid_values_fall_back() {
        let c = config(&[
            ("ONCOSCREEN_TIMEOUT_SECS", "soon"),
            ("ONCOSCREEN_MAX_TOKENS", "-3"),
            ("ONCOSCREEN_LOCALE", "klingon"),
            ("ONCOSCREEN_MODEL", "   "),
        ]);
        assert_eq!(c, EngineConfig::default());
    }
}
