use anyhow::{bail, Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Whether the analyze endpoints call the model or always serve the canned analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    Live,
    Demo,
}

impl std::str::FromStr for AnalysisMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(AnalysisMode::Live),
            "demo" | "offline" => Ok(AnalysisMode::Demo),
            other => bail!("ANALYSIS_MODE must be 'live' or 'demo', got '{other}'"),
        }
    }
}

/// Generation settings for the upstream model.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Absent key is not a startup error: callers may supply one per request.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 120,
            temperature: 0.2,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 4000,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub mode: AnalysisMode,
    pub fallback_on_error: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = LlmConfig::default();
        let llm = LlmConfig {
            api_key: optional_env("GEMINI_API_KEY"),
            model: optional_env("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: optional_env("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: parse_env("LLM_TIMEOUT_SECS", defaults.timeout_secs)?,
            temperature: parse_env("LLM_TEMPERATURE", defaults.temperature)?,
            top_k: defaults.top_k,
            top_p: defaults.top_p,
            max_output_tokens: parse_env("LLM_MAX_OUTPUT_TOKENS", defaults.max_output_tokens)?,
        };
        if llm.timeout_secs == 0 {
            bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            llm,
            mode: optional_env("ANALYSIS_MODE")
                .map(|v| v.parse::<AnalysisMode>())
                .transpose()?
                .unwrap_or(AnalysisMode::Live),
            fallback_on_error: parse_env("FALLBACK_ON_ERROR", true)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Returns the variable's value, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 10] = [
        "GEMINI_API_KEY",
        "GEMINI_MODEL",
        "GEMINI_BASE_URL",
        "LLM_TIMEOUT_SECS",
        "LLM_TEMPERATURE",
        "LLM_MAX_OUTPUT_TOKENS",
        "ANALYSIS_MODE",
        "FALLBACK_ON_ERROR",
        "PORT",
        "RUST_LOG",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_analysis_mode_parses_case_insensitively() {
        assert_eq!("LIVE".parse::<AnalysisMode>().unwrap(), AnalysisMode::Live);
        assert_eq!("demo".parse::<AnalysisMode>().unwrap(), AnalysisMode::Demo);
        assert_eq!(" offline ".parse::<AnalysisMode>().unwrap(), AnalysisMode::Demo);
    }

    #[test]
    fn test_analysis_mode_rejects_unknown() {
        assert!("staging".parse::<AnalysisMode>().is_err());
    }

    #[test]
    fn test_llm_defaults_match_generation_settings() {
        let llm = LlmConfig::default();
        assert_eq!(llm.model, "gemini-1.5-pro-latest");
        assert_eq!(llm.max_output_tokens, 4000);
        assert_eq!(llm.top_k, 40);
        assert!((llm.temperature - 0.2).abs() < f32::EPSILON);
        assert!(llm.api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.mode, AnalysisMode::Live);
        assert!(config.fallback_on_error);
        assert_eq!(config.llm.timeout_secs, 120);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("ANALYSIS_MODE", "demo");
        std::env::set_var("FALLBACK_ON_ERROR", "false");
        std::env::set_var("GEMINI_MODEL", "gemini-test");
        std::env::set_var("GEMINI_API_KEY", "  ");
        std::env::set_var("LLM_TIMEOUT_SECS", "30");
        let config = Config::from_env().unwrap();
        clear_env();
        assert_eq!(config.mode, AnalysisMode::Demo);
        assert!(!config.fallback_on_error);
        assert_eq!(config.llm.model, "gemini-test");
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.llm.timeout_secs, 30);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "eighty");
        let err = Config::from_env().unwrap_err();
        clear_env();
        assert!(err
            .to_string()
            .contains("Environment variable 'PORT' has an invalid value 'eighty'"));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_zero_timeout() {
        clear_env();
        std::env::set_var("LLM_TIMEOUT_SECS", "0");
        let err = Config::from_env().unwrap_err();
        clear_env();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unknown_mode() {
        clear_env();
        std::env::set_var("ANALYSIS_MODE", "staging");
        let err = Config::from_env().unwrap_err();
        clear_env();
        assert!(err.to_string().contains("ANALYSIS_MODE"));
    }
}
