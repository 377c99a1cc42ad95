use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct ShowdownConfig {
    pub port: u16,
    pub request_timeout_secs: u64,
    pub openai_base_url: String,
    pub anthropic_base_url: String,
    pub anthropic_version: String,
    pub huggingface_base_url: String,
    pub min_input_chars: usize,
    pub round_history: usize,
}

impl Default for ShowdownConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            request_timeout_secs: 60,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            anthropic_base_url: "https://api.anthropic.com/v1".to_string(),
            anthropic_version: "2023-06-01".to_string(),
            huggingface_base_url: "https://api-inference.huggingface.co".to_string(),
            min_input_chars: 100,
            round_history: 50,
        }
    }
}

impl ShowdownConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_parse("PORT", defaults.port),
            request_timeout_secs: env_parse("SHOWDOWN_TIMEOUT_SECS", defaults.request_timeout_secs),
            openai_base_url: env_or("OPENAI_BASE_URL", defaults.openai_base_url),
            anthropic_base_url: env_or("ANTHROPIC_BASE_URL", defaults.anthropic_base_url),
            anthropic_version: env_or("ANTHROPIC_VERSION", defaults.anthropic_version),
            huggingface_base_url: env_or("HUGGINGFACE_BASE_URL", defaults.huggingface_base_url),
            min_input_chars: env_parse("SHOWDOWN_MIN_INPUT_CHARS", defaults.min_input_chars),
            round_history: env_parse("SHOWDOWN_ROUND_HISTORY", defaults.round_history),
        }
    }
}

fn env_or(key: &str, fallback: String) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => fallback,
    }
}

fn env_parse<T: FromStr>(key: &str, fallback: T) -> T {
    match env::var(key) {
        Ok(value) => value.trim().parse::<T>().unwrap_or(fallback),
        Err(_) => fallback,
    }
}
