use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;

const MIB: usize = 1024 * 1024;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone, Deserialize)]
pub struct SaathiConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub limits: IngestLimits,
    pub matters_file: Option<String>,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    /// `None` keeps the service up; AI endpoints then answer 500 until a key is set.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

/// Upload validation limits and the scanned-PDF heuristic.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestLimits {
    pub max_document_files: usize,
    pub max_image_files: usize,
    pub max_file_bytes: usize,
    pub max_audio_bytes: usize,
    pub max_request_bytes: usize,
    /// PDFs with fewer non-whitespace characters than this are OCR'd instead.
    pub scanned_pdf_min_chars: usize,
    pub max_history_turns: usize,
}

impl Default for IngestLimits {
    fn default() -> Self {
        Self {
            max_document_files: 3,
            max_image_files: 5,
            max_file_bytes: 20 * MIB,
            max_audio_bytes: 25 * MIB,
            max_request_bytes: 128 * MIB,
            scanned_pdf_min_chars: 50,
            max_history_turns: 100,
        }
    }
}

impl SaathiConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";
        let defaults = IngestLimits::default();

        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("GOOGLE_GENERATIVE_AI_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() && is_prod {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "GEMINI_API_KEY is required in production but not set"
            )));
        }

        Ok(SaathiConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key,
                model: get_env("GEMINI_MODEL", Some(DEFAULT_GEMINI_MODEL), is_prod)?,
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), is_prod)?,
                timeout_secs: get_parsed("GEMINI_TIMEOUT_SECS", 120, is_prod)?,
            },
            limits: IngestLimits {
                max_document_files: get_parsed(
                    "SAATHI_MAX_DOCUMENT_FILES",
                    defaults.max_document_files,
                    is_prod,
                )?,
                max_image_files: get_parsed(
                    "SAATHI_MAX_IMAGE_FILES",
                    defaults.max_image_files,
                    is_prod,
                )?,
                max_file_bytes: get_parsed(
                    "SAATHI_MAX_FILE_BYTES",
                    defaults.max_file_bytes,
                    is_prod,
                )?,
                max_audio_bytes: get_parsed(
                    "SAATHI_MAX_AUDIO_BYTES",
                    defaults.max_audio_bytes,
                    is_prod,
                )?,
                max_request_bytes: get_parsed(
                    "SAATHI_MAX_REQUEST_BYTES",
                    defaults.max_request_bytes,
                    is_prod,
                )?,
                scanned_pdf_min_chars: get_parsed(
                    "SAATHI_SCANNED_PDF_MIN_CHARS",
                    defaults.scanned_pdf_min_chars,
                    is_prod,
                )?,
                max_history_turns: get_parsed(
                    "SAATHI_MAX_HISTORY_TURNS",
                    defaults.max_history_turns,
                    is_prod,
                )?,
            },
            matters_file: env::var("MATTERS_FILE").ok(),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok(),
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

/// Numeric settings follow the same production rule as `get_env`.
fn get_parsed<T>(key: &str, default: T, is_prod: bool) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| {
            AppError::ConfigError(anyhow::anyhow!("{} has an invalid value {:?}: {}", key, raw, e))
        }),
        Err(_) if is_prod => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            key
        ))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_match_upload_rules() {
        let limits = IngestLimits::default();
        assert_eq!(limits.max_document_files, 3);
        assert_eq!(limits.max_image_files, 5);
        assert_eq!(limits.max_audio_bytes, 25 * 1024 * 1024);
        assert_eq!(limits.scanned_pdf_min_chars, 50);
    }

    #[test]
    fn get_env_prefers_default_outside_prod() {
        let value = get_env("SAATHI_TEST_SURELY_UNSET_KEY", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn get_env_requires_value_in_prod() {
        let err = get_env("SAATHI_TEST_SURELY_UNSET_KEY", Some("fallback"), true).unwrap_err();
        assert!(err.to_string().contains("required in production"));
    }

    #[test]
    fn get_parsed_uses_default_when_unset() {
        let value: usize = get_parsed("SAATHI_TEST_SURELY_UNSET_NUMBER", 7, false).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn get_parsed_requires_value_in_prod() {
        let err = get_parsed::<usize>("SAATHI_TEST_SURELY_UNSET_NUMBER", 7, true).unwrap_err();
        assert!(err
            .to_string()
            .contains("SAATHI_TEST_SURELY_UNSET_NUMBER is required in production"));
    }
}
