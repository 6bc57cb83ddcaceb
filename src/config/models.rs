use crate::config::defaults;
use crate::settings::{ColorTheme, FontFamily, Settings};
use serde::Deserialize;

/// Flattened runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub font_family: FontFamily,
    pub font_size: u32,
    pub letter_spacing: f32,
    pub word_spacing: f32,
    pub line_height: f32,
    pub theme: ColorTheme,
    pub emphasis: bool,
    pub syllables: bool,
    pub log_level: LogLevel,
    pub service_base_url: String,
    pub api_key_env: String,
    pub request_timeout_secs: u64,
    pub annotation_model: String,
    pub speech_model: String,
    pub speech_voice: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            font_family: defaults::default_font_family(),
            font_size: defaults::default_font_size(),
            letter_spacing: defaults::default_letter_spacing(),
            word_spacing: defaults::default_word_spacing(),
            line_height: defaults::default_line_height(),
            theme: defaults::default_theme(),
            emphasis: defaults::default_emphasis(),
            syllables: defaults::default_syllables(),
            log_level: defaults::default_log_level(),
            service_base_url: defaults::default_service_base_url(),
            api_key_env: defaults::default_api_key_env(),
            request_timeout_secs: defaults::default_request_timeout_secs(),
            annotation_model: defaults::default_annotation_model(),
            speech_model: defaults::default_speech_model(),
            speech_voice: defaults::default_speech_voice(),
        }
    }
}

impl AppConfig {
    /// Initial visual settings, clamped into slider ranges.
    pub fn initial_settings(&self) -> Settings {
        Settings {
            font_family: self.font_family,
            font_size: self.font_size,
            letter_spacing: self.letter_spacing,
            word_spacing: self.word_spacing,
            line_height: self.line_height,
            theme: self.theme,
            emphasis: self.emphasis,
            syllables: self.syllables,
        }
        .clamped()
    }
}

/// Logging verbosity.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
