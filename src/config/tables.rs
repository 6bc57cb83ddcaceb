use super::defaults;
use super::models::{AppConfig, LogLevel};
use crate::settings::{ColorTheme, FontFamily};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    reading_aids: ReadingAidsConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    service: ServiceConfig,
    #[serde(default)]
    annotation: AnnotationConfig,
    #[serde(default)]
    speech: SpeechConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            font_family: tables.appearance.font_family,
            font_size: tables.appearance.font_size,
            letter_spacing: tables.appearance.letter_spacing,
            word_spacing: tables.appearance.word_spacing,
            line_height: tables.appearance.line_height,
            theme: tables.appearance.theme,
            emphasis: tables.reading_aids.emphasis,
            syllables: tables.reading_aids.syllables,
            log_level: tables.logging.log_level,
            service_base_url: tables.service.base_url,
            api_key_env: tables.service.api_key_env,
            request_timeout_secs: tables.service.request_timeout_secs,
            annotation_model: tables.annotation.model,
            speech_model: tables.speech.model,
            speech_voice: tables.speech.voice,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AppearanceConfig {
    #[serde(default = "defaults::default_font_family")]
    font_family: FontFamily,
    #[serde(default = "defaults::default_font_size")]
    font_size: u32,
    #[serde(default = "defaults::default_letter_spacing")]
    letter_spacing: f32,
    #[serde(default = "defaults::default_word_spacing")]
    word_spacing: f32,
    #[serde(default = "defaults::default_line_height")]
    line_height: f32,
    #[serde(default = "defaults::default_theme")]
    theme: ColorTheme,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            font_family: defaults::default_font_family(),
            font_size: defaults::default_font_size(),
            letter_spacing: defaults::default_letter_spacing(),
            word_spacing: defaults::default_word_spacing(),
            line_height: defaults::default_line_height(),
            theme: defaults::default_theme(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ReadingAidsConfig {
    #[serde(default = "defaults::default_emphasis")]
    emphasis: bool,
    #[serde(default = "defaults::default_syllables")]
    syllables: bool,
}

impl Default for ReadingAidsConfig {
    fn default() -> Self {
        ReadingAidsConfig {
            emphasis: defaults::default_emphasis(),
            syllables: defaults::default_syllables(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ServiceConfig {
    #[serde(default = "defaults::default_service_base_url")]
    base_url: String,
    #[serde(default = "defaults::default_api_key_env")]
    api_key_env: String,
    #[serde(default = "defaults::default_request_timeout_secs")]
    request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            base_url: defaults::default_service_base_url(),
            api_key_env: defaults::default_api_key_env(),
            request_timeout_secs: defaults::default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AnnotationConfig {
    #[serde(default = "defaults::default_annotation_model")]
    model: String,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        AnnotationConfig {
            model: defaults::default_annotation_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SpeechConfig {
    #[serde(default = "defaults::default_speech_model")]
    model: String,
    #[serde(default = "defaults::default_speech_voice")]
    voice: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        SpeechConfig {
            model: defaults::default_speech_model(),
            voice: defaults::default_speech_voice(),
        }
    }
}
