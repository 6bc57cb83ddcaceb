use crate::config::LogLevel;
use crate::settings::{ColorTheme, FontFamily, Settings};

pub(crate) fn default_font_family() -> FontFamily {
    Settings::default().font_family
}

pub(crate) fn default_font_size() -> u32 {
    Settings::default().font_size
}

pub(crate) fn default_letter_spacing() -> f32 {
    Settings::default().letter_spacing
}

pub(crate) fn default_word_spacing() -> f32 {
    Settings::default().word_spacing
}

pub(crate) fn default_line_height() -> f32 {
    Settings::default().line_height
}

pub(crate) fn default_theme() -> ColorTheme {
    Settings::default().theme
}

pub(crate) fn default_emphasis() -> bool {
    true
}

pub(crate) fn default_syllables() -> bool {
    false
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Debug
}

pub(crate) fn default_service_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

pub(crate) fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

pub(crate) fn default_request_timeout_secs() -> u64 {
    60
}

pub(crate) fn default_annotation_model() -> String {
    "gemini-2.5-flash".to_string()
}

pub(crate) fn default_speech_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

pub(crate) fn default_speech_voice() -> String {
    "Kore".to_string()
}
