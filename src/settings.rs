//! Visual settings record shown next to the rendered text.
//!
//! Values are clamped and snapped to the slider steps on every mutation so the
//! view never has to deal with out-of-range numbers.

use serde::Deserialize;

pub const MIN_FONT_SIZE: u32 = 12;
pub const MAX_FONT_SIZE: u32 = 48;
pub const MIN_LETTER_SPACING: f32 = 0.0;
pub const MAX_LETTER_SPACING: f32 = 10.0;
pub const LETTER_SPACING_STEP: f32 = 0.5;
pub const MIN_WORD_SPACING: f32 = 0.0;
pub const MAX_WORD_SPACING: f32 = 20.0;
pub const WORD_SPACING_STEP: f32 = 1.0;
pub const MIN_LINE_HEIGHT: f32 = 1.0;
pub const MAX_LINE_HEIGHT: f32 = 3.0;
pub const LINE_HEIGHT_STEP: f32 = 0.1;

/// Font families offered by the font picker.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub enum FontFamily {
    Default,
    OpenDyslexic,
    Lexend,
    Arial,
    Verdana,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Default,
        FontFamily::OpenDyslexic,
        FontFamily::Lexend,
        FontFamily::Arial,
        FontFamily::Verdana,
    ];

    /// Name handed to the renderer; `Default` maps to the system sans-serif.
    pub fn face_name(self) -> Option<&'static str> {
        match self {
            FontFamily::Default => None,
            FontFamily::OpenDyslexic => Some("OpenDyslexic"),
            FontFamily::Lexend => Some("Lexend"),
            FontFamily::Arial => Some("Arial"),
            FontFamily::Verdana => Some("Verdana"),
        }
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        FontFamily::Lexend
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FontFamily::Default => "Default",
            FontFamily::OpenDyslexic => "OpenDyslexic",
            FontFamily::Lexend => "Lexend",
            FontFamily::Arial => "Arial",
            FontFamily::Verdana => "Verdana",
        };
        write!(f, "{}", label)
    }
}

/// Colour theme.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    Light,
    Dark,
    Sepia,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 3] = [ColorTheme::Light, ColorTheme::Dark, ColorTheme::Sepia];
}

impl Default for ColorTheme {
    fn default() -> Self {
        ColorTheme::Sepia
    }
}

impl std::fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ColorTheme::Light => "Light",
            ColorTheme::Dark => "Dark",
            ColorTheme::Sepia => "Sepia",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub font_family: FontFamily,
    pub font_size: u32,
    pub letter_spacing: f32,
    pub word_spacing: f32,
    pub line_height: f32,
    pub theme: ColorTheme,
    pub emphasis: bool,
    pub syllables: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            font_family: FontFamily::Lexend,
            font_size: 20,
            letter_spacing: 2.0,
            word_spacing: 8.0,
            line_height: 1.8,
            theme: ColorTheme::Sepia,
            emphasis: true,
            syllables: false,
        }
    }
}

impl Settings {
    /// Bring every numeric field back into its slider range.
    pub fn clamped(mut self) -> Self {
        self.set_font_size(self.font_size);
        self.set_letter_spacing(self.letter_spacing);
        self.set_word_spacing(self.word_spacing);
        self.set_line_height(self.line_height);
        self
    }

    /// Returns `true` when the stored value changed.
    pub fn set_font_size(&mut self, size: u32) -> bool {
        let clamped = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        replace_if_changed(&mut self.font_size, clamped)
    }

    pub fn set_letter_spacing(&mut self, spacing: f32) -> bool {
        let snapped = snap(
            spacing,
            MIN_LETTER_SPACING,
            MAX_LETTER_SPACING,
            LETTER_SPACING_STEP,
        );
        replace_f32_if_changed(&mut self.letter_spacing, snapped)
    }

    pub fn set_word_spacing(&mut self, spacing: f32) -> bool {
        let snapped = snap(spacing, MIN_WORD_SPACING, MAX_WORD_SPACING, WORD_SPACING_STEP);
        replace_f32_if_changed(&mut self.word_spacing, snapped)
    }

    pub fn set_line_height(&mut self, height: f32) -> bool {
        let snapped = snap(height, MIN_LINE_HEIGHT, MAX_LINE_HEIGHT, LINE_HEIGHT_STEP);
        replace_f32_if_changed(&mut self.line_height, snapped)
    }
}

fn snap(value: f32, min: f32, max: f32, step: f32) -> f32 {
    if !value.is_finite() {
        return min;
    }
    let steps = ((value.clamp(min, max) - min) / step).round();
    // Rounding to two decimals keeps 1.8 from turning into 1.8000001.
    let snapped = min + steps * step;
    ((snapped * 100.0).round() / 100.0).clamp(min, max)
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

fn replace_f32_if_changed(slot: &mut f32, value: f32) -> bool {
    if (*slot - value).abs() <= f32::EPSILON {
        false
    } else {
        *slot = value;
        true
    }
}
