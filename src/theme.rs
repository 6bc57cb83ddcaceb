//! Reading themes mapped onto iced palettes.

use crate::settings::ColorTheme;
use iced::theme::Palette;
use iced::{Color, Theme};

/// Colours the stock palette has no slot for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub background: Color,
    pub text: Color,
    pub primary: Color,
    pub secondary: Color,
    pub card: Color,
}

impl ThemeColors {
    /// Body colour faded for placeholders.
    pub fn muted_text(&self) -> Color {
        Color {
            a: 0.6,
            ..self.text
        }
    }
}

pub fn colors(theme: ColorTheme) -> ThemeColors {
    match theme {
        ColorTheme::Light => ThemeColors {
            background: Color::from_rgb8(0xf3, 0xf4, 0xf6),
            text: Color::from_rgb8(0x1f, 0x29, 0x37),
            primary: Color::from_rgb8(0x3b, 0x82, 0xf6),
            secondary: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            card: Color::from_rgb8(0xff, 0xff, 0xff),
        },
        ColorTheme::Dark => ThemeColors {
            background: Color::from_rgb8(0x1f, 0x29, 0x37),
            text: Color::from_rgb8(0xd1, 0xd5, 0xdb),
            primary: Color::from_rgb8(0x60, 0xa5, 0xfa),
            secondary: Color::from_rgb8(0x4b, 0x55, 0x63),
            card: Color::from_rgb8(0x37, 0x41, 0x51),
        },
        ColorTheme::Sepia => ThemeColors {
            background: Color::from_rgb8(0xfb, 0xf0, 0xd9),
            text: Color::from_rgb8(0x58, 0x4c, 0x39),
            primary: Color::from_rgb8(0xa1, 0x62, 0x07),
            secondary: Color::from_rgb8(0xea, 0xdd, 0xc7),
            card: Color::from_rgb8(0xfa, 0xf3, 0xe6),
        },
    }
}

impl From<ColorTheme> for Theme {
    fn from(theme: ColorTheme) -> Self {
        let c = colors(theme);
        Theme::custom(
            theme.to_string(),
            Palette {
                background: c.background,
                text: c.text,
                primary: c.primary,
                success: Palette::LIGHT.success,
                danger: Palette::LIGHT.danger,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_keeps_text_distinct_from_background() {
        for theme in ColorTheme::ALL {
            let c = colors(theme);
            assert_ne!(c.text, c.background, "{theme}");
            assert_ne!(c.card, c.text, "{theme}");
        }
    }

    #[test]
    fn iced_palette_follows_reading_theme() {
        let theme = Theme::from(ColorTheme::Sepia);
        assert_eq!(theme.palette().background, colors(ColorTheme::Sepia).background);
        assert_eq!(theme.palette().primary, colors(ColorTheme::Sepia).primary);
    }
}
