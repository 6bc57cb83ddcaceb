use super::super::state::App;
use crate::settings::{ColorTheme, FontFamily};
use iced::Point;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_font_family_changed(&mut self, family: FontFamily) {
        if self.settings.font_family != family {
            info!(%family, "Font family changed");
            self.settings.font_family = family;
        }
    }

    pub(super) fn handle_font_size_changed(&mut self, size: u32) {
        let old = self.settings.font_size;
        if self.settings.set_font_size(size) {
            debug!(old, new = self.settings.font_size, "Font size changed");
        }
    }

    pub(super) fn handle_letter_spacing_changed(&mut self, spacing: f32) {
        if self.settings.set_letter_spacing(spacing) {
            debug!(spacing = self.settings.letter_spacing, "Letter spacing changed");
        }
    }

    pub(super) fn handle_word_spacing_changed(&mut self, spacing: f32) {
        if self.settings.set_word_spacing(spacing) {
            debug!(spacing = self.settings.word_spacing, "Word spacing changed");
        }
    }

    pub(super) fn handle_line_height_changed(&mut self, height: f32) {
        if self.settings.set_line_height(height) {
            debug!(height = self.settings.line_height, "Line height changed");
        }
    }

    pub(super) fn handle_theme_selected(&mut self, theme: ColorTheme) {
        if self.settings.theme != theme {
            info!(%theme, "Theme selected");
            self.settings.theme = theme;
        }
    }

    pub(super) fn handle_toggle_ruler(&mut self, enabled: bool) {
        if self.show_ruler != enabled {
            info!(enabled, "Toggled reading ruler");
            self.show_ruler = enabled;
        }
    }

    pub(super) fn handle_ruler_moved(&mut self, position: Point) {
        if self.show_ruler {
            self.ruler_y = position.y.max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use crate::settings::{MAX_FONT_SIZE, MIN_LETTER_SPACING};

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default());
        app
    }

    #[test]
    fn visual_changes_never_rerun_the_pipeline() {
        let mut app = build_test_app();
        let generation = app.pipeline.generation();
        let markup = app.annotated.clone();

        for message in [
            Message::FontFamilyChanged(FontFamily::OpenDyslexic),
            Message::FontSizeChanged(30),
            Message::LetterSpacingChanged(4.5),
            Message::WordSpacingChanged(12.0),
            Message::LineHeightChanged(2.2),
            Message::ThemeSelected(ColorTheme::Dark),
        ] {
            assert!(app.reduce(message).is_empty());
        }

        assert_eq!(app.pipeline.generation(), generation);
        assert_eq!(app.annotated, markup);
        assert_eq!(app.settings.font_family, FontFamily::OpenDyslexic);
        assert_eq!(app.settings.font_size, 30);
        assert_eq!(app.settings.letter_spacing, 4.5);
        assert_eq!(app.settings.word_spacing, 12.0);
        assert_eq!(app.settings.line_height, 2.2);
        assert_eq!(app.settings.theme, ColorTheme::Dark);
    }

    #[test]
    fn ruler_follows_pointer_only_while_shown() {
        let mut app = build_test_app();
        assert!(!app.show_ruler);
        let _ = app.reduce(Message::RulerMoved(Point::new(10.0, 120.0)));
        assert_eq!(app.ruler_y, 0.0);

        assert!(app.reduce(Message::ToggleRuler(true)).is_empty());
        assert!(app.show_ruler);
        let _ = app.reduce(Message::RulerMoved(Point::new(10.0, 120.0)));
        assert_eq!(app.ruler_y, 120.0);

        let _ = app.reduce(Message::RulerMoved(Point::new(10.0, -4.0)));
        assert_eq!(app.ruler_y, 0.0);

        let _ = app.reduce(Message::ToggleRuler(false));
        assert!(!app.show_ruler);
    }

    #[test]
    fn slider_values_are_clamped() {
        let mut app = build_test_app();
        app.handle_font_size_changed(400);
        app.handle_letter_spacing_changed(-3.0);
        assert_eq!(app.settings.font_size, MAX_FONT_SIZE);
        assert_eq!(app.settings.letter_spacing, MIN_LETTER_SPACING);
    }
}
