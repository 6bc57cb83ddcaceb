mod constants;

use crate::config::AppConfig;
use crate::debounce::{Debouncer, EDIT_DEBOUNCE};
use crate::gemini::GeminiClient;
use crate::pipeline::TransformPipeline;
use crate::settings::Settings;
use crate::tts::{RodioBackend, SpeechController};
use iced::font::{Family, Weight};
use iced::widget::text_editor;
use iced::{Font, Task};
use tracing::{error, info};

use super::messages::Message;

pub(crate) use constants::*;

/// Core application state.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) settings: Settings,
    pub(super) editor: text_editor::Content,
    pub(super) debouncer: Debouncer<String>,
    /// Last text that survived the edit quiescence window.
    pub(super) debounced_text: String,
    pub(super) pipeline: TransformPipeline,
    /// Latest published markup.
    pub(super) annotated: String,
    pub(super) client: Option<GeminiClient>,
    pub(super) speech: SpeechController<RodioBackend>,
    pub(super) reading: bool,
    pub(super) notice: Option<String>,
    pub(super) show_ruler: bool,
    /// Pointer height over the output pane, in pane coordinates.
    pub(super) ruler_y: f32,
}

impl App {
    pub(super) fn bootstrap(config: AppConfig) -> (App, Task<Message>) {
        let settings = config.initial_settings();
        let client = match GeminiClient::new(&config) {
            Ok(client) => Some(client),
            Err(err) => {
                error!("Could not build the HTTP client: {err}");
                None
            }
        };
        let speech = SpeechController::new(RodioBackend::default());

        let mut app = App {
            settings,
            editor: text_editor::Content::with_text(DEMO_TEXT),
            debouncer: Debouncer::new(EDIT_DEBOUNCE),
            debounced_text: DEMO_TEXT.to_string(),
            pipeline: TransformPipeline::new(),
            annotated: String::new(),
            client,
            speech,
            reading: false,
            notice: None,
            show_ruler: false,
            ruler_y: 0.0,
            config,
        };
        info!(
            font = %app.settings.font_family,
            theme = %app.settings.theme,
            emphasis = app.settings.emphasis,
            syllables = app.settings.syllables,
            "Starting reading aid"
        );

        let mut effects = Vec::new();
        app.run_pipeline(&mut effects);
        let task = app.run_effects(effects);
        (app, task)
    }

    pub(super) fn current_font(&self) -> Font {
        let family = match self.settings.font_family.face_name() {
            Some(name) => Family::Name(name),
            None => Family::SansSerif,
        };
        Font {
            family,
            ..Font::DEFAULT
        }
    }

    pub(super) fn emphasis_font(&self) -> Font {
        Font {
            weight: Weight::Bold,
            ..self.current_font()
        }
    }

    /// Widen a run with padding spaces to approximate letter and word spacing.
    pub(super) fn spaced_run(&self, run: &str) -> String {
        let letter_gap = " ".repeat(self.gap_spaces(self.settings.letter_spacing));
        let word_gap = " ".repeat(self.gap_spaces(self.settings.word_spacing) + 1);
        if letter_gap.is_empty() && word_gap.len() == 1 {
            return run.to_string();
        }

        let mut output = String::with_capacity(run.len() * 2);
        for ch in run.chars() {
            match ch {
                ' ' => output.push_str(&word_gap),
                '\n' => output.push('\n'),
                _ => {
                    output.push(ch);
                    output.push_str(&letter_gap);
                }
            }
        }
        output
    }

    /// Top offset and height of the ruler band centred on the pointer.
    pub(super) fn ruler_band(&self) -> (f32, f32) {
        let height =
            self.settings.line_height * self.settings.font_size as f32 * RULER_LINE_FRACTION;
        ((self.ruler_y - height / 2.0).max(0.0), height)
    }

    fn gap_spaces(&self, px: f32) -> usize {
        let advance = self.settings.font_size as f32 * SPACE_ADVANCE_EM;
        if advance <= 0.0 {
            return 0;
        }
        (px / advance).round().max(0.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_publishes_demo_text_with_emphasis() {
        let (app, _task) = App::bootstrap(AppConfig::default());
        assert!(app.annotated.starts_with("<b>Th</b>is <b>i</b>s"));
        assert!(!app.pipeline.is_processing());
        assert!(!app.reading);
    }

    #[test]
    fn spacing_padding_scales_with_font_size() {
        let (mut app, _task) = App::bootstrap(AppConfig::default());
        app.settings.font_size = 20;
        app.settings.letter_spacing = 0.0;
        app.settings.word_spacing = 0.0;
        assert_eq!(app.spaced_run("ab cd"), "ab cd");

        app.settings.letter_spacing = 6.0;
        app.settings.word_spacing = 12.0;
        assert_eq!(app.spaced_run("ab cd"), "a b    c d ");
    }

    #[test]
    fn ruler_band_is_centred_on_pointer_and_sized_to_a_line() {
        let (mut app, _task) = App::bootstrap(AppConfig::default());
        app.settings.font_size = 20;
        app.settings.line_height = 2.0;
        app.ruler_y = 100.0;
        assert_eq!(app.ruler_band(), (84.0, 32.0));

        app.ruler_y = 5.0;
        assert_eq!(app.ruler_band(), (0.0, 32.0));
    }
}
