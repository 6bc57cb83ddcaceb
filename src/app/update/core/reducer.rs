use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::EditorAction(action) => self.handle_editor_action(action, &mut effects),
            Message::DebounceElapsed(ticket) => {
                self.handle_debounce_elapsed(ticket, &mut effects);
            }
            Message::AnnotationFinished { job, result } => {
                self.handle_annotation_finished(job, result);
            }
            Message::FontFamilyChanged(family) => self.handle_font_family_changed(family),
            Message::FontSizeChanged(size) => self.handle_font_size_changed(size),
            Message::LetterSpacingChanged(spacing) => {
                self.handle_letter_spacing_changed(spacing);
            }
            Message::WordSpacingChanged(spacing) => self.handle_word_spacing_changed(spacing),
            Message::LineHeightChanged(height) => self.handle_line_height_changed(height),
            Message::ThemeSelected(theme) => self.handle_theme_selected(theme),
            Message::ToggleEmphasis(enabled) => {
                self.handle_toggle_emphasis(enabled, &mut effects);
            }
            Message::ToggleSyllables(enabled) => {
                self.handle_toggle_syllables(enabled, &mut effects);
            }
            Message::ToggleRuler(enabled) => self.handle_toggle_ruler(enabled),
            Message::RulerMoved(position) => self.handle_ruler_moved(position),
            Message::ReadAloud => self.handle_read_aloud(&mut effects),
            Message::StopReading => self.handle_stop_reading(),
            Message::SpeechSynthesized {
                request_id,
                payload,
            } => self.handle_speech_synthesized(request_id, payload),
            Message::DismissNotice => self.notice = None,
            Message::Tick(_now) => self.handle_tick(),
        }

        effects
    }
}
