use crate::debounce::DebounceTicket;
use crate::gemini::ServiceError;
use crate::pipeline::AnnotationJob;
use crate::settings::{ColorTheme, FontFamily};
use crate::syllables::AnnotationError;
use iced::Point;
use iced::widget::text_editor;
use std::time::Instant;

/// Messages emitted by the UI and by finished background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    EditorAction(text_editor::Action),
    DebounceElapsed(DebounceTicket),
    AnnotationFinished {
        job: AnnotationJob,
        result: Result<String, AnnotationError>,
    },
    FontFamilyChanged(FontFamily),
    FontSizeChanged(u32),
    LetterSpacingChanged(f32),
    WordSpacingChanged(f32),
    LineHeightChanged(f32),
    ThemeSelected(ColorTheme),
    ToggleEmphasis(bool),
    ToggleSyllables(bool),
    ToggleRuler(bool),
    RulerMoved(Point),
    ReadAloud,
    StopReading,
    SpeechSynthesized {
        request_id: u64,
        payload: Result<String, ServiceError>,
    },
    DismissNotice,
    Tick(Instant),
}
