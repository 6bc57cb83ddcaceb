use crate::debounce::DebounceTicket;
use crate::pipeline::AnnotationJob;
use crate::tts::SpeechRequest;

mod appearance;
mod core;
mod speech;
mod text;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    ScheduleDebounce(DebounceTicket),
    AnnotateSyllables(AnnotationJob),
    SynthesizeSpeech(SpeechRequest),
}
