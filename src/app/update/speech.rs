use super::super::state::{App, SPEECH_ERROR_NOTICE};
use super::Effect;
use crate::gemini::ServiceError;
use crate::tts::{SpeechError, SpeechEvent, SpeechOutcome, SpeechStart};
use tracing::{debug, error, info};

impl App {
    pub(super) fn handle_read_aloud(&mut self, effects: &mut Vec<Effect>) {
        if self.reading || self.pipeline.is_processing() {
            debug!(
                reading = self.reading,
                processing = self.pipeline.is_processing(),
                "Read aloud unavailable"
            );
            return;
        }
        self.notice = None;
        match self.speech.begin(&self.annotated) {
            Ok(SpeechStart::NothingToRead) => self.reading = false,
            Ok(SpeechStart::Synthesize(request)) => {
                self.reading = true;
                effects.push(Effect::SynthesizeSpeech(request));
            }
            Err(err) => self.fail_speech(err),
        }
    }

    pub(super) fn handle_speech_synthesized(
        &mut self,
        request_id: u64,
        payload: Result<String, ServiceError>,
    ) {
        match self.speech.finish(request_id, payload) {
            Ok(SpeechOutcome::Started { session_id }) => {
                debug!(request_id, session_id, "Reading aloud");
            }
            Ok(SpeechOutcome::Superseded) => {}
            Err(err) => self.fail_speech(err),
        }
    }

    pub(super) fn handle_stop_reading(&mut self) {
        if self.speech.stop() {
            info!("Stopped reading aloud");
        }
        self.reading = false;
    }

    pub(super) fn handle_tick(&mut self) {
        if let Some(SpeechEvent::Finished { session_id }) = self.speech.poll() {
            info!(session_id, "Finished reading aloud");
            self.reading = false;
        }
    }

    fn fail_speech(&mut self, err: SpeechError) {
        error!("Error generating speech: {err}");
        self.speech.stop();
        self.reading = false;
        self.notice = Some(SPEECH_ERROR_NOTICE.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use std::time::Instant;

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default());
        app
    }

    #[test]
    fn blank_output_completes_immediately() {
        let mut app = build_test_app();
        app.annotated = "<b></b> · ".to_string();
        let effects = app.reduce(Message::ReadAloud);
        assert!(effects.is_empty());
        assert!(!app.reading);
        assert!(app.notice.is_none());
    }

    #[test]
    fn read_aloud_is_disabled_while_processing() {
        let mut app = build_test_app();
        let _ = app.reduce(Message::ToggleSyllables(true));
        assert!(app.pipeline.is_processing());

        let effects = app.reduce(Message::ReadAloud);
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::SynthesizeSpeech(_)))
        );
        assert!(!app.reading);
    }

    #[test]
    fn stop_when_idle_is_harmless() {
        let mut app = build_test_app();
        assert!(app.reduce(Message::StopReading).is_empty());
        assert!(app.reduce(Message::StopReading).is_empty());
        assert!(!app.reading);
        assert!(!app.speech.is_active());
    }

    #[test]
    fn stale_speech_payload_is_ignored() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::SpeechSynthesized {
            request_id: 42,
            payload: Err(ServiceError::Empty("audio")),
        });
        assert!(effects.is_empty());
        assert!(app.notice.is_none());
        assert!(!app.reading);
    }

    #[test]
    fn tick_without_playback_changes_nothing() {
        let mut app = build_test_app();
        assert!(app.reduce(Message::Tick(Instant::now())).is_empty());
        assert!(!app.reading);
    }

    #[test]
    fn speech_failure_raises_notice_and_clears_reading() {
        let mut app = build_test_app();
        app.reading = true;

        app.fail_speech(SpeechError::NoAudio);

        assert_eq!(app.notice.as_deref(), Some(SPEECH_ERROR_NOTICE));
        assert!(!app.reading);
        assert!(!app.speech.is_active());
        assert!(app.reduce(Message::Tick(Instant::now())).is_empty());
        assert!(!app.reading);
    }

    #[test]
    fn new_read_aloud_clears_previous_notice() {
        let mut app = build_test_app();
        app.fail_speech(SpeechError::Service(ServiceError::Status {
            status: 503,
            message: "overloaded".to_string(),
        }));
        assert!(app.notice.is_some());

        app.annotated = "   ".to_string();
        let _ = app.reduce(Message::ReadAloud);
        assert!(app.notice.is_none());
        assert!(!app.reading);
    }

    #[test]
    fn notice_can_be_dismissed() {
        let mut app = build_test_app();
        app.notice = Some(SPEECH_ERROR_NOTICE.to_string());
        let _ = app.reduce(Message::DismissNotice);
        assert!(app.notice.is_none());
    }
}
