use super::super::state::App;
use super::Effect;
use crate::debounce::DebounceTicket;
use crate::pipeline::{AnnotationJob, PipelineInput, PipelineStep};
use crate::syllables::AnnotationError;
use iced::widget::text_editor;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_editor_action(
        &mut self,
        action: text_editor::Action,
        effects: &mut Vec<Effect>,
    ) {
        let is_edit = action.is_edit();
        self.editor.perform(action);
        if is_edit {
            self.handle_text_changed(self.editor.text(), effects);
        }
    }

    pub(super) fn handle_text_changed(&mut self, text: String, effects: &mut Vec<Effect>) {
        let ticket = self.debouncer.submit(text);
        effects.push(Effect::ScheduleDebounce(ticket));
    }

    pub(super) fn handle_debounce_elapsed(
        &mut self,
        ticket: DebounceTicket,
        effects: &mut Vec<Effect>,
    ) {
        let Some(text) = self.debouncer.settle(ticket) else {
            debug!(generation = ticket.generation(), "Debounce superseded");
            return;
        };
        if text == self.debounced_text {
            return;
        }
        self.debounced_text = text;
        self.run_pipeline(effects);
    }

    pub(super) fn handle_annotation_finished(
        &mut self,
        job: AnnotationJob,
        result: Result<String, AnnotationError>,
    ) {
        if let Some(markup) = self.pipeline.complete(job, result) {
            self.publish(markup);
        }
    }

    pub(super) fn handle_toggle_emphasis(&mut self, enabled: bool, effects: &mut Vec<Effect>) {
        if self.settings.emphasis == enabled {
            return;
        }
        info!(enabled, "Toggled bionic emphasis");
        self.settings.emphasis = enabled;
        self.run_pipeline(effects);
    }

    pub(super) fn handle_toggle_syllables(&mut self, enabled: bool, effects: &mut Vec<Effect>) {
        if self.pipeline.is_processing() {
            debug!("Ignoring syllable toggle while annotation is in flight");
            return;
        }
        if self.settings.syllables == enabled {
            return;
        }
        info!(enabled, "Toggled syllable separation");
        self.settings.syllables = enabled;
        self.run_pipeline(effects);
    }

    /// Start a transform run over the debounced text and current toggles.
    pub(in crate::app) fn run_pipeline(&mut self, effects: &mut Vec<Effect>) {
        let step = self.pipeline.begin(PipelineInput {
            text: self.debounced_text.clone(),
            syllables: self.settings.syllables,
            emphasis: self.settings.emphasis,
        });
        match step {
            PipelineStep::Ready(markup) => self.publish(markup),
            PipelineStep::Annotate(job) => effects.push(Effect::AnnotateSyllables(job)),
        }
    }

    fn publish(&mut self, markup: String) {
        debug!(
            generation = self.pipeline.generation(),
            bytes = markup.len(),
            "Published transformed text"
        );
        self.annotated = markup;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::gemini::ServiceError;

    fn build_test_app(syllables: bool) -> App {
        let config = AppConfig {
            syllables: false,
            ..AppConfig::default()
        };
        let (mut app, _task) = App::bootstrap(config);
        app.settings.syllables = syllables;
        app
    }

    fn scheduled_ticket(effects: &[Effect]) -> DebounceTicket {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::ScheduleDebounce(ticket) => Some(*ticket),
                _ => None,
            })
            .expect("debounce scheduled")
    }

    fn annotation_job(effects: &[Effect]) -> AnnotationJob {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::AnnotateSyllables(job) => Some(job.clone()),
                _ => None,
            })
            .expect("annotation requested")
    }

    #[test]
    fn rapid_edits_run_the_pipeline_once_on_latest_text() {
        let mut app = build_test_app(false);
        let mut tickets = Vec::new();
        for text in ["a", "ab", "abc"] {
            let mut effects = Vec::new();
            app.handle_text_changed(text.to_string(), &mut effects);
            tickets.push(scheduled_ticket(&effects));
        }

        let generation = app.pipeline.generation();
        for ticket in &tickets[..2] {
            let mut effects = Vec::new();
            app.handle_debounce_elapsed(*ticket, &mut effects);
            assert!(effects.is_empty());
        }
        assert_eq!(app.pipeline.generation(), generation);

        let mut effects = Vec::new();
        app.handle_debounce_elapsed(tickets[2], &mut effects);
        assert_eq!(app.pipeline.generation(), generation + 1);
        assert_eq!(app.debounced_text, "abc");
        assert_eq!(app.annotated, "<b>ab</b>c");
    }

    #[test]
    fn syllable_run_waits_for_annotation() {
        let mut app = build_test_app(true);
        let mut effects = Vec::new();
        app.handle_text_changed("important".to_string(), &mut effects);
        let ticket = scheduled_ticket(&effects);

        let mut effects = Vec::new();
        app.handle_debounce_elapsed(ticket, &mut effects);
        let job = annotation_job(&effects);
        assert!(app.pipeline.is_processing());

        app.handle_annotation_finished(job, Ok("im·por·tant".to_string()));
        assert_eq!(app.annotated, "<b>im<b>·</b>por</b>·tant");
        assert!(!app.pipeline.is_processing());
    }

    #[test]
    fn failed_annotation_shows_emphasized_original() {
        let mut app = build_test_app(false);
        let mut effects = Vec::new();
        app.handle_toggle_syllables(true, &mut effects);
        let job = annotation_job(&effects);

        app.handle_annotation_finished(
            job,
            Err(AnnotationError::Service(ServiceError::Status {
                status: 500,
                message: "internal".to_string(),
            })),
        );
        assert_eq!(app.annotated, crate::emphasis::emphasize(&app.debounced_text));
    }

    #[test]
    fn syllable_toggle_is_ignored_while_processing() {
        let mut app = build_test_app(false);
        let mut effects = Vec::new();
        app.handle_toggle_syllables(true, &mut effects);
        assert!(app.pipeline.is_processing());

        let mut effects = Vec::new();
        app.handle_toggle_syllables(false, &mut effects);
        assert!(effects.is_empty());
        assert!(app.settings.syllables);
    }

    #[test]
    fn emphasis_toggle_supersedes_pending_annotation() {
        let mut app = build_test_app(false);
        let mut effects = Vec::new();
        app.handle_toggle_syllables(true, &mut effects);
        let stale = annotation_job(&effects);

        let mut effects = Vec::new();
        app.handle_toggle_emphasis(false, &mut effects);
        let fresh = annotation_job(&effects);

        app.handle_annotation_finished(stale, Ok("stale·text".to_string()));
        assert!(app.pipeline.is_processing());
        assert_ne!(app.annotated, "stale·text");

        app.handle_annotation_finished(fresh, Ok("fresh·text".to_string()));
        assert_eq!(app.annotated, "fresh·text");
    }

    #[test]
    fn clearing_the_text_clears_the_output() {
        let mut app = build_test_app(true);
        let mut effects = Vec::new();
        app.handle_text_changed(String::new(), &mut effects);
        let ticket = scheduled_ticket(&effects);

        let mut effects = Vec::new();
        app.handle_debounce_elapsed(ticket, &mut effects);
        assert!(effects.is_empty());
        assert!(app.annotated.is_empty());
        assert!(!app.pipeline.is_processing());
    }
}
