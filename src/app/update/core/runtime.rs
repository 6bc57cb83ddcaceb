use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::gemini::{ServiceError, SpeechSynthesis};
use crate::syllables::{AnnotationError, SyllableAnnotator};
use iced::Task;
use tracing::debug;

impl App {
    pub(in crate::app) fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScheduleDebounce(ticket) => {
                let delay = self.debouncer.delay();
                Task::perform(
                    async move {
                        tokio::time::sleep(delay).await;
                        ticket
                    },
                    Message::DebounceElapsed,
                )
            }
            Effect::AnnotateSyllables(job) => {
                let Some(client) = self.client.clone() else {
                    return Task::done(Message::AnnotationFinished {
                        job,
                        result: Err(AnnotationError::Service(client_unavailable())),
                    });
                };
                debug!(generation = job.generation, "Dispatching syllable annotation");
                let annotator = SyllableAnnotator::new(client);
                Task::perform(
                    async move {
                        let result = annotator.annotate(&job.text).await;
                        (job, result)
                    },
                    |(job, result)| Message::AnnotationFinished { job, result },
                )
            }
            Effect::SynthesizeSpeech(request) => {
                let request_id = request.request_id;
                let Some(client) = self.client.clone() else {
                    return Task::done(Message::SpeechSynthesized {
                        request_id,
                        payload: Err(client_unavailable()),
                    });
                };
                debug!(request_id, "Dispatching speech synthesis");
                Task::perform(
                    async move { client.synthesize_speech(&request.prompt).await },
                    move |payload| Message::SpeechSynthesized {
                        request_id,
                        payload,
                    },
                )
            }
        }
    }
}

fn client_unavailable() -> ServiceError {
    ServiceError::Transport("HTTP client unavailable".to_string())
}
