//! Syllable segmentation through a remote language model.
//!
//! The model is asked to insert a middle dot between syllables and its answer
//! is used verbatim. Nothing checks the linguistic result; callers fall back
//! to the unannotated text whenever the call fails.

use crate::gemini::{ServiceError, TextGeneration};
use tracing::{debug, warn};

const PROMPT_PREAMBLE: &str = "You are a helpful assistant for dyslexic readers. \
Your task is to process the following text by inserting a middle dot (·) between \
syllables in each word. Do not change punctuation, capitalization, or spacing. \
For example, 'This is an important document' becomes \
'This is an im·por·tant doc·u·ment'. Process this text:\n\n";

#[derive(Debug, Clone, thiserror::Error)]
pub enum AnnotationError {
    #[error("syllable service failed: {0}")]
    Service(#[from] ServiceError),
}

/// Full prompt for `text`: fixed instructions, one worked example, the input.
pub fn syllable_prompt(text: &str) -> String {
    let mut prompt = String::with_capacity(PROMPT_PREAMBLE.len() + text.len());
    prompt.push_str(PROMPT_PREAMBLE);
    prompt.push_str(text);
    prompt
}

#[derive(Debug, Clone)]
pub struct SyllableAnnotator<S> {
    service: S,
}

impl<S: TextGeneration> SyllableAnnotator<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Annotate `text` with syllable markers.
    ///
    /// Blank input is returned as-is without contacting the service.
    pub async fn annotate(&self, text: &str) -> Result<String, AnnotationError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }
        debug!(chars = text.chars().count(), "Requesting syllable annotation");
        match self.service.generate_text(&syllable_prompt(text)).await {
            Ok(annotated) => Ok(annotated),
            Err(err) => {
                warn!("Error processing text for syllables: {err}");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingService {
        prompts: Mutex<Vec<String>>,
        reply: Option<String>,
    }

    #[async_trait]
    impl TextGeneration for RecordingService {
        async fn generate_text(&self, prompt: &str) -> Result<String, ServiceError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply
                .clone()
                .ok_or_else(|| ServiceError::Transport("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn blank_input_skips_the_service() {
        let annotator = SyllableAnnotator::new(RecordingService::default());
        assert_eq!(annotator.annotate("").await.unwrap(), "");
        assert_eq!(annotator.annotate("   ").await.unwrap(), "   ");
        assert!(annotator.service.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn returns_service_output_verbatim() {
        let annotator = SyllableAnnotator::new(RecordingService {
            reply: Some("doc·u·ment".to_string()),
            ..RecordingService::default()
        });
        assert_eq!(annotator.annotate("document").await.unwrap(), "doc·u·ment");

        let prompts = annotator.service.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].ends_with("\n\ndocument"));
        assert!(prompts[0].contains("im·por·tant doc·u·ment"));
    }

    #[tokio::test]
    async fn service_failure_is_reported_as_error() {
        let annotator = SyllableAnnotator::new(RecordingService::default());
        let result = annotator.annotate("document").await;
        assert!(matches!(
            result,
            Err(AnnotationError::Service(ServiceError::Transport(_)))
        ));
    }
}
