//! Orchestrates the text transforms: syllable annotation first, emphasis
//! second.
//!
//! Every run gets a generation number. Annotation results that come back for
//! an older generation are dropped so a slow response can never overwrite the
//! output of a newer edit.

use crate::emphasis::emphasize;
use crate::syllables::AnnotationError;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineInput {
    pub text: String,
    pub syllables: bool,
    pub emphasis: bool,
}

/// Remote annotation that must finish before the run can publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationJob {
    pub generation: u64,
    pub text: String,
    pub emphasis: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineStep {
    /// Final markup, ready to publish.
    Ready(String),
    Annotate(AnnotationJob),
}

#[derive(Debug, Default)]
pub struct TransformPipeline {
    generation: u64,
    processing: bool,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the newest run waits on its annotation request.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a run. Anything still in flight from earlier runs is superseded.
    pub fn begin(&mut self, input: PipelineInput) -> PipelineStep {
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;

        if input.text.is_empty() {
            self.processing = false;
            debug!(generation, "Empty input; clearing output");
            return PipelineStep::Ready(String::new());
        }

        if input.syllables {
            self.processing = true;
            debug!(
                generation,
                chars = input.text.chars().count(),
                emphasis = input.emphasis,
                "Pipeline waiting on syllable annotation"
            );
            return PipelineStep::Annotate(AnnotationJob {
                generation,
                text: input.text,
                emphasis: input.emphasis,
            });
        }

        self.processing = false;
        PipelineStep::Ready(finish_text(input.text, input.emphasis))
    }

    /// Apply an annotation result. Returns the markup to publish, or `None`
    /// when the run has been superseded.
    pub fn complete(
        &mut self,
        job: AnnotationJob,
        result: Result<String, AnnotationError>,
    ) -> Option<String> {
        if job.generation != self.generation {
            debug!(
                generation = job.generation,
                current = self.generation,
                "Discarding stale syllable annotation"
            );
            return None;
        }
        self.processing = false;

        let text = match result {
            Ok(annotated) => annotated,
            Err(err) => {
                info!("Syllable annotation unavailable, using plain text: {err}");
                job.text
            }
        };
        Some(finish_text(text, job.emphasis))
    }
}

fn finish_text(text: String, emphasis: bool) -> String {
    if emphasis { emphasize(&text) } else { text }
}
