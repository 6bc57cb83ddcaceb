//! Read-aloud playback.
//!
//! [`SpeechController`] owns the audio output and the single playback
//! session. Starting is split in two halves around the remote synthesis call:
//! [`SpeechController::begin`] prepares the request and frees the slot,
//! [`SpeechController::finish`] decodes the returned audio and starts it.
//! Natural completion is picked up by [`SpeechController::poll`].

use crate::gemini::ServiceError;
use crate::markup::speakable_text;
use crate::pcm::{
    AudioBuffer, PcmError, SPEECH_CHANNELS, SPEECH_SAMPLE_RATE, decode_base64_pcm,
};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, info, warn};

/// Prefix sent ahead of the text so the voice model reads it verbatim.
pub const SPEECH_PROMPT_PREFIX: &str = "Read this clearly: ";

#[derive(Debug, Clone, thiserror::Error)]
pub enum SpeechError {
    #[error("speech service failed: {0}")]
    Service(#[from] ServiceError),

    #[error("no audio data received from the speech service")]
    NoAudio,

    #[error("could not decode speech audio: {0}")]
    Decode(#[from] PcmError),

    #[error("audio output unavailable: {0}")]
    Output(String),
}

/// A started playback that can be stopped or polled for completion.
pub trait PlaybackSession {
    fn is_finished(&self) -> bool;
    fn stop(self);
}

/// Audio device seam; the app uses [`RodioBackend`].
pub trait AudioBackend {
    type Session: PlaybackSession;

    /// Open the output on first use and make sure it is running.
    fn ensure_output(&mut self, sample_rate: u32) -> Result<(), SpeechError>;

    fn start(&mut self, buffer: AudioBuffer) -> Result<Self::Session, SpeechError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub request_id: u64,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechStart {
    /// Nothing speakable; report completion right away.
    NothingToRead,
    Synthesize(SpeechRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechOutcome {
    Started { session_id: u64 },
    /// A stop or newer request arrived while this one was in flight.
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEvent {
    Finished { session_id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechLifecycle {
    Idle,
    Requesting { request_id: u64 },
    Playing { session_id: u64 },
}

pub struct SpeechController<B: AudioBackend> {
    backend: B,
    lifecycle: SpeechLifecycle,
    session: Option<B::Session>,
    request_id: u64,
    session_id: u64,
}

impl<B: AudioBackend> SpeechController<B> {
    /// Playback always runs at the service's fixed 24 kHz mono format.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            lifecycle: SpeechLifecycle::Idle,
            session: None,
            request_id: 0,
            session_id: 0,
        }
    }

    /// True from `begin` until the session ends, fails or is stopped.
    pub fn is_active(&self) -> bool {
        !matches!(self.lifecycle, SpeechLifecycle::Idle)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.lifecycle, SpeechLifecycle::Playing { .. })
    }

    /// Prepare a read-aloud request for `markup`.
    pub fn begin(&mut self, markup: &str) -> Result<SpeechStart, SpeechError> {
        let clean = speakable_text(markup);
        if clean.trim().is_empty() {
            info!("No text to read");
            return Ok(SpeechStart::NothingToRead);
        }

        self.stop();
        self.backend.ensure_output(SPEECH_SAMPLE_RATE)?;

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        self.lifecycle = SpeechLifecycle::Requesting { request_id };
        info!(
            request_id,
            chars = clean.chars().count(),
            "Requesting speech synthesis"
        );
        Ok(SpeechStart::Synthesize(SpeechRequest {
            request_id,
            prompt: format!("{SPEECH_PROMPT_PREFIX}{clean}"),
        }))
    }

    /// Decode the synthesized payload for `request_id` and start playback.
    pub fn finish(
        &mut self,
        request_id: u64,
        payload: Result<String, ServiceError>,
    ) -> Result<SpeechOutcome, SpeechError> {
        if self.lifecycle != (SpeechLifecycle::Requesting { request_id }) {
            debug!(
                request_id,
                current = self.request_id,
                "Ignoring stale speech payload"
            );
            return Ok(SpeechOutcome::Superseded);
        }
        self.lifecycle = SpeechLifecycle::Idle;

        let payload = payload?;
        if payload.trim().is_empty() {
            return Err(SpeechError::NoAudio);
        }
        let buffer = decode_base64_pcm(&payload, SPEECH_SAMPLE_RATE, SPEECH_CHANNELS)?;
        let duration_ms = buffer.duration().as_millis();
        let session = self.backend.start(buffer)?;

        self.session_id = self.session_id.wrapping_add(1);
        let session_id = self.session_id;
        self.session = Some(session);
        self.lifecycle = SpeechLifecycle::Playing { session_id };
        info!(request_id, session_id, duration_ms, "Speech playback started");
        Ok(SpeechOutcome::Started { session_id })
    }

    /// Report natural completion of the active session, exactly once.
    pub fn poll(&mut self) -> Option<SpeechEvent> {
        let SpeechLifecycle::Playing { session_id } = self.lifecycle else {
            return None;
        };
        if !self.session.as_ref().is_none_or(|session| session.is_finished()) {
            return None;
        }
        self.session = None;
        self.lifecycle = SpeechLifecycle::Idle;
        debug!(session_id, "Speech playback finished");
        Some(SpeechEvent::Finished { session_id })
    }

    /// Halt playback and forget any pending request. No-op when idle.
    pub fn stop(&mut self) -> bool {
        let was_active = self.is_active();
        if let Some(session) = self.session.take() {
            debug!(lifecycle = ?self.lifecycle, "Stopping speech session");
            session.stop();
        }
        self.lifecycle = SpeechLifecycle::Idle;
        was_active
    }
}

/// Process-wide rodio output, opened lazily and kept for the whole run.
#[derive(Default)]
pub struct RodioBackend {
    output: Option<RodioOutput>,
}

struct RodioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sample_rate: u32,
}

impl AudioBackend for RodioBackend {
    type Session = RodioSession;

    fn ensure_output(&mut self, sample_rate: u32) -> Result<(), SpeechError> {
        if let Some(output) = &self.output {
            // rodio streams keep running once opened; there is no suspended
            // state to resume from.
            debug!(sample_rate = output.sample_rate, "Reusing audio output");
            return Ok(());
        }
        let (stream, handle) = OutputStream::try_default().map_err(|err| {
            warn!("Opening audio output failed: {err}");
            SpeechError::Output(err.to_string())
        })?;
        info!(sample_rate, "Opened audio output");
        self.output = Some(RodioOutput {
            _stream: stream,
            handle,
            sample_rate,
        });
        Ok(())
    }

    fn start(&mut self, buffer: AudioBuffer) -> Result<RodioSession, SpeechError> {
        let Some(output) = &self.output else {
            return Err(SpeechError::Output("audio output not opened".to_string()));
        };
        let sink =
            Sink::try_new(&output.handle).map_err(|err| SpeechError::Output(err.to_string()))?;
        let source = SamplesBuffer::new(
            buffer.channel_count(),
            buffer.sample_rate(),
            buffer.interleaved(),
        );
        sink.append(source);
        if sink.is_paused() {
            sink.play();
        }
        Ok(RodioSession { sink })
    }
}

pub struct RodioSession {
    sink: Sink,
}

impl PlaybackSession for RodioSession {
    fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    fn stop(self) {
        self.sink.stop();
    }
}
