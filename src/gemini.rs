//! Minimal Gemini `generateContent` client.
//!
//! Two seams sit on top of it: [`TextGeneration`] for the syllable pass and
//! [`SpeechSynthesis`] for read-aloud. Both take a finished prompt and return
//! the raw service output; interpreting it is up to the callers.

use crate::config::AppConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

/// Secondary variable consulted when the configured one is unset.
const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";
const AUDIO_MODALITY: &str = "AUDIO";

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error("no API key found in ${0} or $GEMINI_API_KEY")]
    MissingCredential(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("response contained no {0}")]
    Empty(&'static str),
}

#[async_trait]
pub trait TextGeneration: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// Returns the base64 audio payload.
#[async_trait]
pub trait SpeechSynthesis: Send + Sync {
    async fn synthesize_speech(&self, prompt: &str) -> Result<String, ServiceError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
    text_model: String,
    speech_model: String,
    voice: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("text_model", &self.text_model)
            .field("speech_model", &self.speech_model)
            .field("voice", &self.voice)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build()
            .map_err(|err| ServiceError::Transport(err.to_string()))?;
        let api_key = api_key_from_env(&config.api_key_env);
        if api_key.is_none() {
            warn!(
                var = %config.api_key_env,
                "No API key in environment; syllables and read-aloud will fail"
            );
        }
        debug!(
            base_url = %config.service_base_url,
            text_model = %config.annotation_model,
            speech_model = %config.speech_model,
            voice = %config.speech_voice,
            "Configured Gemini client"
        );
        Ok(Self {
            http,
            base_url: config.service_base_url.trim_end_matches('/').to_string(),
            api_key,
            api_key_env: config.api_key_env.clone(),
            text_model: config.annotation_model.clone(),
            speech_model: config.speech_model.clone(),
            voice: config.speech_voice.clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, ServiceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ServiceError::MissingCredential(self.api_key_env.clone()))?;

        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| ServiceError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ServiceError::Transport(err.to_string()))?;
        debug!(%model, status = status.as_u16(), bytes = body.len(), "Gemini response");

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        parse_response(&body)
    }
}

#[async_trait]
impl TextGeneration for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, ServiceError> {
        let request = GenerateContentRequest::text(prompt);
        let response = self.generate(&self.text_model, &request).await?;
        response_text(&response).ok_or(ServiceError::Empty("text"))
    }
}

#[async_trait]
impl SpeechSynthesis for GeminiClient {
    async fn synthesize_speech(&self, prompt: &str) -> Result<String, ServiceError> {
        let request = GenerateContentRequest::speech(prompt, &self.voice);
        let response = self.generate(&self.speech_model, &request).await?;
        response_audio(&response).ok_or(ServiceError::Empty("audio"))
    }
}

fn api_key_from_env(var: &str) -> Option<String> {
    [var, FALLBACK_API_KEY_ENV]
        .into_iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    fn text(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: None,
        }
    }

    fn speech(prompt: &'a str, voice: &'a str) -> Self {
        Self {
            generation_config: Some(GenerationConfig {
                response_modalities: vec![AUDIO_MODALITY],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig { voice_name: voice },
                    },
                },
            }),
            ..Self::text(prompt)
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: Vec<&'static str>,
    speech_config: SpeechConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Default, Deserialize)]
struct InlineData {
    #[serde(default)]
    data: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

fn parse_response(body: &str) -> Result<GenerateContentResponse, ServiceError> {
    serde_json::from_str(body).map_err(|err| ServiceError::Malformed(err.to_string()))
}

/// Concatenated text parts of the first candidate.
fn response_text(response: &GenerateContentResponse) -> Option<String> {
    let parts = &response.candidates.first()?.content.as_ref()?.parts;
    let text: String = parts.iter().filter_map(|part| part.text.as_deref()).collect();
    if text.is_empty() { None } else { Some(text) }
}

/// Inline audio of the first part of the first candidate.
fn response_audio(response: &GenerateContentResponse) -> Option<String> {
    let part = response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?;
    part.inline_data
        .as_ref()
        .map(|inline| inline.data.clone())
        .filter(|data| !data.is_empty())
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn text_request_has_no_generation_config() {
        let request = GenerateContentRequest::text("hello");
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value, json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn speech_request_asks_for_audio_with_prebuilt_voice() {
        let request = GenerateContentRequest::speech("Read this clearly: hi", "Kore");
        let value: Value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value["generationConfig"]["responseModalities"],
            json!(["AUDIO"])
        );
        assert_eq!(
            value["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
                ["voiceName"],
            json!("Kore")
        );
        assert_eq!(
            value["contents"][0]["parts"][0]["text"],
            json!("Read this clearly: hi")
        );
    }

    #[test]
    fn extracts_text_from_all_parts_of_first_candidate() {
        let body = json!({
            "candidates": [
                {"content": {"parts": [{"text": "im·por"}, {"text": "·tant"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        })
        .to_string();
        let response = parse_response(&body).expect("parse");
        assert_eq!(response_text(&response).as_deref(), Some("im·por·tant"));
    }

    #[test]
    fn extracts_inline_audio_payload() {
        let body = json!({
            "candidates": [{"content": {"parts": [
                {"inlineData": {"mimeType": "audio/L16;rate=24000", "data": "AAA="}}
            ]}}]
        })
        .to_string();
        let response = parse_response(&body).expect("parse");
        assert_eq!(response_audio(&response).as_deref(), Some("AAA="));
    }

    #[test]
    fn missing_candidates_yield_nothing() {
        let response = parse_response("{}").expect("parse");
        assert!(response_text(&response).is_none());
        assert!(response_audio(&response).is_none());
    }

    #[test]
    fn malformed_body_is_reported() {
        assert!(matches!(
            parse_response("not json"),
            Err(ServiceError::Malformed(_))
        ));
    }

    #[test]
    fn error_message_prefers_service_message() {
        let body = json!({"error": {"code": 400, "message": "API key not valid"}}).to_string();
        assert_eq!(error_message(&body), "API key not valid");
        assert_eq!(error_message("upstream timeout"), "upstream timeout");
    }
}
