//! Decoding of the raw PCM payload returned by the speech service.
//!
//! The payload is base64 text wrapping signed 16-bit little-endian samples.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::time::Duration;

/// Sample rate of the speech service output.
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;
pub const SPEECH_CHANNELS: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PcmError {
    #[error("audio payload is not valid base64: {0}")]
    Base64(String),

    #[error("audio payload has an odd byte count ({0}); expected 16-bit samples")]
    OddLength(usize),

    #[error("audio payload declares zero channels")]
    NoChannels,

    #[error("audio payload declares a zero sample rate")]
    NoSampleRate,
}

/// Planar float buffer, one `Vec` per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> u16 {
        self.channels.len() as u16
    }

    pub fn frames(&self) -> usize {
        self.channels.first().map(Vec::len).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn channel(&self, idx: usize) -> Option<&[f32]> {
        self.channels.get(idx).map(Vec::as_slice)
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames() as f64 / self.sample_rate as f64)
    }

    /// Frame-interleaved samples, the layout audio sinks expect.
    pub fn interleaved(&self) -> Vec<f32> {
        let frames = self.frames();
        let mut out = Vec::with_capacity(frames * self.channels.len());
        for frame in 0..frames {
            for channel in &self.channels {
                out.push(channel[frame]);
            }
        }
        out
    }
}

/// Decode a base64 s16le payload into a normalized float buffer.
pub fn decode_base64_pcm(
    payload: &str,
    sample_rate: u32,
    channels: u16,
) -> Result<AudioBuffer, PcmError> {
    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|err| PcmError::Base64(err.to_string()))?;
    decode_pcm16(&bytes, sample_rate, channels)
}

/// Reinterpret little-endian 16-bit samples and scale them by `1 / 32768`.
///
/// Trailing samples that do not fill a whole frame are dropped.
pub fn decode_pcm16(bytes: &[u8], sample_rate: u32, channels: u16) -> Result<AudioBuffer, PcmError> {
    if channels == 0 {
        return Err(PcmError::NoChannels);
    }
    if sample_rate == 0 {
        return Err(PcmError::NoSampleRate);
    }
    if bytes.len() % 2 != 0 {
        return Err(PcmError::OddLength(bytes.len()));
    }
    let channel_count = channels as usize;
    let frames = bytes.len() / 2 / channel_count;
    let mut planes = vec![Vec::with_capacity(frames); channel_count];

    for (idx, pair) in bytes.chunks_exact(2).take(frames * channel_count).enumerate() {
        let sample = i16::from_le_bytes([pair[0], pair[1]]);
        planes[idx % channel_count].push(sample as f32 / 32768.0);
    }

    Ok(AudioBuffer {
        sample_rate,
        channels: planes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_signed_little_endian_samples() {
        // 0, 16384, -32768, 32767
        let bytes = [0x00, 0x00, 0x00, 0x40, 0x00, 0x80, 0xff, 0x7f];
        let buffer = decode_pcm16(&bytes, SPEECH_SAMPLE_RATE, 1).expect("decode");
        assert_eq!(buffer.frames(), 4);
        assert_eq!(
            buffer.channel(0).unwrap(),
            &[0.0, 0.5, -1.0, 32767.0 / 32768.0]
        );
    }

    #[test]
    fn decodes_base64_payload() {
        let payload = BASE64.encode([0x00u8, 0x40, 0x00, 0xc0]);
        let buffer = decode_base64_pcm(&payload, SPEECH_SAMPLE_RATE, SPEECH_CHANNELS)
            .expect("decode");
        assert_eq!(buffer.channel(0).unwrap(), &[0.5, -0.5]);
        assert_eq!(buffer.sample_rate(), 24_000);
    }

    #[test]
    fn splits_interleaved_stereo_into_planes() {
        let bytes = [0x00, 0x40, 0x00, 0xc0, 0x00, 0x20, 0x00, 0xe0];
        let buffer = decode_pcm16(&bytes, 48_000, 2).expect("decode");
        assert_eq!(buffer.frames(), 2);
        assert_eq!(buffer.channel(0).unwrap(), &[0.5, 0.25]);
        assert_eq!(buffer.channel(1).unwrap(), &[-0.5, -0.25]);
        assert_eq!(buffer.interleaved(), vec![0.5, -0.5, 0.25, -0.25]);
    }

    #[test]
    fn duration_follows_frame_count() {
        let bytes = vec![0u8; 48_000];
        let buffer = decode_pcm16(&bytes, SPEECH_SAMPLE_RATE, 1).expect("decode");
        assert_eq!(buffer.duration(), Duration::from_secs(1));
    }

    #[test]
    fn rejects_odd_length_and_bad_base64() {
        assert_eq!(
            decode_pcm16(&[0x00, 0x01, 0x02], SPEECH_SAMPLE_RATE, 1),
            Err(PcmError::OddLength(3))
        );
        assert!(matches!(
            decode_base64_pcm("@@not base64@@", SPEECH_SAMPLE_RATE, 1),
            Err(PcmError::Base64(_))
        ));
    }

    #[test]
    fn rejects_zero_channels_and_zero_rate() {
        assert_eq!(decode_pcm16(&[0x00, 0x00], 0, 1), Err(PcmError::NoSampleRate));
        assert_eq!(
            decode_pcm16(&[0x00, 0x00], SPEECH_SAMPLE_RATE, 0),
            Err(PcmError::NoChannels)
        );
    }
}
