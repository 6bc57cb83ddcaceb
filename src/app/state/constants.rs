use std::time::Duration;

pub(crate) const WINDOW_WIDTH: f32 = 1180.0;
pub(crate) const WINDOW_HEIGHT: f32 = 820.0;

/// Poll cadence for detecting the end of playback.
pub(crate) const PLAYBACK_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub(crate) const DEMO_TEXT: &str = "This is an example text to demonstrate the powerful \
features of this reading aid. You can adjust settings on the left to see how they affect \
the text in real-time. Try toggling Bionic Emphasis or Syllable Separation. You can also \
paste your own text into the input box.";

pub(crate) const OUTPUT_PLACEHOLDER: &str = "Your formatted text will appear here.";
pub(crate) const PROCESSING_HINT: &str = "AI processing syllables...";
pub(crate) const DISCLAIMER: &str =
    "*This tool is designed based on dyslexia research but is not a medical device.";
pub(crate) const SPEECH_ERROR_NOTICE: &str =
    "Sorry, there was an error generating the speech. Please check the log for details.";

/// Ruler band height as a fraction of one rendered line.
pub(crate) const RULER_LINE_FRACTION: f32 = 0.8;
pub(crate) const RULER_OPACITY: f32 = 0.2;

/// Rough advance of one space glyph as a fraction of the font size.
pub(crate) const SPACE_ADVANCE_EM: f32 = 0.3;
