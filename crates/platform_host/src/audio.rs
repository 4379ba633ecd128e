//! Synthesized UI audio contracts.
//!
//! Cues are described as short sequences of oscillator tones so that hosts only need a single
//! primitive: play a tone with a waveform, a frequency, and an exponential fade-out.

/// Starting gain for every synthesized tone.
pub const TONE_START_GAIN: f32 = 0.1;
/// Gain every tone ramps down to before it stops. Exponential ramps cannot reach zero.
pub const TONE_END_GAIN: f32 = 0.000_01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Oscillator waveform used for one tone.
pub enum Waveform {
    /// Pure sine wave.
    Sine,
    /// Square wave.
    Square,
    /// Sawtooth wave.
    Sawtooth,
    /// Triangle wave.
    Triangle,
}

impl Waveform {
    /// Returns the Web Audio oscillator type token for this waveform.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Square => "square",
            Self::Sawtooth => "sawtooth",
            Self::Triangle => "triangle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// One oscillator tone.
pub struct ToneSpec {
    /// Oscillator frequency in hertz.
    pub frequency_hz: f32,
    /// Oscillator waveform.
    pub waveform: Waveform,
    /// Audible duration in seconds, including the fade-out.
    pub duration_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A tone scheduled relative to the moment its cue is played.
pub struct ScheduledTone {
    /// Delay from cue start in milliseconds.
    pub offset_ms: u32,
    /// Tone to play.
    pub tone: ToneSpec,
}

/// Host service that plays synthesized tones.
///
/// Playback is fire-and-forget: an `Ok` result only means the tones were handed to the host.
pub trait AudioCueService {
    /// Schedules every tone in `tones` relative to the current host audio clock.
    fn play_tones(&self, tones: &[ScheduledTone]) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Silent audio service for unsupported targets.
pub struct NoopAudioCueService;

impl AudioCueService for NoopAudioCueService {
    fn play_tones(&self, _tones: &[ScheduledTone]) -> Result<(), String> {
        Ok(())
    }
}
