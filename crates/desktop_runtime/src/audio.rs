//! UI sound cues and their tone recipes.

use platform_host::{ScheduledTone, ToneSpec, Waveform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Click,
    Open,
    Startup,
}

impl AudioCue {
    pub fn tones(self) -> Vec<ScheduledTone> {
        match self {
            Self::Click => vec![tone(0, 1200.0, Waveform::Square, 0.05)],
            Self::Open => vec![tone(0, 800.0, Waveform::Triangle, 0.1)],
            Self::Startup => vec![
                tone(0, 220.0, Waveform::Sawtooth, 0.8),
                tone(200, 440.0, Waveform::Sine, 0.8),
                tone(400, 880.0, Waveform::Square, 1.2),
            ],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Open => "open",
            Self::Startup => "startup",
        }
    }
}

fn tone(offset_ms: u32, frequency_hz: f32, waveform: Waveform, duration_secs: f64) -> ScheduledTone {
    ScheduledTone {
        offset_ms,
        tone: ToneSpec {
            frequency_hz,
            waveform,
            duration_secs,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_cue_is_a_staggered_rising_chord() {
        let tones = AudioCue::Startup.tones();
        let offsets: Vec<u32> = tones.iter().map(|t| t.offset_ms).collect();
        assert_eq!(offsets, vec![0, 200, 400]);
        assert!(tones
            .windows(2)
            .all(|pair| pair[0].tone.frequency_hz < pair[1].tone.frequency_hz));
    }

    #[test]
    fn click_is_a_short_square_blip() {
        let tones = AudioCue::Click.tones();
        assert_eq!(tones.len(), 1);
        assert_eq!(tones[0].tone.waveform, Waveform::Square);
        assert_eq!(tones[0].tone.duration_secs, 0.05);
    }
}
