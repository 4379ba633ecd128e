//! Web Audio adapter for synthesized UI cues.

use platform_host::{AudioCueService, ScheduledTone};

#[cfg(target_arch = "wasm32")]
use platform_host::{ToneSpec, Waveform, TONE_END_GAIN, TONE_START_GAIN};

#[cfg(target_arch = "wasm32")]
thread_local! {
    static AUDIO_CONTEXT: std::cell::RefCell<Option<web_sys::AudioContext>> =
        const { std::cell::RefCell::new(None) };
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser audio adapter backed by one lazily created `AudioContext` per page.
pub struct WebAudioCueService;

impl AudioCueService for WebAudioCueService {
    fn play_tones(&self, tones: &[ScheduledTone]) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let context = shared_audio_context()?;
            if context.state() == web_sys::AudioContextState::Suspended {
                // Browsers keep the context suspended until a user gesture; resuming is async and
                // tones scheduled meanwhile simply start once it runs.
                let _ = context.resume();
            }
            for scheduled in tones {
                let start_at = context.current_time() + f64::from(scheduled.offset_ms) / 1000.0;
                play_tone(&context, scheduled.tone, start_at)?;
            }
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = tones;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn shared_audio_context() -> Result<web_sys::AudioContext, String> {
    AUDIO_CONTEXT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(context) = slot.as_ref() {
            return Ok(context.clone());
        }
        let context = web_sys::AudioContext::new()
            .map_err(|err| format!("audio context unavailable: {err:?}"))?;
        *slot = Some(context.clone());
        Ok(context)
    })
}

#[cfg(target_arch = "wasm32")]
fn oscillator_type(waveform: Waveform) -> web_sys::OscillatorType {
    match waveform {
        Waveform::Sine => web_sys::OscillatorType::Sine,
        Waveform::Square => web_sys::OscillatorType::Square,
        Waveform::Sawtooth => web_sys::OscillatorType::Sawtooth,
        Waveform::Triangle => web_sys::OscillatorType::Triangle,
    }
}

#[cfg(target_arch = "wasm32")]
fn play_tone(context: &web_sys::AudioContext, tone: ToneSpec, start_at: f64) -> Result<(), String> {
    let js_err = |err: wasm_bindgen::JsValue| format!("tone scheduling failed: {err:?}");

    let oscillator = context.create_oscillator().map_err(js_err)?;
    let gain = context.create_gain().map_err(js_err)?;
    oscillator.set_type(oscillator_type(tone.waveform));
    oscillator
        .frequency()
        .set_value_at_time(tone.frequency_hz, start_at)
        .map_err(js_err)?;
    gain.gain()
        .set_value_at_time(TONE_START_GAIN, start_at)
        .map_err(js_err)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(TONE_END_GAIN, start_at + tone.duration_secs)
        .map_err(js_err)?;
    oscillator.connect_with_audio_node(&gain).map_err(js_err)?;
    gain.connect_with_audio_node(&context.destination())
        .map_err(js_err)?;
    let source: &web_sys::AudioScheduledSourceNode = oscillator.as_ref();
    source.start_with_when(start_at).map_err(js_err)?;
    source
        .stop_with_when(start_at + tone.duration_secs)
        .map_err(js_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use platform_host::{ToneSpec, Waveform};

    use super::*;

    #[test]
    fn native_playback_is_silent_success() {
        let tones = [ScheduledTone {
            offset_ms: 0,
            tone: ToneSpec {
                frequency_hz: 1200.0,
                waveform: Waveform::Square,
                duration_secs: 0.05,
            },
        }];
        assert_eq!(WebAudioCueService.play_tones(&tones), Ok(()));
    }
}
