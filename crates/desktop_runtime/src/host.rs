//! Host-side execution of reducer effects.
//!
//! Keeps the reducer free of browser calls: sounds and external navigation go through the
//! injected [`HostServices`] bundle, so headless builds run the same effect pipeline.

use std::rc::Rc;

use leptos::{logging, spawn_local};
use platform_host::{AudioCueService, ExternalUrlService, HostServices, RandomSource};

use crate::{audio::AudioCue, reducer::RuntimeEffect};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    audio: Rc<dyn AudioCueService>,
    external_urls: Rc<dyn ExternalUrlService>,
    random: Rc<dyn RandomSource>,
    host_strategy_name: &'static str,
}

impl DesktopHostContext {
    pub fn new(services: HostServices) -> Self {
        Self {
            audio: services.audio,
            external_urls: services.external_urls,
            random: services.random,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Returns the jitter source used by the boot screen.
    pub fn random_source(&self) -> Rc<dyn RandomSource> {
        self.random.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PlaySound(cue) => self.play_cue(cue),
            RuntimeEffect::OpenExternalUrl(url) => self.open_external_url(url),
        }
    }

    fn play_cue(&self, cue: AudioCue) {
        if let Err(err) = self.audio.play_tones(&cue.tones()) {
            logging::warn!("{} cue playback failed: {err}", cue.name());
        }
    }

    fn open_external_url(&self, url: String) {
        let external_urls = self.external_urls.clone();
        spawn_local(async move {
            if let Err(err) = external_urls.open_url(&url).await {
                logging::warn!("open external url failed for `{url}`: {err}");
            }
        });
    }
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::headless())
    }
}
