//! Shared host-bundle models for browser and native runtime composition.

use std::rc::Rc;

use crate::{AudioCueService, ExternalUrlService, RandomSource};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Headless composition with no-op adapters (native builds and tests).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Synthesized UI sound playback.
    pub audio: Rc<dyn AudioCueService>,
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Jitter source for boot animation timing.
    pub random: Rc<dyn RandomSource>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle of no-op services with a fixed jitter sample.
    pub fn headless() -> Self {
        Self {
            audio: Rc::new(crate::NoopAudioCueService),
            external_urls: Rc::new(crate::NoopExternalUrlService),
            random: Rc::new(crate::SequenceRandomSource::constant(0.5)),
            host_strategy: HostStrategy::Headless,
        }
    }
}
