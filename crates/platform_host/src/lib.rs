//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services: synthesized audio, external URL
//! navigation, timing jitter, and wall-clock time. Concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod audio;
pub mod external_url;
pub mod host;
pub mod random;
pub mod time;

pub use audio::{
    AudioCueService, NoopAudioCueService, ScheduledTone, ToneSpec, Waveform, TONE_END_GAIN,
    TONE_START_GAIN,
};
pub use external_url::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};
pub use host::{HostServices, HostStrategy};
pub use random::{RandomSource, SequenceRandomSource};
pub use time::{local_clock_time_now, unix_time_ms_now, LocalClockTime};
