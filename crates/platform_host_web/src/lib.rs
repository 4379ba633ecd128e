//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for synthesized audio, external
//! URL opening, and timing jitter. Every adapter compiles on native targets too, where it
//! degrades to a silent or unsupported stand-in so the runtime can be tested headlessly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host service bundle factory.
pub mod adapters;
pub mod audio;
pub mod external_url;
pub mod random;

pub use adapters::{build_host_services, selected_host_strategy};
pub use audio::WebAudioCueService;
pub use external_url::WebExternalUrlService;
pub use random::MathRandomSource;
