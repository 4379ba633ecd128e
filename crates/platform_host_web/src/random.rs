//! Jitter source backed by `Math.random`.

use platform_host::RandomSource;

#[derive(Debug, Clone, Copy, Default)]
/// Browser random source. Native builds fall back to a fixed midpoint sample.
pub struct MathRandomSource;

impl RandomSource for MathRandomSource {
    fn next_unit(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Math::random()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            0.5
        }
    }
}
