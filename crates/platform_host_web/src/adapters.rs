use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, NoopAudioCueService, NoopExternalUrlService, SequenceRandomSource,
};

use crate::{MathRandomSource, WebAudioCueService, WebExternalUrlService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless"))]
    {
        HostStrategy::Browser
    }
}

/// Assembles the host service bundle for the selected strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            audio: Rc::new(WebAudioCueService),
            external_urls: Rc::new(WebExternalUrlService),
            random: Rc::new(MathRandomSource),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => HostServices {
            audio: Rc::new(NoopAudioCueService),
            external_urls: Rc::new(NoopExternalUrlService),
            random: Rc::new(SequenceRandomSource::constant(0.5)),
            host_strategy: HostStrategy::Headless,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_reports_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
        let expected = if cfg!(feature = "headless") {
            HostStrategy::Headless
        } else {
            HostStrategy::Browser
        };
        assert_eq!(services.host_strategy, expected);
    }
}
