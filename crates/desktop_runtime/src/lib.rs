pub mod apps;
pub mod audio;
pub mod boot;
pub mod catalog;
pub mod clock;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
pub mod render;
mod runtime_context;
pub mod session;
pub mod window_manager;

pub use apps::{AppDescriptor, AppLink, ContentRegistry, RegistryError};
pub use audio::AudioCue;
pub use boot::{BootConfig, BootEvent, BootPhase, BootSequencer, BootTick};
pub use catalog::{builtin_catalog, ShellCatalog};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use render::{
    diff_windows, NullRenderObserver, RecordingRenderObserver, RenderCommand, RenderObserver,
    StylePatch,
};
pub use session::DesktopSession;
