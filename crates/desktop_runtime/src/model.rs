use std::fmt;

use serde::{Deserialize, Serialize};

/// Stacking value held by the z-order counter before any window is opened.
pub const BASE_Z_INDEX: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSize {
    /// Fixed width with content-driven height.
    Auto { width: i32 },
    /// Fills the desktop canvas above the taskbar.
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowVisibility {
    Visible,
    Minimized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle {
    pub app_id: AppId,
    pub title: String,
    pub icon_id: String,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub z_index: u32,
    pub visibility: WindowVisibility,
}

impl WindowHandle {
    pub fn is_maximized(&self) -> bool {
        matches!(self.size, WindowSize::Maximized)
    }

    pub fn is_minimized(&self) -> bool {
        self.visibility == WindowVisibility::Minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub app_id: AppId,
    pub title: String,
    pub icon_id: String,
    /// Set for the topmost visible window.
    pub active: bool,
    pub minimized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSettings {
    pub audio_enabled: bool,
    pub taskbar_height: i32,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            taskbar_height: 40,
        }
    }
}

/// Placement rules for newly opened and restored windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowLayout {
    pub origin: i32,
    pub cascade_step: i32,
    pub default_width: i32,
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self {
            origin: 50,
            cascade_step: 30,
            default_width: 450,
        }
    }
}

impl WindowLayout {
    /// Position for a new window given how many windows are already open.
    pub fn cascade_position(&self, open_count: usize) -> WindowPosition {
        let offset = self.origin + (open_count as i32).saturating_mul(self.cascade_step);
        WindowPosition::new(offset, offset)
    }

    pub fn restored_position(&self) -> WindowPosition {
        WindowPosition::new(self.origin, self.origin)
    }

    pub fn restored_size(&self) -> WindowSize {
        WindowSize::Auto {
            width: self.default_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    /// Open windows in the order they were opened. Keyed uniquely by app id.
    pub windows: Vec<WindowHandle>,
    /// Last stacking value handed out.
    pub z_counter: u32,
    pub start_menu_open: bool,
    pub booted: bool,
    pub settings: ShellSettings,
    pub layout: WindowLayout,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(ShellSettings::default(), WindowLayout::default())
    }
}

impl DesktopState {
    pub fn new(settings: ShellSettings, layout: WindowLayout) -> Self {
        Self {
            windows: Vec::new(),
            z_counter: BASE_Z_INDEX,
            start_menu_open: false,
            booted: false,
            settings,
            layout,
        }
    }

    pub fn window(&self, app_id: &AppId) -> Option<&WindowHandle> {
        self.windows.iter().find(|w| w.app_id == *app_id)
    }

    pub fn is_open(&self, app_id: &AppId) -> bool {
        self.window(app_id).is_some()
    }

    /// The visible window with the highest stacking value.
    pub fn topmost_visible(&self) -> Option<&WindowHandle> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized())
            .max_by_key(|w| w.z_index)
    }

    /// Taskbar entries mirroring the open windows, in open order.
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        let active = self.topmost_visible().map(|w| w.app_id.clone());
        self.windows
            .iter()
            .map(|w| TaskbarEntry {
                app_id: w.app_id.clone(),
                title: w.title.clone(),
                icon_id: w.icon_id.clone(),
                active: active.as_ref() == Some(&w.app_id),
                minimized: w.is_minimized(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    /// Pointer offset from the window's top-left corner at grab time.
    pub grab_offset: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
