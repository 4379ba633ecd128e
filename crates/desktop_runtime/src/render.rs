//! Rendering observer boundary.
//!
//! The reducer only mutates [`DesktopState`]. Anything that draws windows learns about changes
//! through [`RenderObserver`], fed by [`diff_windows`] after each transition.

use crate::model::{
    AppId, DesktopState, WindowHandle, WindowPosition, WindowSize, WindowVisibility,
};

/// Changed style properties for one window. `None` fields are unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StylePatch {
    pub position: Option<WindowPosition>,
    pub size: Option<WindowSize>,
    pub z_index: Option<u32>,
    pub visibility: Option<WindowVisibility>,
}

impl StylePatch {
    pub fn between(before: &WindowHandle, after: &WindowHandle) -> Self {
        fn changed<T: PartialEq + Copy>(before: T, after: T) -> Option<T> {
            (before != after).then_some(after)
        }
        Self {
            position: changed(before.position, after.position),
            size: changed(before.size, after.size),
            z_index: changed(before.z_index, after.z_index),
            visibility: changed(before.visibility, after.visibility),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    Render(WindowHandle),
    Unrender(AppId),
    UpdateStyle { app_id: AppId, patch: StylePatch },
}

pub trait RenderObserver {
    fn render(&mut self, window: &WindowHandle);
    fn unrender(&mut self, app_id: &AppId);
    fn update_style(&mut self, app_id: &AppId, patch: StylePatch);

    fn apply(&mut self, command: &RenderCommand) {
        match command {
            RenderCommand::Render(window) => self.render(window),
            RenderCommand::Unrender(app_id) => self.unrender(app_id),
            RenderCommand::UpdateStyle { app_id, patch } => self.update_style(app_id, *patch),
        }
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderObserver;

impl RenderObserver for NullRenderObserver {
    fn render(&mut self, _window: &WindowHandle) {}
    fn unrender(&mut self, _app_id: &AppId) {}
    fn update_style(&mut self, _app_id: &AppId, _patch: StylePatch) {}
}

/// Observer that keeps every command it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderObserver {
    pub commands: Vec<RenderCommand>,
}

impl RecordingRenderObserver {
    pub fn take(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderObserver for RecordingRenderObserver {
    fn render(&mut self, window: &WindowHandle) {
        self.commands.push(RenderCommand::Render(window.clone()));
    }

    fn unrender(&mut self, app_id: &AppId) {
        self.commands.push(RenderCommand::Unrender(app_id.clone()));
    }

    fn update_style(&mut self, app_id: &AppId, patch: StylePatch) {
        self.commands.push(RenderCommand::UpdateStyle {
            app_id: app_id.clone(),
            patch,
        });
    }
}

/// Commands that turn the window set of `before` into that of `after`.
///
/// Removals come first, then creations and style updates in `after`'s window order.
pub fn diff_windows(before: &DesktopState, after: &DesktopState) -> Vec<RenderCommand> {
    let mut commands: Vec<RenderCommand> = before
        .windows
        .iter()
        .filter(|w| !after.is_open(&w.app_id))
        .map(|w| RenderCommand::Unrender(w.app_id.clone()))
        .collect();

    for window in &after.windows {
        match before.window(&window.app_id) {
            None => commands.push(RenderCommand::Render(window.clone())),
            Some(previous) => {
                let patch = StylePatch::between(previous, window);
                if !patch.is_empty() {
                    commands.push(RenderCommand::UpdateStyle {
                        app_id: window.app_id.clone(),
                        patch,
                    });
                }
            }
        }
    }
    commands
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn window(id: &str, z_index: u32) -> WindowHandle {
        WindowHandle {
            app_id: AppId::from(id),
            title: id.to_string(),
            icon_id: "fa-leaf".to_string(),
            position: WindowPosition::new(50, 50),
            size: WindowSize::Auto { width: 450 },
            z_index,
            visibility: WindowVisibility::Visible,
        }
    }

    #[test]
    fn identical_states_produce_no_commands() {
        let mut state = DesktopState::default();
        state.windows.push(window("verde", 101));
        assert!(diff_windows(&state, &state.clone()).is_empty());
    }

    #[test]
    fn diff_reports_removals_creations_and_patches() {
        let mut before = DesktopState::default();
        before.windows.push(window("judge", 101));
        before.windows.push(window("verde", 102));

        let mut after = before.clone();
        after.windows.retain(|w| w.app_id.as_str() != "judge");
        after.windows[0].z_index = 104;
        after.windows[0].visibility = WindowVisibility::Minimized;
        after.windows.push(window("sapo", 103));

        assert_eq!(
            diff_windows(&before, &after),
            vec![
                RenderCommand::Unrender(AppId::from("judge")),
                RenderCommand::UpdateStyle {
                    app_id: AppId::from("verde"),
                    patch: StylePatch {
                        z_index: Some(104),
                        visibility: Some(WindowVisibility::Minimized),
                        ..StylePatch::default()
                    },
                },
                RenderCommand::Render(window("sapo", 103)),
            ]
        );
    }

    #[test]
    fn recording_observer_replays_commands() {
        let mut observer = RecordingRenderObserver::default();
        let command = RenderCommand::Unrender(AppId::from("judge"));
        observer.apply(&command);
        assert_eq!(observer.take(), vec![command]);
        assert!(observer.commands.is_empty());
    }
}
