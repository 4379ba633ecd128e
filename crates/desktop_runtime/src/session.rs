//! Headless desktop shell: owned state, reducer dispatch, and render notifications.
//!
//! Each [`DesktopSession`] holds its own window map, z-order counter, and drag session, so
//! independent shells can coexist (the browser runtime keeps its state in reactive signals
//! instead). Every operation on an unknown app is a silent no-op.

use leptos::logging;

use crate::{
    apps::ContentRegistry,
    catalog::ShellCatalog,
    model::{
        AppId, DesktopState, DragSession, InteractionState, PointerPosition, TaskbarEntry,
        WindowHandle,
    },
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    render::{diff_windows, NullRenderObserver, RenderObserver},
};

pub struct DesktopSession<O: RenderObserver = NullRenderObserver> {
    registry: ContentRegistry,
    state: DesktopState,
    interaction: InteractionState,
    observer: O,
}

impl DesktopSession<NullRenderObserver> {
    /// Session with default settings and no render observer.
    pub fn headless(registry: ContentRegistry) -> Self {
        Self::new(registry, DesktopState::default(), NullRenderObserver)
    }
}

impl<O: RenderObserver> DesktopSession<O> {
    pub fn new(registry: ContentRegistry, state: DesktopState, observer: O) -> Self {
        Self {
            registry,
            state,
            interaction: InteractionState::default(),
            observer,
        }
    }

    pub fn from_catalog(catalog: &ShellCatalog, observer: O) -> Self {
        Self::new(catalog.registry.clone(), catalog.initial_state(), observer)
    }

    /// Applies one action, notifies the observer of window changes, and returns host effects.
    ///
    /// Rejected actions are logged and produce no effects.
    pub fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        let mut next = self.state.clone();
        let mut interaction = self.interaction.clone();
        match reduce_desktop(&mut next, &mut interaction, &self.registry, action) {
            Ok(effects) => {
                for command in diff_windows(&self.state, &next) {
                    self.observer.apply(&command);
                }
                self.state = next;
                self.interaction = interaction;
                effects
            }
            Err(err) => {
                logging::warn!("desktop action ignored: {err}");
                Vec::new()
            }
        }
    }

    pub fn open(&mut self, app_id: &str) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::OpenApp {
            app_id: AppId::from(app_id),
        })
    }

    pub fn close(&mut self, app_id: &str) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::CloseWindow {
            app_id: AppId::from(app_id),
        })
    }

    pub fn minimize(&mut self, app_id: &str) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::MinimizeWindow {
            app_id: AppId::from(app_id),
        })
    }

    pub fn maximize(&mut self, app_id: &str) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::ToggleMaximize {
            app_id: AppId::from(app_id),
        })
    }

    pub fn bring_to_front(&mut self, app_id: &str) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::BringToFront {
            app_id: AppId::from(app_id),
        })
    }

    pub fn start_drag(&mut self, app_id: &str, pointer: PointerPosition) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::BeginMove {
            app_id: AppId::from(app_id),
            pointer,
        })
    }

    pub fn update_drag(&mut self, pointer: PointerPosition) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::UpdateMove { pointer })
    }

    pub fn end_drag(&mut self) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::EndMove)
    }

    pub fn toggle_start_menu(&mut self) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::ToggleStartMenu)
    }

    /// Click landed outside the start menu and its launcher button.
    pub fn dismiss_start_menu(&mut self) -> Vec<RuntimeEffect> {
        self.dispatch(DesktopAction::CloseStartMenu)
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    pub fn windows(&self) -> &[WindowHandle] {
        &self.state.windows
    }

    pub fn window(&self, app_id: &str) -> Option<&WindowHandle> {
        self.state.window(&AppId::from(app_id))
    }

    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        self.state.taskbar_entries()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.interaction.dragging.as_ref()
    }

    pub fn start_menu_open(&self) -> bool {
        self.state.start_menu_open
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        apps::AppDescriptor,
        render::{RecordingRenderObserver, RenderCommand, StylePatch},
    };

    fn session() -> DesktopSession<RecordingRenderObserver> {
        let registry = ContentRegistry::new(vec![
            AppDescriptor::simple("judge", "Judge", "fa-gavel"),
            AppDescriptor::simple("verde", "Verde", "fa-leaf"),
        ])
        .unwrap();
        DesktopSession::new(
            registry,
            DesktopState::default(),
            RecordingRenderObserver::default(),
        )
    }

    #[test]
    fn observer_sees_render_then_style_then_unrender() {
        let mut shell = session();
        shell.open("judge");
        shell.minimize("judge");
        shell.close("judge");

        let commands = shell.observer_mut().take();
        assert_eq!(commands.len(), 3);
        assert!(matches!(&commands[0], RenderCommand::Render(w) if w.app_id.as_str() == "judge"));
        assert_eq!(
            commands[1],
            RenderCommand::UpdateStyle {
                app_id: AppId::from("judge"),
                patch: StylePatch {
                    visibility: Some(crate::model::WindowVisibility::Minimized),
                    ..StylePatch::default()
                },
            }
        );
        assert_eq!(commands[2], RenderCommand::Unrender(AppId::from("judge")));
    }

    #[test]
    fn rejected_actions_notify_nothing() {
        let mut shell = session();
        assert!(shell.open("ghost").is_empty());
        assert!(shell.update_drag(PointerPosition::new(1, 1)).is_empty());
        assert!(shell.observer().commands.is_empty());
    }

    #[test]
    fn sessions_are_independent() {
        let mut first = session();
        let second = session();
        first.open("verde");
        assert_eq!(first.windows().len(), 1);
        assert!(second.windows().is_empty());
        assert_eq!(second.state().z_counter, crate::model::BASE_Z_INDEX);
    }
}
