//! Reducer actions, side-effect intents, and transition logic for the desktop shell.

use thiserror::Error;

use crate::{
    apps::ContentRegistry,
    audio::AudioCue,
    model::{
        AppId, DesktopState, DragSession, InteractionState, PointerPosition, WindowHandle,
        WindowVisibility,
    },
    window_manager::{
        bring_to_front, dragged_position, find_window_mut, next_z_index, toggle_maximized,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app window, or raise it if already open.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Desktop icon click: click cue, then [`DesktopAction::OpenApp`].
    ActivateIcon {
        /// App behind the icon.
        app_id: AppId,
    },
    /// Start menu entry: opens the app and dismisses the menu.
    LaunchFromStartMenu {
        /// App behind the entry.
        app_id: AppId,
    },
    /// Close a window and drop its taskbar entry.
    CloseWindow {
        /// Window to close.
        app_id: AppId,
    },
    /// Hide a window, keeping its taskbar entry.
    MinimizeWindow {
        /// Window to minimize.
        app_id: AppId,
    },
    /// Toggle between the restored geometry and the full canvas.
    ToggleMaximize {
        /// Window to toggle.
        app_id: AppId,
    },
    /// Raise a window and make it visible.
    BringToFront {
        /// Window to raise.
        app_id: AppId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag, if any.
    EndMove,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Play a cue outside of a window transition (boot screen lines).
    PlayCue(AudioCue),
    /// Hand control from the boot screen to the desktop.
    CompleteBoot,
    /// Open a link from window content outside the shell.
    OpenExternalLink {
        /// Target URL.
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Play a synthesized UI sound.
    PlaySound(AudioCue),
    /// Open an external URL.
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an action was rejected. A rejected action leaves state untouched.
pub enum ReducerError {
    /// The app is neither in the content registry nor among the open windows, as required.
    #[error("unknown app `{0}`")]
    UnknownApp(AppId),
    /// A drag update arrived with no drag in progress.
    #[error("no active window drag")]
    NoActiveDrag,
}

/// Applies a [`DesktopAction`] and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownApp`] when an action references an app that is not registered
/// (for opens) or not open (for every other window action), and
/// [`ReducerError::NoActiveDrag`] for a drag update outside a drag. State is unchanged on error.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    registry: &ContentRegistry,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            open_app(state, registry, app_id, &mut effects)?;
        }
        DesktopAction::ActivateIcon { app_id } => {
            if !registry.contains(&app_id) {
                return Err(ReducerError::UnknownApp(app_id));
            }
            push_cue(state, &mut effects, AudioCue::Click);
            open_app(state, registry, app_id, &mut effects)?;
        }
        DesktopAction::LaunchFromStartMenu { app_id } => {
            open_app(state, registry, app_id, &mut effects)?;
            state.start_menu_open = false;
        }
        DesktopAction::CloseWindow { app_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.app_id != app_id);
            if state.windows.len() == before_len {
                return Err(ReducerError::UnknownApp(app_id));
            }
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.app_id == app_id)
            {
                interaction.dragging = None;
            }
        }
        DesktopAction::MinimizeWindow { app_id } => {
            let window = find_window_mut(state, &app_id)
                .ok_or_else(|| ReducerError::UnknownApp(app_id.clone()))?;
            window.visibility = WindowVisibility::Minimized;
        }
        DesktopAction::ToggleMaximize { app_id } => {
            if !bring_to_front(state, &app_id) {
                return Err(ReducerError::UnknownApp(app_id));
            }
            toggle_maximized(state, &app_id);
        }
        DesktopAction::BringToFront { app_id } => {
            if !bring_to_front(state, &app_id) {
                return Err(ReducerError::UnknownApp(app_id));
            }
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            let position = state
                .window(&app_id)
                .map(|w| w.position)
                .ok_or_else(|| ReducerError::UnknownApp(app_id.clone()))?;
            bring_to_front(state, &app_id);
            // A title-bar press lands outside the start menu.
            state.start_menu_open = false;
            interaction.dragging = Some(DragSession {
                app_id,
                grab_offset: PointerPosition::new(
                    pointer.x.saturating_sub(position.x),
                    pointer.y.saturating_sub(position.y),
                ),
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            let session = interaction
                .dragging
                .as_ref()
                .ok_or(ReducerError::NoActiveDrag)?;
            let position = dragged_position(pointer, session.grab_offset);
            if let Some(window) = find_window_mut(state, &session.app_id) {
                window.position = position;
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::ToggleStartMenu => {
            push_cue(state, &mut effects, AudioCue::Click);
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::PlayCue(cue) => {
            push_cue(state, &mut effects, cue);
        }
        DesktopAction::CompleteBoot => {
            if !state.booted {
                state.booted = true;
                push_cue(state, &mut effects, AudioCue::Startup);
            }
        }
        DesktopAction::OpenExternalLink { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
    }

    Ok(effects)
}

fn open_app(
    state: &mut DesktopState,
    registry: &ContentRegistry,
    app_id: AppId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    if bring_to_front(state, &app_id) {
        return Ok(());
    }
    let descriptor = registry
        .get(&app_id)
        .ok_or_else(|| ReducerError::UnknownApp(app_id.clone()))?;

    let position = state.layout.cascade_position(state.windows.len());
    let size = state.layout.restored_size();
    let z_index = next_z_index(state);
    state.windows.push(WindowHandle {
        app_id,
        title: descriptor.title.clone(),
        icon_id: descriptor.icon.clone(),
        position,
        size,
        z_index,
        visibility: WindowVisibility::Visible,
    });
    push_cue(state, effects, AudioCue::Open);
    Ok(())
}

fn push_cue(state: &DesktopState, effects: &mut Vec<RuntimeEffect>, cue: AudioCue) {
    if state.settings.audio_enabled {
        effects.push(RuntimeEffect::PlaySound(cue));
    }
}
