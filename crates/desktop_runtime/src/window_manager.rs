//! Window-stack transition helpers used by the desktop reducer.

use crate::model::{
    AppId, DesktopState, PointerPosition, WindowHandle, WindowPosition, WindowSize,
    WindowVisibility,
};

/// Advances the z-order counter and returns the new value.
pub fn next_z_index(state: &mut DesktopState) -> u32 {
    state.z_counter = state.z_counter.saturating_add(1);
    state.z_counter
}

pub fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    app_id: &AppId,
) -> Option<&'a mut WindowHandle> {
    state.windows.iter_mut().find(|w| w.app_id == *app_id)
}

/// Raises `app_id` above every other window and makes it visible.
///
/// Returns `false` when no such window is open.
pub fn bring_to_front(state: &mut DesktopState, app_id: &AppId) -> bool {
    if !state.is_open(app_id) {
        return false;
    }
    let z_index = next_z_index(state);
    if let Some(window) = find_window_mut(state, app_id) {
        window.z_index = z_index;
        window.visibility = WindowVisibility::Visible;
    }
    true
}

/// Flips a window between the fixed restored geometry and the full canvas.
pub fn toggle_maximized(state: &mut DesktopState, app_id: &AppId) -> bool {
    let layout = state.layout;
    let Some(window) = find_window_mut(state, app_id) else {
        return false;
    };
    if window.is_maximized() {
        window.size = layout.restored_size();
        window.position = layout.restored_position();
    } else {
        window.size = WindowSize::Maximized;
        window.position = WindowPosition::new(0, 0);
    }
    true
}

/// Window position for a pointer during a drag. The top edge never goes above the canvas.
pub fn dragged_position(pointer: PointerPosition, grab_offset: PointerPosition) -> WindowPosition {
    WindowPosition::new(
        pointer.x.saturating_sub(grab_offset.x),
        pointer.y.saturating_sub(grab_offset.y).max(0),
    )
}
