//! Desktop shell UI composition and interaction surfaces.

mod boot_screen;
mod menus;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{boot_screen::BootScreen, menus::StartMenu, taskbar::Taskbar, window::DesktopWindow};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
use crate::{
    model::{AppId, PointerPosition, WindowHandle, WindowSize},
    reducer::DesktopAction,
};

#[component]
/// Top-level shell: the boot screen until boot completes, then icons, windows and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| end_active_drag(runtime);

    view! {
        <Show when=move || state.with(|s| s.booted) fallback=|| view! { <BootScreen /> }>
            <div
                id="desktop-shell-root"
                class="desktop-shell"
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_end
                on:pointercancel=on_pointer_end
            >
                <div class="desktop-icons">
                    <For
                        each=move || runtime.registry.with_value(|r| r.desktop_icon_apps())
                        key=|app| app.id.clone()
                        let:app
                    >
                        {{
                            let app_id = app.id.clone();
                            view! {
                                <button
                                    class="desktop-icon"
                                    data-app=app.id.to_string()
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::ActivateIcon {
                                            app_id: app_id.clone(),
                                        });
                                    }
                                >
                                    <i class=icon_class(&app.icon) aria-hidden="true"></i>
                                    <span>{app.title.clone()}</span>
                                </button>
                            }
                        }}
                    </For>
                </div>

                <div class="desktop-window-layer">
                    <For
                        each=move || state.get().windows
                        key=|win| win.app_id.clone()
                        let:win
                    >
                        <DesktopWindow app_id=win.app_id />
                    </For>
                </div>

                <StartMenu />
                <Taskbar />
            </div>
        </Show>
    }
}

fn icon_class(icon: &str) -> String {
    format!("fas {icon}")
}

/// Inline style for a window element. Maximized windows fill the canvas above the taskbar.
fn window_style(win: &WindowHandle, taskbar_height: i32) -> String {
    let geometry = match win.size {
        WindowSize::Auto { width } => format!("width:{width}px;height:auto;"),
        WindowSize::Maximized => format!("width:100%;height:calc(100% - {taskbar_height}px);"),
    };
    let display = if win.is_minimized() { "display:none;" } else { "" };
    format!(
        "left:{}px;top:{}px;z-index:{};{geometry}{display}",
        win.position.x, win.position.y, win.z_index
    )
}

/// Icon class and label shown in a window's title bar.
fn title_bar_parts(win: &WindowHandle) -> (String, String) {
    (icon_class(&win.icon_id), win.title.clone())
}

fn taskbar_entry_class(active: bool, minimized: bool) -> String {
    let mut class = String::from("taskbar-item");
    if active {
        class.push_str(" active");
    }
    if minimized {
        class.push_str(" minimized");
    }
    class
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_drag(runtime: DesktopRuntimeContext) {
    if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
}

fn window_signal(runtime: DesktopRuntimeContext, app_id: AppId) -> Signal<Option<WindowHandle>> {
    Signal::derive(move || runtime.state.with(|s| s.window(&app_id).cloned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WindowPosition, WindowVisibility};
    use pretty_assertions::assert_eq;

    fn handle(size: WindowSize, visibility: WindowVisibility) -> WindowHandle {
        WindowHandle {
            app_id: AppId::from("blazy"),
            title: "Blazy Agent".to_string(),
            icon_id: "fa-robot".to_string(),
            position: WindowPosition::new(80, 20),
            size,
            z_index: 103,
            visibility,
        }
    }

    #[test]
    fn restored_window_style_uses_width_and_auto_height() {
        let win = handle(WindowSize::Auto { width: 450 }, WindowVisibility::Visible);
        assert_eq!(
            window_style(&win, 40),
            "left:80px;top:20px;z-index:103;width:450px;height:auto;"
        );
    }

    #[test]
    fn maximized_window_style_leaves_room_for_taskbar() {
        let win = handle(WindowSize::Maximized, WindowVisibility::Visible);
        assert_eq!(
            window_style(&win, 40),
            "left:80px;top:20px;z-index:103;width:100%;height:calc(100% - 40px);"
        );
    }

    #[test]
    fn minimized_window_is_hidden() {
        let win = handle(WindowSize::Auto { width: 450 }, WindowVisibility::Minimized);
        assert!(window_style(&win, 40).ends_with("display:none;"));
    }

    #[test]
    fn taskbar_entry_class_reflects_flags() {
        assert_eq!(taskbar_entry_class(false, false), "taskbar-item");
        assert_eq!(taskbar_entry_class(true, false), "taskbar-item active");
        assert_eq!(taskbar_entry_class(false, true), "taskbar-item minimized");
    }

    #[test]
    fn title_bar_shows_app_icon_before_title() {
        let win = handle(WindowSize::Auto { width: 450 }, WindowVisibility::Visible);
        assert_eq!(
            title_bar_parts(&win),
            ("fas fa-robot".to_string(), "Blazy Agent".to_string())
        );
    }

    #[test]
    fn icon_class_prefixes_solid_style() {
        assert_eq!(icon_class("fa-robot"), "fas fa-robot");
    }
}
