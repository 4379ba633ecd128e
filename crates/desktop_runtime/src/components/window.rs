use super::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// URL of the `a[data-external-url]` the click landed in, if any.
#[cfg(target_arch = "wasm32")]
fn external_link_target(ev: &web_sys::MouseEvent) -> Option<String> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let anchor = element.closest("a[data-external-url]").ok()??;
    anchor.get_attribute("data-external-url")
}

#[cfg(not(target_arch = "wasm32"))]
fn external_link_target(_: &web_sys::MouseEvent) -> Option<String> {
    None
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = window_signal(runtime, app_id.clone());
    let taskbar_height = move || runtime.state.with(|s| s.settings.taskbar_height);
    let body_markup = runtime.registry.with_value(|registry| {
        registry
            .get(&app_id)
            .map(|app| app.body_markup())
            .unwrap_or_default()
    });

    let focus = {
        let app_id = app_id.clone();
        move |_: web_sys::PointerEvent| {
            let is_top = runtime
                .state
                .with_untracked(|s| s.topmost_visible().map(|w| w.app_id == app_id))
                .unwrap_or(false);
            if !is_top {
                runtime.dispatch_action(DesktopAction::BringToFront {
                    app_id: app_id.clone(),
                });
            }
        }
    };
    let begin_move = {
        let app_id = app_id.clone();
        move |ev: web_sys::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            ev.stop_propagation();
            runtime.dispatch_action(DesktopAction::BeginMove {
                app_id: app_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let action_button = {
        let app_id = app_id.clone();
        move |make: fn(AppId) -> DesktopAction| {
            let app_id = app_id.clone();
            move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                runtime.dispatch_action(make(app_id.clone()));
            }
        }
    };
    let minimize = action_button(|app_id| DesktopAction::MinimizeWindow { app_id });
    let toggle_maximize = action_button(|app_id| DesktopAction::ToggleMaximize { app_id });
    let close = action_button(|app_id| DesktopAction::CloseWindow { app_id });
    let dom_id = format!("window-{app_id}");
    let body_click = move |ev: web_sys::MouseEvent| {
        if let Some(url) = external_link_target(&ev) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::OpenExternalLink { url });
        }
    };

    view! {
        <section
            class=move || {
                let maximized = window.with(|w| w.as_ref().is_some_and(|w| w.is_maximized()));
                if maximized { "window maximized" } else { "window" }
            }
            id=dom_id
            style=move || {
                window
                    .with(|w| w.as_ref().map(|w| window_style(w, taskbar_height())))
                    .unwrap_or_default()
            }
            on:pointerdown=focus
            role="dialog"
            aria-label=move || window.with(|w| w.as_ref().map(|w| w.title.clone()))
        >
            <header class="title-bar" on:pointerdown=begin_move>
                <span class="title-bar-text">
                    {move || {
                        window
                            .with(|w| w.as_ref().map(title_bar_parts))
                            .map(|(icon, title)| {
                                view! {
                                    <i class=icon aria-hidden="true"></i>
                                    " "
                                    {title}
                                }
                            })
                    }}
                </span>
                <div class="title-bar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=minimize
                    >
                        "_"
                    </button>
                    <button
                        aria-label=move || {
                            if window.with(|w| w.as_ref().is_some_and(|w| w.is_maximized())) {
                                "Restore window"
                            } else {
                                "Maximize window"
                            }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=toggle_maximize
                    >
                        "□"
                    </button>
                    <button
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=close
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body" inner_html=body_markup on:click=body_click></div>
        </section>
    }
}
