use super::*;
use crate::clock::format_clock;
use platform_host::local_clock_time_now;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_text = create_rw_signal(format_clock(local_clock_time_now()));

    if let Ok(interval) = set_interval_with_handle(
        move || clock_text.set(format_clock(local_clock_time_now())),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    // Title-bar drags cancel pointerdown, which suppresses mousedown but not click.
    let outside_click_listener = window_event_listener(ev::click, move |_| {
        if runtime.state.with_untracked(|s| s.start_menu_open) {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <footer
            class="taskbar"
            style=move || format!("height:{}px;", state.with(|s| s.settings.taskbar_height))
        >
            <button
                id="start-button"
                class=move || {
                    if state.with(|s| s.start_menu_open) { "start-button active" } else { "start-button" }
                }
                aria-haspopup="menu"
                aria-expanded=move || state.with(|s| s.start_menu_open).to_string()
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                <i class="fas fa-bars" aria-hidden="true"></i>
                <span>"Start"</span>
            </button>
            <div class="taskbar-items">
                <For
                    each=move || state.with(|s| s.taskbar_entries())
                    key=|entry| entry.app_id.clone()
                    let:entry
                >
                    <TaskbarButton app_id=entry.app_id />
                </For>
            </div>
            <div class="taskbar-clock" aria-live="off">
                {move || clock_text.get()}
            </div>
        </footer>
    }
}

#[component]
fn TaskbarButton(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entry = {
        let app_id = app_id.clone();
        Signal::derive(move || {
            runtime.state.with(|s| {
                s.taskbar_entries()
                    .into_iter()
                    .find(|entry| entry.app_id == app_id)
            })
        })
    };
    let data_app = app_id.to_string();

    view! {
        <button
            class=move || {
                entry
                    .with(|e| e.as_ref().map(|e| taskbar_entry_class(e.active, e.minimized)))
                    .unwrap_or_default()
            }
            data-app=data_app
            on:click=move |_| {
                runtime.dispatch_action(DesktopAction::BringToFront {
                    app_id: app_id.clone(),
                });
            }
        >
            {move || {
                entry.with(|e| {
                    e.as_ref().map(|e| {
                        view! {
                            <i class=icon_class(&e.icon_id) aria-hidden="true"></i>
                            <span>{e.title.clone()}</span>
                        }
                    })
                })
            }}
        </button>
    }
}
