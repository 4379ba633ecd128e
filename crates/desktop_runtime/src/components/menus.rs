use super::*;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let apps = runtime.registry.with_value(|registry| registry.start_menu_apps());

    view! {
        <Show when=move || runtime.state.with(|s| s.start_menu_open) fallback=|| ()>
            <div
                id="start-menu"
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="start-menu-header">"Gensyn OS"</div>
                <ul class="start-menu-items">
                    {apps
                        .iter()
                        .map(|app| {
                            let app_id = app.id.clone();
                            view! {
                                <li>
                                    <button
                                        role="menuitem"
                                        class="start-menu-item"
                                        on:click=move |ev| {
                                            stop_mouse_event(&ev);
                                            runtime.dispatch_action(
                                                DesktopAction::LaunchFromStartMenu {
                                                    app_id: app_id.clone(),
                                                },
                                            );
                                        }
                                    >
                                        <i class=icon_class(&app.icon) aria-hidden="true"></i>
                                        <span>{app.title.clone()}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Show>
    }
}
