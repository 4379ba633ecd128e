use super::*;
use leptos::leptos_dom::helpers::TimeoutHandle;
use crate::boot::{BootEvent, BootSequencer};

#[derive(Clone, Copy)]
struct BootView {
    sequencer: StoredValue<BootSequencer>,
    pending: StoredValue<Option<TimeoutHandle>>,
    lines: RwSignal<Vec<String>>,
    progress_visible: RwSignal<bool>,
    progress: RwSignal<f64>,
}

fn schedule_tick(runtime: DesktopRuntimeContext, boot: BootView, delay: Duration) {
    match set_timeout_with_handle(move || run_tick(runtime, boot), delay) {
        Ok(handle) => boot.pending.set_value(Some(handle)),
        Err(err) => logging::warn!("boot timer scheduling failed: {err:?}"),
    }
}

fn run_tick(runtime: DesktopRuntimeContext, boot: BootView) {
    let random = runtime.host.with_value(|host| host.random_source());
    let Some(tick) = boot
        .sequencer
        .try_update_value(|sequencer| sequencer.tick(random.as_ref()))
    else {
        return;
    };

    for event in tick.events {
        match event {
            BootEvent::LineRevealed(line) => boot.lines.update(|lines| lines.push(line)),
            BootEvent::ProgressBarShown => boot.progress_visible.set(true),
            BootEvent::ProgressAdvanced(percent) => boot.progress.set(percent),
            BootEvent::DesktopLaunched => runtime.dispatch_action(DesktopAction::CompleteBoot),
        }
    }
    for cue in tick.cues {
        runtime.dispatch_action(DesktopAction::PlayCue(cue));
    }
    if let Some(delay) = tick.next_delay {
        schedule_tick(runtime, boot, delay);
    }
}

#[component]
pub(super) fn BootScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let boot = BootView {
        sequencer: store_value(BootSequencer::new(runtime.boot_config.get_value())),
        pending: store_value(None),
        lines: create_rw_signal(Vec::new()),
        progress_visible: create_rw_signal(false),
        progress: create_rw_signal(0.0),
    };

    if let Some(delay) = boot.sequencer.try_update_value(BootSequencer::start).flatten() {
        schedule_tick(runtime, boot, delay);
    }
    on_cleanup(move || {
        boot.sequencer.try_update_value(BootSequencer::cancel);
        if let Some(Some(handle)) = boot.pending.try_get_value() {
            handle.clear();
        }
    });

    view! {
        <div id="boot-screen" class="boot-screen">
            <div class="boot-text">
                <For
                    each=move || boot.lines.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    let:line
                >
                    <div class="boot-line">{line.1}</div>
                </For>
            </div>
            <Show when=move || boot.progress_visible.get() fallback=|| ()>
                <div class="boot-progress">
                    <div
                        class="boot-progress-bar"
                        style=move || format!("width:{}%;", boot.progress.get())
                    ></div>
                </div>
            </Show>
        </div>
    }
}
