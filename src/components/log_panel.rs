//! Log Panel Component
//!
//! Recent client log lines, for diagnosing failed requests without devtools.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(browser_logger::recent_lines());

    view! {
        <button
            class="logs-btn"
            on:click=move |_| {
                if !open.get_untracked() {
                    refresh();
                }
                set_open.update(|o| *o = !*o);
            }
        >
            {move || if open.get() { "Hide logs" } else { "Logs" }}
        </button>
        <Show when=move || open.get()>
            <div class="log-panel">
                <button class="refresh-btn" on:click=move |_| refresh()>"Refresh"</button>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </div>
        </Show>
    }
}
