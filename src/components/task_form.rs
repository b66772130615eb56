//! Task Form Component

use leptos::prelude::*;

use crate::actions;
use crate::components::{ErrorMessage, SuccessMessage};
use crate::context::{use_app_context, Mutation};
use crate::forms::TaskDraft;

/// Create-task form for one project. Owns its own pending gate so it can be
/// used while a task row request is in flight.
#[component]
pub fn TaskForm(
    project_id: i64,
    #[prop(into)] reloading: Signal<bool>,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let mutation = Mutation::new(ctx);
    let (draft, set_draft) = signal(TaskDraft::default());

    let busy = mutation.busy_with(reloading);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        mutation.run(
            Some("Task created"),
            move |api, gate| async move { actions::create_task(&api, &gate, project_id, &current).await },
            move |task| {
                log::info!("Created task {} in project {}", task.id, project_id);
                set_draft.set(TaskDraft::default());
                on_created.run(());
            },
        );
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="New task"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| set_draft.update(|d| d.title = event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || draft.with(|d| d.due_date.clone())
                on:input=move |ev| set_draft.update(|d| d.due_date = event_target_value(&ev))
            />
            <button type="submit" prop:disabled=move || busy.get()>
                {move || if mutation.saving.get() { "Adding..." } else { "Add task" }}
            </button>
            <ErrorMessage message=mutation.error />
            <SuccessMessage message=mutation.success />
        </form>
    }
}
