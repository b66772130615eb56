//! Task Row Component
//!
//! Completion toggle, inline edit and delete for a single task.

use leptos::prelude::*;

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::{Mutation, ReloadTrigger};
use crate::dates::date_part;
use crate::forms::TaskEditDraft;
use crate::models::Task;

#[component]
pub fn TaskRow(
    task: Task,
    mutation: Mutation,
    reload: ReloadTrigger,
    /// Row request in flight or the project reloading
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let task = StoredValue::new(task);
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(TaskEditDraft::default());

    let toggle = move |ev: web_sys::MouseEvent| {
        // the box reflects the server state once the reload lands
        ev.prevent_default();
        let current = task.get_value();
        mutation.run(
            None,
            move |api, gate| async move { actions::toggle_task(&api, &gate, &current).await },
            move |_| reload.invalidate(),
        );
    };

    let start_edit = move |_| {
        set_draft.set(task.with_value(TaskEditDraft::from_task));
        mutation.clear_error();
        set_editing.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = task.get_value();
        let edit = draft.get_untracked();
        mutation.run(
            Some("Task updated"),
            move |api, gate| async move { actions::save_task_edit(&api, &gate, &current, &edit).await },
            move |_| {
                let _ = set_editing.try_set(false);
                reload.invalidate();
            },
        );
    };

    let on_delete = Callback::new(move |_| {
        let id = task.with_value(|t| t.id);
        mutation.run(
            Some("Task deleted"),
            move |api, gate| async move { actions::delete_task(&api, &gate, id).await },
            move |_| reload.invalidate(),
        );
    });

    let completed = task.with_value(|t| t.is_completed);
    let due = task.with_value(|t| t.due_date.as_deref().map(date_part));

    view! {
        <li class="task-row" class:completed=completed>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <input
                        type="checkbox"
                        prop:checked=completed
                        prop:disabled=move || busy.get()
                        on:click=toggle
                    />
                    <span class="task-title">{task.with_value(|t| t.title.clone())}</span>
                    <span class="task-due">
                        {due.clone().unwrap_or_else(|| "No due date".to_string())}
                    </span>
                    <button class="edit-btn" prop:disabled=move || busy.get() on:click=start_edit>
                        "Edit"
                    </button>
                    <DeleteConfirmButton button_class="delete-btn" disabled=busy on_confirm=on_delete />
                }
            >
                <form class="task-edit-form" on:submit=save>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| set_draft.update(|d| d.title = event_target_value(&ev))
                    />
                    <input
                        type="date"
                        prop:value=move || draft.with(|d| d.due_date.clone())
                        on:input=move |ev| set_draft.update(|d| d.due_date = event_target_value(&ev))
                    />
                    <button type="submit" prop:disabled=move || busy.get()>"Save"</button>
                    <button type="button" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                </form>
            </Show>
        </li>
    }
}
