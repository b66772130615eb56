//! Project Detail Component
//!
//! One project with its tasks: create form, filter/sort controls and task rows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorMessage, SuccessMessage, TaskForm, TaskRow};
use crate::context::{use_app_context, Mutation, ReloadTrigger};
use crate::models::Project;
use crate::services;
use crate::task_view::{visible_tasks, TaskSort};

#[component]
pub fn ProjectDetail(project_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    // shared by every task row: one row request at a time
    let mutation = Mutation::new(ctx);
    let reload = ReloadTrigger::new();

    let (project, set_project) = signal(None::<Project>);
    let (loading, set_loading) = signal(true);
    let (query, set_query) = signal(String::new());
    let (sort, set_sort) = signal(TaskSort::default());

    Effect::new(move |_| {
        reload.track();
        let api = ctx.api();
        set_loading.set(true);
        spawn_local(async move {
            match services::get_project(&api, project_id).await {
                Ok(found) => set_project.set(Some(found)),
                Err(err) => {
                    set_project.set(None);
                    mutation.report(err);
                }
            }
            set_loading.set(false);
        });
    });

    // Recomputed from the snapshot on every change of snapshot, query or sort
    let tasks = Memo::new(move |_| {
        let query = query.get();
        let sort = sort.get();
        project.with(|p| {
            p.as_ref()
                .map(|p| visible_tasks(p.tasks.as_deref().unwrap_or_default(), &query, sort))
                .unwrap_or_default()
        })
    });

    let total = move || project.with(|p| p.as_ref().and_then(|p| p.tasks.as_ref()).map_or(0, Vec::len));
    let on_created = Callback::new(move |_| reload.invalidate());
    // rows must not act on a snapshot that is about to be replaced
    let busy = mutation.busy_with(loading);

    view! {
        <div class="project-detail">
            <ErrorMessage message=mutation.error />
            <SuccessMessage message=mutation.success />
            <Show
                when=move || project.with(Option::is_some)
                fallback=move || view! {
                    <p class="placeholder">
                        {move || if loading.get() { "Loading..." } else { "Project not available." }}
                    </p>
                }
            >
                <h2>{move || project.with(|p| p.as_ref().map(|p| p.title.clone()).unwrap_or_default())}</h2>
                {move || project.with(|p| p.as_ref().and_then(|p| p.description.clone())).map(|text| view! {
                    <p class="project-description">{text}</p>
                })}

                <TaskForm project_id=project_id reloading=loading on_created=on_created />

                <div class="task-controls">
                    <input
                        type="search"
                        placeholder="Filter tasks"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| {
                        if let Some(selected) = TaskSort::from_key(&event_target_value(&ev)) {
                            set_sort.set(selected);
                        }
                    }>
                        {TaskSort::ALL.into_iter().map(|option| view! {
                            <option value=option.key() selected=move || sort.get() == option>
                                {option.label()}
                            </option>
                        }).collect_view()}
                    </select>
                    <span class="task-count">
                        {move || format!("{} of {}", tasks.with(Vec::len), total())}
                    </span>
                    <Show when=move || loading.get()>
                        <span class="loading">"Refreshing..."</span>
                    </Show>
                </div>

                <Show when=move || tasks.with(Vec::is_empty)>
                    <p class="empty">"No tasks to show."</p>
                </Show>
                <ul class="task-list">
                    <For
                        each=move || tasks.get()
                        key=|task| (task.id, task.title.clone(), task.due_date.clone(), task.is_completed)
                        children=move |task| view! {
                            <TaskRow task=task mutation=mutation reload=reload busy=busy />
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
