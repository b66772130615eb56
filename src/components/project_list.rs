//! Project List Component
//!
//! Dashboard: every project of the signed-in user, plus the create form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{DeleteConfirmButton, ErrorMessage, SuccessMessage};
use crate::context::{use_app_context, Mutation, ReloadTrigger};
use crate::forms::{ProjectDraft, DESCRIPTION_MAX};
use crate::models::Project;
use crate::routes::Route;
use crate::services;

#[component]
pub fn ProjectList() -> impl IntoView {
    let ctx = use_app_context();
    let mutation = Mutation::new(ctx);
    let reload = ReloadTrigger::new();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);

    // Fetch on mount and after every invalidation; prior list survives a failure
    Effect::new(move |_| {
        reload.track();
        let api = ctx.api();
        set_loading.set(true);
        spawn_local(async move {
            match services::list_projects(&api).await {
                Ok(list) => {
                    log::debug!("Loaded {} projects", list.len());
                    set_projects.set(list);
                }
                Err(err) => mutation.report(err),
            }
            set_loading.set(false);
        });
    });

    let busy = mutation.busy_with(loading);

    view! {
        <div class="dashboard">
            <h2>"Projects"</h2>
            <ProjectForm mutation=mutation reload=reload busy=busy />
            <ErrorMessage message=mutation.error />
            <SuccessMessage message=mutation.success />

            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <Show when=move || !loading.get() && projects.with(|p| p.is_empty())>
                <p class="empty">"No projects yet."</p>
            </Show>

            <ul class="project-list">
                <For
                    each=move || projects.get()
                    key=|project| (project.id, project.title.clone(), project.description.clone())
                    children=move |project| {
                        let id = project.id;
                        let route = Route::Project(id);
                        let on_delete = Callback::new(move |_| {
                            mutation.run(
                                Some("Project deleted"),
                                move |api, gate| async move { actions::delete_project(&api, &gate, id).await },
                                move |_| reload.invalidate(),
                            );
                        });
                        view! {
                            <li class="project-row">
                                <a
                                    class="project-link"
                                    href=route.hash()
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.navigate(route);
                                    }
                                >
                                    {project.title.clone()}
                                </a>
                                {project.description.clone().map(|text| view! {
                                    <p class="project-description">{text}</p>
                                })}
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    disabled=busy
                                    on_confirm=on_delete
                                />
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

/// Create-project form; the draft is cleared only once the backend accepts it
#[component]
fn ProjectForm(mutation: Mutation, reload: ReloadTrigger, #[prop(into)] busy: Signal<bool>) -> impl IntoView {
    let (draft, set_draft) = signal(ProjectDraft::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        mutation.run(
            Some("Project created"),
            move |api, gate| async move { actions::create_project(&api, &gate, &current).await },
            move |project| {
                log::info!("Created project {}", project.id);
                set_draft.set(ProjectDraft::default());
                reload.invalidate();
            },
        );
    };

    view! {
        <form class="new-project-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Project title"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| set_draft.update(|d| d.title = event_target_value(&ev))
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| set_draft.update(|d| d.description = event_target_value(&ev))
            />
            <span class="char-counter">
                {move || format!("{}/{}", draft.with(|d| d.description.chars().count()), DESCRIPTION_MAX)}
            </span>
            <button type="submit" prop:disabled=move || busy.get()>
                {move || if mutation.saving.get() { "Creating..." } else { "Create project" }}
            </button>
        </form>
    }
}
