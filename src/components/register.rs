//! Register Component

use leptos::prelude::*;

use crate::actions;
use crate::components::ErrorMessage;
use crate::context::{use_app_context, Mutation};
use crate::forms::RegisterDraft;
use crate::routes::Route;

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();
    let mutation = Mutation::new(ctx);
    let (draft, set_draft) = signal(RegisterDraft::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        mutation.run(
            None,
            move |api, gate| async move { actions::sign_up(&api, &gate, &current).await },
            move |_| ctx.navigate(Route::Dashboard),
        );
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Register"</h2>
            <input
                type="text"
                name="userName"
                placeholder="Username"
                prop:value=move || draft.with(|d| d.user_name.clone())
                on:input=move |ev| set_draft.update(|d| d.user_name = event_target_value(&ev))
            />
            <input
                type="text"
                name="email"
                placeholder="Email"
                prop:value=move || draft.with(|d| d.email.clone())
                on:input=move |ev| set_draft.update(|d| d.email = event_target_value(&ev))
            />
            <input
                type="password"
                name="password"
                placeholder="Password"
                prop:value=move || draft.with(|d| d.password.clone())
                on:input=move |ev| set_draft.update(|d| d.password = event_target_value(&ev))
            />
            <button type="submit" prop:disabled=move || mutation.saving.get()>
                {move || if mutation.saving.get() { "Registering..." } else { "Register" }}
            </button>
            <ErrorMessage message=mutation.error />
            <p class="auth-switch">
                "Already registered? "
                <a href=Route::Login.hash() on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Route::Login);
                }>"Login"</a>
            </p>
        </form>
    }
}
