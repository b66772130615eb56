//! Project Manager App
//!
//! Root component: builds the gateway client, owns the route signal and
//! renders the page the session guard allows.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{Header, Login, ProjectDetail, ProjectList, Register};
use crate::config::ApiConfig;
use crate::context::{write_hash, AppContext};
use crate::routes::Route;
use crate::session::{guard, Session};

fn current_hash_route() -> Route {
    Route::parse(&window().location().hash().unwrap_or_default())
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("API base URL: {}", config.base_url);
    let api = ApiClient::browser(config, Session::browser());

    let initial = current_hash_route();
    let (route, set_route) = signal(initial);
    write_hash(initial, true);

    let ctx = AppContext::new(api, (route, set_route));
    provide_context(ctx);

    // Back/forward and hand-edited URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        let next = current_hash_route();
        if next != route.get_untracked() {
            log::debug!("Hash navigation to {}", next.path());
            set_route.set(next);
        }
    });

    view! {
        <div class="app-layout">
            <h1>"Project Manager"</h1>
            {move || {
                let requested = route.get();
                let resolved = guard(requested, ctx.session_state());
                if resolved != requested {
                    log::info!("{} requires login, redirecting", requested.path());
                    ctx.redirect(resolved);
                }
                render_route(resolved)
            }}
        </div>
    }
}

fn render_route(route: Route) -> AnyView {
    match route {
        Route::Login => view! { <Login /> }.into_any(),
        Route::Register => view! { <Register /> }.into_any(),
        Route::Dashboard => view! {
            <Header />
            <main class="main-content"><ProjectList /></main>
        }
        .into_any(),
        Route::Project(id) => view! {
            <Header />
            <main class="main-content"><ProjectDetail project_id=id /></main>
        }
        .into_any(),
    }
}
