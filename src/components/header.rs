//! Header Component
//!
//! Navigation bar shown above protected pages.

use leptos::prelude::*;

use crate::components::LogPanel;
use crate::context::use_app_context;
use crate::routes::Route;
use crate::services;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    let logout = move |_| {
        services::logout(ctx.api().session());
        log::info!("Logged out");
        ctx.navigate(Route::Login);
    };

    view! {
        <nav class="app-header">
            <button class="nav-btn" on:click=move |_| ctx.navigate(Route::Dashboard)>"Dashboard"</button>
            <button class="logout-btn" on:click=logout>"Logout"</button>
            <LogPanel />
        </nav>
    }
}
