//! Inline Messages
//!
//! Error and success lines rendered next to the form that produced them.

use leptos::prelude::*;

#[component]
pub fn ErrorMessage(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <p class="error-message" role="alert">{text}</p>
        })}
    }
}

#[component]
pub fn SuccessMessage(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <p class="success-message" role="status">{text}</p>
        })}
    }
}
