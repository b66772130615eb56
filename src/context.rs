//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, warn};
use wasm_bindgen::JsValue;

use crate::actions::{ActionError, PendingGate};
use crate::api::ApiClient;
use crate::config::FLASH_DURATION_MS;
use crate::routes::Route;
use crate::session::SessionState;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Gateway client (holds the session); not `Send`, so kept in local storage
    api: StoredValue<ApiClient, LocalStorage>,
    /// Requested route - read
    pub route: ReadSignal<Route>,
    /// Requested route - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(api: ApiClient, route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            api: StoredValue::new_local(api),
            route: route.0,
            set_route: route.1,
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn session_state(&self) -> SessionState {
        self.api.with_value(|api| api.session().state())
    }

    /// In-app navigation, mirrored into the URL hash
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
        write_hash(route, false);
    }

    /// Replace a route the guard refused, without adding a history entry
    pub fn redirect(&self, route: Route) {
        self.set_route.set(route);
        write_hash(route, true);
    }

    /// Handle a failed call. An expired session on a protected page goes back
    /// to login; a busy gate is ignored; anything else is shown inline.
    pub fn report(&self, err: impl Into<ActionError>, set_error: WriteSignal<Option<String>>) {
        match err.into() {
            ActionError::Busy => {}
            err if err.is_auth_expired() && self.route.get_untracked().is_protected() => {
                self.navigate(Route::Login)
            }
            err => set_error.set(Some(err.to_string())),
        }
    }
}

/// Record the route in the URL hash without firing `hashchange`.
/// `replace` overwrites the current history entry (used for redirects).
pub fn write_hash(route: Route, replace: bool) {
    let current = window().location().hash().unwrap_or_default();
    if current == route.hash() {
        return;
    }
    let Ok(history) = window().history() else {
        warn!("History API unavailable");
        return;
    };
    let hash = route.hash();
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(&hash))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(&hash))
    };
    if result.is_err() {
        warn!("Could not record route {}", route.path());
    }
}

/// Explicit invalidate-and-reload contract for a list-bearing component.
///
/// The loading effect tracks the trigger; mutations call `invalidate`.
#[derive(Clone, Copy)]
pub struct ReloadTrigger {
    read: ReadSignal<u32>,
    write: WriteSignal<u32>,
}

impl ReloadTrigger {
    pub fn new() -> Self {
        let (read, write) = signal(0u32);
        Self { read, write }
    }

    /// Subscribe the current effect to invalidations
    pub fn track(&self) -> u32 {
        self.read.get()
    }

    /// Discard the current snapshot and fetch a fresh one
    pub fn invalidate(&self) {
        self.write.update(|v| *v = v.wrapping_add(1));
    }
}

impl Default for ReloadTrigger {
    fn default() -> Self {
        Self::new()
    }
}

/// One mutation at a time for a view, with its inline error and success messages
#[derive(Clone, Copy)]
pub struct Mutation {
    ctx: AppContext,
    gate: StoredValue<PendingGate, LocalStorage>,
    /// A request from this view is in flight
    pub saving: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
    pub success: ReadSignal<Option<String>>,
    set_success: WriteSignal<Option<String>>,
}

impl Mutation {
    pub fn new(ctx: AppContext) -> Self {
        let (saving, set_saving) = signal(false);
        let (error, set_error) = signal(None::<String>);
        let (success, set_success) = signal(None::<String>);
        Self {
            ctx,
            // `saving` mirrors the gate, so it only turns on once a request owns it
            gate: StoredValue::new_local(PendingGate::observed(move |pending| {
                let _ = set_saving.try_set(pending);
            })),
            saving,
            error,
            set_error,
            success,
            set_success,
        }
    }

    /// Route a failure (from a fetch or a mutation) to this view's error line
    pub fn report(&self, err: impl Into<ActionError>) {
        self.ctx.report(err, self.set_error);
    }

    pub fn clear_error(&self) {
        self.set_error.set(None);
    }

    /// Run `op` against the gateway. On success flash `done` (if any) and call
    /// `on_success`; on failure show the error and leave every draft alone.
    pub fn run<T, F, Fut>(&self, done: Option<&'static str>, op: F, on_success: impl FnOnce(T) + 'static)
    where
        T: 'static,
        F: FnOnce(ApiClient, PendingGate) -> Fut + 'static,
        Fut: Future<Output = Result<T, ActionError>> + 'static,
    {
        let gate = self.gate.get_value();
        if gate.is_pending() {
            debug!("Request already in flight, ignoring");
            return;
        }
        let this = *self;
        let api = self.ctx.api();
        this.set_error.set(None);
        spawn_local(async move {
            match op(api, gate).await {
                Ok(value) => {
                    if let Some(text) = done {
                        flash(this.set_success, text);
                    }
                    on_success(value);
                }
                Err(err) => this.report(err),
            }
        });
    }

    /// Controls stay disabled while the view reloads or this mutation is in flight
    pub fn busy_with(&self, loading: impl Into<Signal<bool>>) -> Signal<bool> {
        let loading = loading.into();
        let saving = self.saving;
        Signal::derive(move || loading.get() || saving.get())
    }
}

/// Show a success message that clears itself after a few seconds
pub fn flash(set_message: WriteSignal<Option<String>>, text: &'static str) {
    set_message.set(Some(text.to_string()));
    spawn_local(async move {
        TimeoutFuture::new(FLASH_DURATION_MS).await;
        // the view may be gone by now
        set_message.try_update(|current| {
            if current.as_deref() == Some(text) {
                *current = None;
            }
        });
    });
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
