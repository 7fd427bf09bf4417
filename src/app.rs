//! Todo App Root
//!
//! Root view: owns the todo collection, orchestrates all network calls,
//! and schedules the periodic background refresh.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{TodoForm, TodoList};
use crate::context::AppContext;
use crate::models::Todo;
use crate::store::{AppState, AppStore};

/// Default API base address
const DEFAULT_API_URL: &str = "http://localhost:3001";
/// Period between background refreshes of the collection
const REFRESH_INTERVAL_MS: u32 = 1000 * 60 * 15;

#[component]
pub fn App() -> impl IntoView {
    let (api_url, _set_api_url) = signal(String::from(DEFAULT_API_URL));
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    let ctx = AppContext::new(api_url, (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Load the collection on mount and again on every reload trigger
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let url = ctx.api_url.get();
        spawn_local(async move {
            web_sys::console::log_1(&format!("[APP] Loading todos, trigger={}", trigger).into());
            match api::list_todos(&url).await {
                Ok(fetched) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos", fetched.len()).into());
                    store.write().load_succeeded(fetched);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Load failed: {}", e).into());
                    store.write().load_failed(e);
                }
            }
        });
    });

    // Background refresh loop, stopped when the view is torn down
    let (stopped, set_stopped) = signal(false);
    on_cleanup(move || set_stopped.set(true));
    spawn_local(async move {
        loop {
            TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
            if stopped.try_get_untracked().unwrap_or(true) {
                break;
            }
            web_sys::console::log_1(&"[APP] Refreshing data...".into());
            ctx.reload();
        }
    });

    let add_todo = Callback::new(move |todo: Todo| {
        let url = ctx.api_url.get();
        spawn_local(async move {
            match api::create_todo(&url, &todo).await {
                Ok(created) => store.write().create_succeeded(created),
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Create failed: {}", e).into());
                }
            }
        });
    });

    let toggle_done = Callback::new(move |id: u32| {
        let url = ctx.api_url.get();
        // Optimistic flip; refused while a request for this row is unresolved
        let Some(is_done) = store.write().toggle_requested(id) else {
            return;
        };
        spawn_local(async move {
            match api::set_done(&url, id, is_done).await {
                Ok(()) => store.write().toggle_confirmed(id),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[APP] Toggle failed for {}: {}", id, e).into(),
                    );
                    store.write().toggle_failed(id);
                }
            }
        });
    });

    let delete_todo = Callback::new(move |id: u32| {
        let url = ctx.api_url.get();
        if !store.write().delete_requested(id) {
            return;
        }
        spawn_local(async move {
            match api::delete_todo(&url, id).await {
                Ok(()) => store.write().delete_confirmed(id),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[APP] Delete failed for {}: {}", id, e).into(),
                    );
                    store.write().delete_failed(id);
                }
            }
        });
    });

    view! {
        <section class="main-section">
            <h1>"My TODO app"</h1>

            <TodoForm on_add=add_todo />

            <TodoList on_toggle=toggle_done on_delete=delete_todo />
        </section>
    }
}
