//! Todo List Component
//!
//! Renders the cached collection as rows. A loading placeholder shows only
//! while the first fetch has not completed, so a genuinely empty list is
//! not mistaken for one that was never loaded.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields, LoadStatus};

/// Todo list view
#[component]
pub fn TodoList(
    #[prop(into)] on_toggle: Callback<u32>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let loaded = move || store.load_status().get() == LoadStatus::Loaded;
    let is_empty = move || store.todos().get().is_empty();

    view! {
        <main class="todo-area">
            <h1>"My TODO list"</h1>

            {move || store.load_error().get().map(|e| view! {
                <p class="load-error">
                    <span>{format!("Refresh failed: {}", e)}</span>
                    <button class="retry-btn" on:click=move |_| ctx.reload()>"Retry"</button>
                </p>
            })}

            <Show when=move || !loaded()>
                <p class="loading">"Loading to do list..."</p>
            </Show>

            <Show when=move || loaded() && is_empty()>
                <p class="empty">"Nothing to do yet."</p>
            </Show>

            <Show when=move || loaded() && !is_empty()>
                <ul>
                    <For
                        each=move || store.todos().get()
                        key=|todo| (todo.id, todo.is_done, todo.task.clone())
                        children=move |todo| {
                            view! {
                                <TodoRow todo=todo on_toggle=on_toggle on_delete=on_delete />
                            }
                        }
                    />
                </ul>
                <p class="item-count">{move || format!("{} items", store.todos().get().len())}</p>
            </Show>
        </main>
    }
}
