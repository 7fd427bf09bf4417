//! Todo Row Component
//!
//! A single checkable, deletable row.

use leptos::prelude::*;

use crate::models::Todo;
use crate::store::use_app_store;

/// One row in the todo list
#[component]
pub fn TodoRow(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<u32>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let is_done = todo.is_done;
    let task = todo.task.clone();

    // Disabled while this row's toggle/delete request is unresolved
    let in_flight = move || store.read().is_in_flight(id);
    let has_failed = move || store.read().has_failed(id);

    view! {
        <li class=move || if is_done { "todo-row done" } else { "todo-row" }>
            <input
                type="checkbox"
                checked=is_done
                prop:disabled=in_flight
                on:change=move |_| on_toggle.run(id)
            />

            <span class="todo-text">{task}</span>

            <Show when=has_failed>
                <span class="row-error" title="Request failed, try again">"!"</span>
            </Show>

            <button
                class="delete-btn"
                prop:disabled=in_flight
                on:click=move |_| {
                    if in_flight() {
                        return;
                    }
                    on_delete.run(id);
                }
            >
                "×"
            </button>
        </li>
    }
}
