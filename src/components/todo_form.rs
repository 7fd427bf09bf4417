//! Todo Creation Form Component
//!
//! Collects a task description and emits it upward as a create intent.
//! Holds no knowledge of the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Todo;

/// Form for creating new todos
#[component]
pub fn TodoForm(#[prop(into)] on_add: Callback<Todo>) -> impl IntoView {
    let (task, set_task) = signal(String::new());

    // Enter in the input and the button both land here via form submit.
    // Empty tasks are permitted and sent as-is.
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run(Todo::new_task(task.get()));
        set_task.set(String::new());
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <fieldset>
                <legend>"Create Todo item"</legend>
                <input
                    type="text"
                    prop:value=move || task.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_task.set(input.value());
                    }
                />
                <button type="submit">"Add task"</button>
            </fieldset>
        </form>
    }
}
