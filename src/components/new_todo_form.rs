//! New Todo Form Component
//!
//! Text input bound to the store's input field, plus the "Add" action.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="new-todo-row">
            <input
                type="text"
                placeholder="Add a new todo"
                prop:value=move || ctx.with(|store| store.input().to_string())
                on:input=move |ev| ctx.set_input(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ctx.add();
                    }
                }
            />
            <button class="add-btn" on:click=move |_| ctx.add()>"Add"</button>
        </div>
    }
}
