//! Todo List View Component
//!
//! Renders the todos, or the validation/blank message when the list is empty.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::store::DisplayState;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();

    let has_todos = move || ctx.with(|store| matches!(store.display(), DisplayState::List(_)));
    let message = move || {
        ctx.with(|store| match store.display() {
            DisplayState::Message(msg) => msg.to_string(),
            DisplayState::List(_) => String::new(),
        })
    };

    view! {
        <ul class="todo-list">
            <Show
                when=has_todos
                fallback=move || view! { <span class="todo-message">{message}</span> }
            >
                <For
                    each=move || ctx.with(|store| store.todos().to_vec())
                    key=|todo| todo.id.clone()
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </Show>
        </ul>
    }
}
